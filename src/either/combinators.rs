//! Consuming transformations, adapted to keep the caller's storage strategy.
//!
//! Every combinator returns an `Either` built on `S::Rebind`, so a
//! [`ByteEither`](crate::ByteEither) stays byte-backed after `map_left`.

use super::Either;
use crate::Alternative;
use crate::storage::Slot;

impl<L, R, S: Slot<L, R>> Either<L, R, S> {
    // =========================================================================
    // Value Extraction (Consuming)
    // =========================================================================

    /// Returns the left value, if that is the live one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inline_either::Either;
    ///
    /// let left: Either<i32, String> = Either::new_left(42);
    /// assert_eq!(left.into_left(), Some(42));
    ///
    /// let right: Either<i32, String> = Either::new_right("hello".to_string());
    /// assert_eq!(right.into_left(), None);
    /// ```
    #[inline]
    pub fn into_left(self) -> Option<L> {
        match self.into_alternative() {
            Alternative::Left(value) => Some(value),
            Alternative::Right(_) => None,
        }
    }

    /// Returns the right value, if that is the live one.
    #[inline]
    pub fn into_right(self) -> Option<R> {
        match self.into_alternative() {
            Alternative::Left(_) => None,
            Alternative::Right(value) => Some(value),
        }
    }

    /// Converts into a pair of `Option`s, exactly one of which is `Some`.
    #[inline]
    pub fn into_options(self) -> (Option<L>, Option<R>) {
        match self.into_alternative() {
            Alternative::Left(value) => (Some(value), None),
            Alternative::Right(value) => (None, Some(value)),
        }
    }

    /// Returns the left value.
    ///
    /// # Panics
    ///
    /// Panics if the right alternative is live.
    #[inline]
    #[track_caller]
    pub fn unwrap_left(self) -> L {
        match self.into_alternative() {
            Alternative::Left(value) => value,
            Alternative::Right(_) => panic!("called `Either::unwrap_left()` on a `Right` value"),
        }
    }

    /// Returns the right value.
    ///
    /// # Panics
    ///
    /// Panics if the left alternative is live.
    #[inline]
    #[track_caller]
    pub fn unwrap_right(self) -> R {
        match self.into_alternative() {
            Alternative::Left(_) => panic!("called `Either::unwrap_right()` on a `Left` value"),
            Alternative::Right(value) => value,
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies `function` to the left value; a right value passes through.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inline_either::Either;
    ///
    /// let left: Either<i32, String> = Either::new_left(21);
    /// assert_eq!(left.map_left(|x| x * 2), Either::new_left(42));
    /// ```
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R, S::Rebind<T, R>>
    where
        F: FnOnce(L) -> T,
    {
        match self.into_alternative() {
            Alternative::Left(value) => Either::new_left(function(value)),
            Alternative::Right(value) => Either::new_right(value),
        }
    }

    /// Applies `function` to the right value; a left value passes through.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inline_either::Either;
    ///
    /// let right: Either<i32, String> = Either::new_right("hello".to_string());
    /// assert_eq!(right.map_right(|text| text.len()), Either::new_right(5));
    /// ```
    #[inline]
    pub fn map_right<T, F>(self, function: F) -> Either<L, T, S::Rebind<L, T>>
    where
        F: FnOnce(R) -> T,
    {
        match self.into_alternative() {
            Alternative::Left(value) => Either::new_left(value),
            Alternative::Right(value) => Either::new_right(function(value)),
        }
    }

    /// Applies whichever function matches the live side.
    #[inline]
    pub fn bimap<T, U, F, G>(
        self,
        left_function: F,
        right_function: G,
    ) -> Either<T, U, S::Rebind<T, U>>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self.into_alternative() {
            Alternative::Left(value) => Either::new_left(left_function(value)),
            Alternative::Right(value) => Either::new_right(right_function(value)),
        }
    }

    /// Eliminates the container by applying one of two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inline_either::Either;
    ///
    /// let right: Either<i32, String> = Either::new_right("hello".to_string());
    /// assert_eq!(right.fold(|x| x.to_string(), |text| text), "hello");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self.into_alternative() {
            Alternative::Left(value) => left_function(value),
            Alternative::Right(value) => right_function(value),
        }
    }

    /// Exchanges the two sides: a left `l` becomes a right `l`.
    #[inline]
    pub fn swap(self) -> Either<R, L, S::Rebind<R, L>> {
        match self.into_alternative() {
            Alternative::Left(value) => Either::new_right(value),
            Alternative::Right(value) => Either::new_left(value),
        }
    }
}

impl<L: Default, R, S: Slot<L, R>> Either<L, R, S> {
    /// Returns the left value, or `L::default()` if the right one is live.
    #[inline]
    pub fn left_or_default(self) -> L {
        self.into_left().unwrap_or_default()
    }
}

impl<L, R: Default, S: Slot<L, R>> Either<L, R, S> {
    /// Returns the right value, or `R::default()` if the left one is live.
    #[inline]
    pub fn right_or_default(self) -> R {
        self.into_right().unwrap_or_default()
    }
}
