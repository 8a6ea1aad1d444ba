//! Standard trait implementations.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

use super::Either;
use crate::Alternative;
use crate::storage::Slot;

// =============================================================================
// Copy Construction and Copy Assignment
// =============================================================================

impl<L: Clone, R: Clone, S: Slot<L, R>> Clone for Either<L, R, S> {
    /// Clones only the live value; the inactive alternative is never touched.
    #[inline]
    fn clone(&self) -> Self {
        match self.as_alternative() {
            Alternative::Left(value) => Self::new_left(value.clone()),
            Alternative::Right(value) => Self::new_right(value.clone()),
        }
    }

    /// Destroys the live value of `self`, then constructs a copy of
    /// `source`'s live value, even when both sides match.
    #[inline]
    fn clone_from(&mut self, source: &Self) {
        self.clone_assign(source);
    }
}

// =============================================================================
// Equality and Ordering
// =============================================================================

impl<L: PartialEq, R: PartialEq, S: Slot<L, R>> PartialEq for Either<L, R, S> {
    /// Equal only when the same side is live in both and the values are equal.
    fn eq(&self, other: &Self) -> bool {
        match (self.as_alternative(), other.as_alternative()) {
            (Alternative::Left(mine), Alternative::Left(theirs)) => mine == theirs,
            (Alternative::Right(mine), Alternative::Right(theirs)) => mine == theirs,
            _ => false,
        }
    }
}

impl<L: Eq, R: Eq, S: Slot<L, R>> Eq for Either<L, R, S> {}

impl<L: PartialOrd, R: PartialOrd, S: Slot<L, R>> PartialOrd for Either<L, R, S> {
    /// Every left value orders before every right value.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_alternative().partial_cmp(&other.as_alternative())
    }
}

impl<L: Ord, R: Ord, S: Slot<L, R>> Ord for Either<L, R, S> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_alternative().cmp(&other.as_alternative())
    }
}

impl<L: Hash, R: Hash, S: Slot<L, R>> Hash for Either<L, R, S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.side.hash(state);
        match self.as_alternative() {
            Alternative::Left(value) => value.hash(state),
            Alternative::Right(value) => value.hash(state),
        }
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<L: fmt::Debug, R: fmt::Debug, S: Slot<L, R>> fmt::Debug for Either<L, R, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_alternative() {
            Alternative::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Alternative::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<L, R, S: Slot<L, R>> From<Alternative<L, R>> for Either<L, R, S> {
    #[inline]
    fn from(alternative: Alternative<L, R>) -> Self {
        match alternative {
            Alternative::Left(value) => Self::new_left(value),
            Alternative::Right(value) => Self::new_right(value),
        }
    }
}

impl<L, R, S: Slot<L, R>> From<Either<L, R, S>> for Alternative<L, R> {
    #[inline]
    fn from(either: Either<L, R, S>) -> Self {
        either.into_alternative()
    }
}

impl<L, R, S: Slot<L, R>> From<Result<R, L>> for Either<L, R, S> {
    /// Converts a `Result`: `Ok(r)` becomes a right, `Err(l)` a left.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inline_either::Either;
    ///
    /// let ok: Result<i32, String> = Ok(42);
    /// let either: Either<String, i32> = ok.into();
    /// assert_eq!(either, Either::new_right(42));
    /// ```
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        Alternative::from(result).into()
    }
}

impl<L, R, S: Slot<L, R>> From<Either<L, R, S>> for Result<R, L> {
    /// Converts to a `Result`: a right becomes `Ok`, a left becomes `Err`.
    #[inline]
    fn from(either: Either<L, R, S>) -> Self {
        match either.into_alternative() {
            Alternative::Left(value) => Err(value),
            Alternative::Right(value) => Ok(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_differing_sides_never_equal() {
        let left: Either<u8, u8> = Either::new_left(7);
        let right: Either<u8, u8> = Either::new_right(7);
        assert_ne!(left, right);
    }

    #[rstest]
    fn test_left_orders_before_right() {
        let left: Either<i32, i32> = Either::new_left(100);
        let right: Either<i32, i32> = Either::new_right(-100);
        assert!(left < right);
        assert_eq!(left.cmp(&Either::new_left(3)), Ordering::Greater);
    }

    #[rstest]
    fn test_debug_names_live_side() {
        let either: Either<i32, &str> = Either::new_right("x");
        assert_eq!(format!("{either:?}"), "Right(\"x\")");
    }

    #[rstest]
    fn test_result_roundtrip() {
        let err: Result<i32, String> = Err("error".to_string());
        let either: Either<String, i32> = err.into();
        assert!(either.is_left());
        let back: Result<i32, String> = either.into();
        assert_eq!(back, Err("error".to_string()));
    }
}
