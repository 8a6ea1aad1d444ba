//! A native enum view of the two alternatives.
//!
//! [`Either`](crate::Either) keeps its value in raw storage behind a
//! discriminant, which cannot be pattern matched directly. `Alternative` is
//! the plain Rust sum type the container converts to and from, so callers
//! can `match` on the live value:
//!
//! ```rust
//! use inline_either::{Alternative, Either};
//!
//! let mut either: Either<i32, String> = Either::new_left(2);
//!
//! match either.as_alternative_mut() {
//!     Alternative::Left(number) => *number += 1,
//!     Alternative::Right(text) => text.push('!'),
//! }
//!
//! assert_eq!(either.into_alternative(), Alternative::Left(3));
//! ```

use crate::Side;

/// One of two values, as an ordinary enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Alternative<L, R> {
    /// A value of the left type.
    Left(L),
    /// A value of the right type.
    Right(R),
}

impl<L, R> Alternative<L, R> {
    /// Returns the side this value belongs to.
    #[inline]
    pub const fn side(&self) -> Side {
        match self {
            Self::Left(_) => Side::Left,
            Self::Right(_) => Side::Right,
        }
    }

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Borrows the payload.
    #[inline]
    pub const fn as_ref(&self) -> Alternative<&L, &R> {
        match self {
            Self::Left(value) => Alternative::Left(value),
            Self::Right(value) => Alternative::Right(value),
        }
    }

    /// Mutably borrows the payload.
    #[inline]
    pub const fn as_mut(&mut self) -> Alternative<&mut L, &mut R> {
        match self {
            Self::Left(value) => Alternative::Left(value),
            Self::Right(value) => Alternative::Right(value),
        }
    }
}

impl<L, R> From<Result<R, L>> for Alternative<L, R> {
    /// `Ok` becomes `Right`, `Err` becomes `Left`.
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}
