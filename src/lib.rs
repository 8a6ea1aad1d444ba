//! # inline-either
//!
//! A two-alternative value container that stores one of two typed values
//! inline, without heap allocation.
//!
//! ## Overview
//!
//! [`Either<L, R>`] holds exactly one live value, either an `L` or an `R`, in
//! storage sized for the larger of the two. It behaves like a value:
//!
//! - **Construction** always takes a value; there is no empty state.
//! - **Cloning** copies only the live value.
//! - **Assignment** from a bare value reuses the live object when the
//!   alternative is unchanged, and otherwise destroys it before constructing
//!   the new one.
//! - **Equality** is tag-aware: values on different sides are never equal.
//! - **Dropping** destroys exactly the live value, exactly once.
//!
//! The native enum [`Alternative`] is the pattern-matchable view of a
//! container, and [`Side`] is its discriminant.
//!
//! ## Feature Flags
//!
//! - `std` (default): implements `std::error::Error` for [`AccessError`].
//!   Without it the crate is `no_std`.
//! - `serde`: `Serialize`/`Deserialize` for [`Either`], [`Alternative`] and
//!   [`Side`].
//! - `tracing`: trace events for alternative switches and container
//!   assignments.
//! - `full`: enable all features.
//!
//! ## Example
//!
//! ```rust
//! use inline_either::prelude::*;
//!
//! let mut either: Either<i32, String> = Either::new_left(2);
//! either.assign_right("hi".to_string());
//!
//! match either.as_alternative() {
//!     Alternative::Left(number) => println!("number {number}"),
//!     Alternative::Right(text) => assert_eq!(text, "hi"),
//! }
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![warn(missing_docs)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use inline_either::prelude::*;
/// ```
pub mod prelude {
    pub use crate::alternative::Alternative;
    pub use crate::either::{ByteEither, Either, UnionEither};
    pub use crate::error::AccessError;
    pub use crate::side::Side;
}

pub mod alternative;
pub mod either;
pub mod error;
pub mod side;
pub mod storage;

pub use alternative::Alternative;
pub use either::{ByteEither, Either, UnionEither};
pub use error::AccessError;
pub use side::Side;
pub use storage::{ByteSlot, Slot, UnionSlot};
