//! The inline two-alternative container.
//!
//! [`Either<L, R, S>`] stores exactly one value, of type `L` or `R`, directly
//! inside itself. The value lives in a [`Slot`] sized for the larger
//! alternative; a [`Side`] records which alternative is live. There is no
//! empty state: every constructor takes a value.
//!
//! # Examples
//!
//! ```rust
//! use inline_either::Either;
//!
//! let mut either: Either<i32, String> = Either::new_left(2);
//! assert!(either.is_left());
//! assert_eq!(*either.as_left(), 2);
//!
//! // Switching alternatives destroys the integer and builds the string.
//! either.assign_right("hi".to_string());
//! assert!(either.is_right());
//! assert_eq!(either.as_right(), "hi");
//!
//! // Assigning the live alternative reuses the existing object.
//! either.right_ref().push('!');
//! assert_eq!(either.as_right(), "hi!");
//! ```
//!
//! # Choosing a storage strategy
//!
//! ```rust
//! use inline_either::{ByteEither, UnionEither};
//!
//! let by_union: UnionEither<u8, u64> = UnionEither::new_right(0xff_ffff_ffff);
//! let by_bytes: ByteEither<u8, u64> = ByteEither::new_right(0xff_ffff_ffff);
//! assert_eq!(by_union.as_right(), by_bytes.as_right());
//! ```

mod combinators;
mod lifecycle;
#[cfg(feature = "serde")]
mod serde_support;
mod traits;

use core::marker::PhantomData;
use core::mem::ManuallyDrop;

use crate::storage::{ByteSlot, Slot, UnionSlot, raw};
use crate::{AccessError, Alternative, Side};

/// A value that is either an `L` or an `R`, stored inline.
///
/// `S` selects the storage strategy and defaults to [`UnionSlot`]. The
/// container owns its live value: dropping the container drops that value,
/// and never the other alternative.
pub struct Either<L, R, S: Slot<L, R> = UnionSlot<L, R>> {
    side: Side,
    slot: S,
    marker: PhantomData<(L, R)>,
}

/// An [`Either`] backed by native overlapping storage.
pub type UnionEither<L, R> = Either<L, R, UnionSlot<L, R>>;

/// An [`Either`] backed by an opaque byte region.
pub type ByteEither<L, R> = Either<L, R, ByteSlot<L, R>>;

impl<L, R, S: Slot<L, R>> Either<L, R, S> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a container holding the left alternative.
    #[inline]
    pub fn new_left(value: L) -> Self {
        let mut slot = S::uninit();
        // SAFETY: the slot is fresh, so nothing live is overwritten.
        unsafe { raw::construct(slot.left_mut_ptr(), value) };
        Self {
            side: Side::Left,
            slot,
            marker: PhantomData,
        }
    }

    /// Creates a container holding the right alternative.
    #[inline]
    pub fn new_right(value: R) -> Self {
        let mut slot = S::uninit();
        // SAFETY: the slot is fresh, so nothing live is overwritten.
        unsafe { raw::construct(slot.right_mut_ptr(), value) };
        Self {
            side: Side::Right,
            slot,
            marker: PhantomData,
        }
    }

    // =========================================================================
    // Discriminant Queries
    // =========================================================================

    /// Returns `true` if the left alternative is live.
    #[inline]
    pub const fn is_left(&self) -> bool {
        self.side.is_left()
    }

    /// Returns `true` if the right alternative is live.
    #[inline]
    pub const fn is_right(&self) -> bool {
        self.side.is_right()
    }

    /// Returns the live side.
    #[inline]
    pub const fn side(&self) -> Side {
        self.side
    }

    // =========================================================================
    // Checked Access
    // =========================================================================

    /// Returns the left value, or an [`AccessError`] if the right one is live.
    ///
    /// # Errors
    ///
    /// Fails when the right alternative is live.
    #[inline]
    pub fn try_left(&self) -> Result<&L, AccessError> {
        match self.side {
            // SAFETY: the left alternative is live and borrowed through `&self`.
            Side::Left => Ok(unsafe { raw::live_ref(self.slot.left_ptr()) }),
            Side::Right => Err(AccessError::wrong_side(self.side)),
        }
    }

    /// Returns the right value, or an [`AccessError`] if the left one is live.
    ///
    /// # Errors
    ///
    /// Fails when the left alternative is live.
    #[inline]
    pub fn try_right(&self) -> Result<&R, AccessError> {
        match self.side {
            Side::Left => Err(AccessError::wrong_side(self.side)),
            // SAFETY: the right alternative is live and borrowed through `&self`.
            Side::Right => Ok(unsafe { raw::live_ref(self.slot.right_ptr()) }),
        }
    }

    /// Mutable form of [`try_left`](Self::try_left).
    ///
    /// # Errors
    ///
    /// Fails when the right alternative is live.
    #[inline]
    pub fn try_left_mut(&mut self) -> Result<&mut L, AccessError> {
        match self.side {
            // SAFETY: the left alternative is live and borrowed through `&mut self`.
            Side::Left => Ok(unsafe { raw::live_mut(self.slot.left_mut_ptr()) }),
            Side::Right => Err(AccessError::wrong_side(self.side)),
        }
    }

    /// Mutable form of [`try_right`](Self::try_right).
    ///
    /// # Errors
    ///
    /// Fails when the left alternative is live.
    #[inline]
    pub fn try_right_mut(&mut self) -> Result<&mut R, AccessError> {
        match self.side {
            Side::Left => Err(AccessError::wrong_side(self.side)),
            // SAFETY: the right alternative is live and borrowed through `&mut self`.
            Side::Right => Ok(unsafe { raw::live_mut(self.slot.right_mut_ptr()) }),
        }
    }

    /// Returns the left value if it is live.
    #[inline]
    pub fn get_left(&self) -> Option<&L> {
        self.try_left().ok()
    }

    /// Returns the right value if it is live.
    #[inline]
    pub fn get_right(&self) -> Option<&R> {
        self.try_right().ok()
    }

    // =========================================================================
    // Contract Access
    // =========================================================================

    /// Returns the left value.
    ///
    /// # Panics
    ///
    /// Panics if the right alternative is live. Check [`is_left`](Self::is_left)
    /// first, or use [`try_left`](Self::try_left).
    #[inline]
    #[track_caller]
    pub fn as_left(&self) -> &L {
        match self.try_left() {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }

    /// Returns the right value.
    ///
    /// # Panics
    ///
    /// Panics if the left alternative is live.
    #[inline]
    #[track_caller]
    pub fn as_right(&self) -> &R {
        match self.try_right() {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }

    /// Returns the left value mutably.
    ///
    /// # Panics
    ///
    /// Panics if the right alternative is live.
    #[inline]
    #[track_caller]
    pub fn left_ref(&mut self) -> &mut L {
        match self.try_left_mut() {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }

    /// Returns the right value mutably.
    ///
    /// # Panics
    ///
    /// Panics if the left alternative is live.
    #[inline]
    #[track_caller]
    pub fn right_ref(&mut self) -> &mut R {
        match self.try_right_mut() {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }

    /// Returns the left value without checking the discriminant.
    ///
    /// # Safety
    ///
    /// The left alternative must be live.
    #[inline]
    pub unsafe fn as_left_unchecked(&self) -> &L {
        debug_assert!(self.is_left(), "{}", AccessError::wrong_side(self.side));
        // SAFETY: caller guarantees the left alternative is live.
        unsafe { raw::live_ref(self.slot.left_ptr()) }
    }

    /// Returns the right value without checking the discriminant.
    ///
    /// # Safety
    ///
    /// The right alternative must be live.
    #[inline]
    pub unsafe fn as_right_unchecked(&self) -> &R {
        debug_assert!(self.is_right(), "{}", AccessError::wrong_side(self.side));
        // SAFETY: caller guarantees the right alternative is live.
        unsafe { raw::live_ref(self.slot.right_ptr()) }
    }

    /// Returns the left value mutably without checking the discriminant.
    ///
    /// # Safety
    ///
    /// The left alternative must be live.
    #[inline]
    pub unsafe fn left_ref_unchecked(&mut self) -> &mut L {
        debug_assert!(self.is_left(), "{}", AccessError::wrong_side(self.side));
        // SAFETY: caller guarantees the left alternative is live.
        unsafe { raw::live_mut(self.slot.left_mut_ptr()) }
    }

    /// Returns the right value mutably without checking the discriminant.
    ///
    /// # Safety
    ///
    /// The right alternative must be live.
    #[inline]
    pub unsafe fn right_ref_unchecked(&mut self) -> &mut R {
        debug_assert!(self.is_right(), "{}", AccessError::wrong_side(self.side));
        // SAFETY: caller guarantees the right alternative is live.
        unsafe { raw::live_mut(self.slot.right_mut_ptr()) }
    }

    // =========================================================================
    // Native Enum Views
    // =========================================================================

    /// Borrows the live value as an [`Alternative`].
    #[inline]
    pub fn as_alternative(&self) -> Alternative<&L, &R> {
        match self.side {
            // SAFETY: the left alternative is live.
            Side::Left => Alternative::Left(unsafe { raw::live_ref(self.slot.left_ptr()) }),
            // SAFETY: the right alternative is live.
            Side::Right => Alternative::Right(unsafe { raw::live_ref(self.slot.right_ptr()) }),
        }
    }

    /// Mutably borrows the live value as an [`Alternative`].
    #[inline]
    pub fn as_alternative_mut(&mut self) -> Alternative<&mut L, &mut R> {
        match self.side {
            // SAFETY: the left alternative is live.
            Side::Left => Alternative::Left(unsafe { raw::live_mut(self.slot.left_mut_ptr()) }),
            // SAFETY: the right alternative is live.
            Side::Right => {
                Alternative::Right(unsafe { raw::live_mut(self.slot.right_mut_ptr()) })
            }
        }
    }

    /// Moves the live value out as an [`Alternative`].
    #[inline]
    pub fn into_alternative(self) -> Alternative<L, R> {
        // The live value is moved out below; the container must not drop it.
        let this = ManuallyDrop::new(self);
        match this.side {
            // SAFETY: the left alternative is live and `this` is never used again.
            Side::Left => Alternative::Left(unsafe { raw::take_out(this.slot.left_ptr()) }),
            // SAFETY: the right alternative is live and `this` is never used again.
            Side::Right => Alternative::Right(unsafe { raw::take_out(this.slot.right_ptr()) }),
        }
    }
}

impl<L, R, S: Slot<L, R>> Drop for Either<L, R, S> {
    fn drop(&mut self) {
        // SAFETY: the side names the live alternative, and the container is never used again.
        unsafe { self.destroy_live() };
    }
}
