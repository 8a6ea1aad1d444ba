//! Construction, destruction and assignment of the live alternative.
//!
//! Two assignment policies coexist:
//!
//! - Value assignment (`assign_left`, `assign_right` and the `_cloned`
//!   forms) reuses the live object when the alternative does not change,
//!   through the alternative's own assignment or `clone_from`.
//! - Container assignment (`clone_from`, `take_from`) always destroys the
//!   live object and constructs a new one, whichever sides are involved.
//!
//! Every change of the live object goes through [`Either::replace_live`]:
//! destroy the current value completely, construct the incoming one in the
//! slot, then record its side.

use core::marker::PhantomData;
use core::mem::{self, ManuallyDrop};

use super::Either;
use crate::Side;
use crate::storage::{Slot, raw};

/// Type-level selection of one alternative.
trait Pick<L, R> {
    type Value;
    const SIDE: Side;

    fn place<S: Slot<L, R>>(slot: &mut S) -> *mut Self::Value;
}

enum PickLeft {}

enum PickRight {}

impl<L, R> Pick<L, R> for PickLeft {
    type Value = L;
    const SIDE: Side = Side::Left;

    #[inline]
    fn place<S: Slot<L, R>>(slot: &mut S) -> *mut L {
        slot.left_mut_ptr()
    }
}

impl<L, R> Pick<L, R> for PickRight {
    type Value = R;
    const SIDE: Side = Side::Right;

    #[inline]
    fn place<S: Slot<L, R>>(slot: &mut S) -> *mut R {
        slot.right_mut_ptr()
    }
}

/// Second half of a replacement.
///
/// Constructing the incoming value happens in `Drop`, so it also runs when
/// the outgoing value's destructor unwinds; the container then still holds
/// exactly one live value and is never dropped twice.
struct Install<'a, L, R, S: Slot<L, R>, P: Pick<L, R>> {
    either: &'a mut Either<L, R, S>,
    incoming: ManuallyDrop<P::Value>,
    marker: PhantomData<P>,
}

impl<L, R, S: Slot<L, R>, P: Pick<L, R>> Drop for Install<'_, L, R, S, P> {
    fn drop(&mut self) {
        // SAFETY: `incoming` is taken exactly once, here.
        let value = unsafe { ManuallyDrop::take(&mut self.incoming) };
        // SAFETY: the outgoing value has been destroyed, so the slot holds nothing live.
        unsafe { raw::construct(P::place(&mut self.either.slot), value) };
        self.either.side = P::SIDE;
    }
}

impl<L, R, S: Slot<L, R>> Either<L, R, S> {
    /// Drops the live alternative in place.
    ///
    /// # Safety
    ///
    /// Afterwards the slot holds nothing live; the caller must construct a new
    /// value before the container is observed or dropped again.
    #[inline]
    pub(super) unsafe fn destroy_live(&mut self) {
        match self.side {
            // SAFETY: the left alternative is live; caller upholds single destruction.
            Side::Left => unsafe { raw::destroy(self.slot.left_mut_ptr()) },
            // SAFETY: the right alternative is live; caller upholds single destruction.
            Side::Right => unsafe { raw::destroy(self.slot.right_mut_ptr()) },
        }
    }

    /// Destroys the live value, then constructs `incoming` as alternative `P`.
    fn replace_live<P: Pick<L, R>>(&mut self, incoming: P::Value) {
        #[cfg(feature = "tracing")]
        tracing::trace!(
            strategy = S::STRATEGY,
            from = %self.side,
            to = %P::SIDE,
            "replace live alternative"
        );

        let install = Install::<L, R, S, P> {
            either: self,
            incoming: ManuallyDrop::new(incoming),
            marker: PhantomData,
        };
        // SAFETY: the side names the live value; `install` constructs the
        // replacement when it goes out of scope, even during unwinding.
        unsafe { install.either.destroy_live() };
        drop(install);
    }

    // =========================================================================
    // Value Assignment
    // =========================================================================

    /// Makes `value` the live left alternative.
    ///
    /// If the left alternative is already live it is overwritten in place by
    /// ordinary assignment. Otherwise the right value is destroyed first and
    /// `value` is then constructed in its place.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inline_either::Either;
    ///
    /// let mut either: Either<u8, u64> = Either::new_right(0xff_ffff_ffff);
    /// either.assign_left(2);
    /// assert!(either.is_left());
    /// assert_eq!(*either.as_left(), 2);
    /// ```
    #[inline]
    pub fn assign_left(&mut self, value: L) {
        match self.side {
            // SAFETY: the left alternative is live.
            Side::Left => *unsafe { raw::live_mut(self.slot.left_mut_ptr()) } = value,
            Side::Right => self.replace_live::<PickLeft>(value),
        }
    }

    /// Makes `value` the live right alternative.
    ///
    /// Mirrors [`assign_left`](Self::assign_left).
    #[inline]
    pub fn assign_right(&mut self, value: R) {
        match self.side {
            Side::Left => self.replace_live::<PickRight>(value),
            // SAFETY: the right alternative is live.
            Side::Right => *unsafe { raw::live_mut(self.slot.right_mut_ptr()) } = value,
        }
    }

    /// Makes a copy of `value` the live left alternative.
    ///
    /// When the left alternative is already live this calls
    /// [`Clone::clone_from`] on it, letting types such as `String` or `Vec`
    /// keep their existing allocation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inline_either::Either;
    ///
    /// let mut either: Either<String, i32> = Either::new_left(String::with_capacity(64));
    /// let buffer = either.as_left().as_ptr();
    ///
    /// either.assign_left_cloned(&"reused".to_string());
    /// assert_eq!(either.as_left(), "reused");
    /// assert_eq!(either.as_left().as_ptr(), buffer);
    /// ```
    #[inline]
    pub fn assign_left_cloned(&mut self, value: &L)
    where
        L: Clone,
    {
        match self.side {
            // SAFETY: the left alternative is live.
            Side::Left => unsafe { raw::live_mut(self.slot.left_mut_ptr()) }.clone_from(value),
            Side::Right => self.replace_live::<PickLeft>(value.clone()),
        }
    }

    /// Makes a copy of `value` the live right alternative.
    ///
    /// Mirrors [`assign_left_cloned`](Self::assign_left_cloned).
    #[inline]
    pub fn assign_right_cloned(&mut self, value: &R)
    where
        R: Clone,
    {
        match self.side {
            Side::Left => self.replace_live::<PickRight>(value.clone()),
            // SAFETY: the right alternative is live.
            Side::Right => unsafe { raw::live_mut(self.slot.right_mut_ptr()) }.clone_from(value),
        }
    }

    // =========================================================================
    // Move Semantics
    // =========================================================================

    /// Moves the live value into a new container.
    ///
    /// `self` keeps its side; its live value is replaced by that
    /// alternative's `Default`, which is its moved-from state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inline_either::Either;
    ///
    /// let mut source: Either<Option<Box<[u8]>>, [u8; 10]> =
    ///     Either::new_left(Some(vec![0; 10].into_boxed_slice()));
    ///
    /// let destination = source.take();
    /// assert!(source.is_left() && destination.is_left());
    /// assert!(source.as_left().is_none());
    /// assert!(destination.as_left().is_some());
    /// ```
    #[must_use = "use `assign_left`/`assign_right` to reset a container in place"]
    pub fn take(&mut self) -> Self
    where
        L: Default,
        R: Default,
    {
        match self.side {
            // SAFETY: the left alternative is live.
            Side::Left => Self::new_left(mem::take(unsafe {
                raw::live_mut(self.slot.left_mut_ptr())
            })),
            // SAFETY: the right alternative is live.
            Side::Right => Self::new_right(mem::take(unsafe {
                raw::live_mut(self.slot.right_mut_ptr())
            })),
        }
    }

    /// Move-assigns from another container.
    ///
    /// The live value of `self` is destroyed, and `source`'s live value is
    /// moved into its place; `self` then reports `source`'s side. `source`
    /// keeps its side and is left holding that alternative's `Default`.
    ///
    /// `source` can never be `self`, so this never reads a value it has
    /// already destroyed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inline_either::Either;
    ///
    /// let mut target: Either<String, i32> = Either::new_right(22);
    /// let mut source: Either<String, i32> = Either::new_left("moved".to_string());
    ///
    /// target.take_from(&mut source);
    /// assert_eq!(target.as_left(), "moved");
    /// assert_eq!(source.as_left(), "");
    /// ```
    pub fn take_from(&mut self, source: &mut Self)
    where
        L: Default,
        R: Default,
    {
        #[cfg(feature = "tracing")]
        tracing::trace!(
            strategy = S::STRATEGY,
            from = %self.side,
            to = %source.side,
            "container move assignment"
        );

        match source.side {
            // SAFETY: the left alternative of `source` is live.
            Side::Left => self.replace_live::<PickLeft>(mem::take(unsafe {
                raw::live_mut(source.slot.left_mut_ptr())
            })),
            // SAFETY: the right alternative of `source` is live.
            Side::Right => self.replace_live::<PickRight>(mem::take(unsafe {
                raw::live_mut(source.slot.right_mut_ptr())
            })),
        }
    }

    /// Copy-assigns from another container.
    ///
    /// Used by [`Clone::clone_from`]. The copy is made before anything is
    /// destroyed, since a panicking `clone` must not leave `self` without a
    /// live value.
    pub(super) fn clone_assign(&mut self, source: &Self)
    where
        L: Clone,
        R: Clone,
    {
        #[cfg(feature = "tracing")]
        tracing::trace!(
            strategy = S::STRATEGY,
            from = %self.side,
            to = %source.side,
            "container copy assignment"
        );

        match source.side {
            Side::Left => {
                // SAFETY: the left alternative of `source` is live.
                let copy = unsafe { raw::live_ref(source.slot.left_ptr()) }.clone();
                self.replace_live::<PickLeft>(copy);
            }
            Side::Right => {
                // SAFETY: the right alternative of `source` is live.
                let copy = unsafe { raw::live_ref(source.slot.right_ptr()) }.clone();
                self.replace_live::<PickRight>(copy);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;
    use rstest::rstest;

    /// Counts its own drops in a shared cell.
    #[derive(Clone)]
    struct Tally<'a>(&'a Cell<usize>);

    impl Drop for Tally<'_> {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[rstest]
    fn test_switch_destroys_outgoing_value_once() {
        let drops = Cell::new(0);
        let mut either: Either<Tally<'_>, u32> = Either::new_left(Tally(&drops));
        either.assign_right(7);
        assert_eq!(drops.get(), 1);
        assert_eq!(*either.as_right(), 7);
        either.assign_right(8);
        assert_eq!(drops.get(), 1);
        drop(either);
        assert_eq!(drops.get(), 1);
    }

    #[rstest]
    fn test_same_side_assignment_drops_previous_value() {
        let drops = Cell::new(0);
        let mut either: Either<Tally<'_>, u32> = Either::new_left(Tally(&drops));
        either.assign_left(Tally(&drops));
        assert_eq!(drops.get(), 1);
        assert!(either.is_left());
        drop(either);
        assert_eq!(drops.get(), 2);
    }

    #[rstest]
    fn test_cloned_assignment_switches_and_reuses() {
        let mut either: Either<Vec<u8>, String> = Either::new_right("x".to_string());
        either.assign_left_cloned(&vec![1, 2, 3]);
        assert_eq!(either.as_left(), &[1, 2, 3]);
        either.assign_right_cloned(&"y".to_string());
        assert_eq!(either.as_right(), "y");
    }

    #[rstest]
    fn test_take_leaves_default_behind() {
        let mut source: Either<String, u32> = Either::new_right(9);
        let destination = source.take();
        assert_eq!(*destination.as_right(), 9);
        assert_eq!(*source.as_right(), 0);
        assert!(source.is_right());
    }

    #[rstest]
    fn test_take_from_switches_target() {
        let mut target: Either<String, u32> = Either::new_left("old".to_string());
        let mut source: Either<String, u32> = Either::new_right(5);
        target.take_from(&mut source);
        assert_eq!(*target.as_right(), 5);
        assert_eq!(*source.as_right(), 0);
    }

    #[rstest]
    fn test_clone_assign_switches_side() {
        let drops = Cell::new(0);
        let mut target: Either<Tally<'_>, u32> = Either::new_left(Tally(&drops));
        let source: Either<Tally<'_>, u32> = Either::new_right(3);
        target.clone_assign(&source);
        assert_eq!(drops.get(), 1);
        assert_eq!(*target.as_right(), 3);
    }

    #[rstest]
    fn test_clone_assign_rebuilds_same_side() {
        let drops = Cell::new(0);
        let mut target: Either<Tally<'_>, u32> = Either::new_left(Tally(&drops));
        let source: Either<Tally<'_>, u32> = Either::new_left(Tally(&drops));
        target.clone_assign(&source);
        assert_eq!(drops.get(), 1);
        assert!(target.is_left() && source.is_left());
        drop(target);
        drop(source);
        assert_eq!(drops.get(), 3);
    }

    #[rstest]
    fn test_panicking_destructor_still_installs_incoming_value() {
        struct Explosive;

        impl Drop for Explosive {
            fn drop(&mut self) {
                panic!("explosive dropped");
            }
        }

        let mut either: Either<Explosive, u32> = Either::new_left(Explosive);
        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            either.assign_right(11);
        }));
        assert!(outcome.is_err());
        assert_eq!(*either.as_right(), 11);
    }
}
