//! Raw storage strategies for the two alternatives of an [`Either`].
//!
//! A slot is a region of memory large enough and aligned enough for either
//! alternative. It never constructs or destroys anything on its own: which
//! alternative lives in it, and when, is decided entirely by the lifecycle
//! manager of the owning container.
//!
//! Two strategies are provided:
//!
//! - [`UnionSlot`]: a `#[repr(C)]` union of the two alternatives, so the
//!   compiler computes the overlapping footprint. This is the default.
//! - [`ByteSlot`]: an opaque uninitialized region whose footprint is borrowed
//!   from a layout oracle, accessed only through pointer casts.
//!
//! Both satisfy `size >= max(size_of::<L>(), size_of::<R>())` and
//! `align >= max(align_of::<L>(), align_of::<R>())`.
//!
//! [`Either`]: crate::Either

mod byte_slot;
pub(crate) mod raw;
mod union_slot;

pub use byte_slot::ByteSlot;
pub use union_slot::UnionSlot;

mod sealed {
    pub trait Sealed {}
}

pub(crate) use sealed::Sealed;

/// Storage contract for one of two alternatives.
///
/// Implementations guarantee:
/// - the region is at least as large as the larger alternative and at least
///   as aligned as the more aligned one;
/// - both pointer views start at the same address;
/// - creating, moving and dropping the slot itself never runs `L`'s or `R`'s
///   constructors or destructors.
///
/// Obtaining a pointer never reads the slot, so every method here is safe;
/// dereferencing the pointers is where the lifecycle manager takes on the
/// obligations documented in `storage::raw`.
///
/// This trait is sealed.
pub trait Slot<L, R>: Sealed + Sized {
    /// The same strategy instantiated for other alternative types.
    type Rebind<A, B>: Slot<A, B>;

    /// Short name of the strategy, used in diagnostics.
    const STRATEGY: &'static str;

    /// Returns storage holding no live value.
    fn uninit() -> Self;

    /// Pointer to the region viewed as the left alternative.
    fn left_ptr(&self) -> *const L;

    /// Mutable pointer to the region viewed as the left alternative.
    fn left_mut_ptr(&mut self) -> *mut L;

    /// Pointer to the region viewed as the right alternative.
    fn right_ptr(&self) -> *const R;

    /// Mutable pointer to the region viewed as the right alternative.
    fn right_mut_ptr(&mut self) -> *mut R;
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::{align_of, size_of};
    use rstest::rstest;

    fn footprint_holds<L, R, S: Slot<L, R>>() -> bool {
        size_of::<S>() >= size_of::<L>().max(size_of::<R>())
            && align_of::<S>() >= align_of::<L>().max(align_of::<R>())
    }

    #[rstest]
    fn test_union_slot_footprint() {
        assert!(footprint_holds::<u8, u64, UnionSlot<u8, u64>>());
        assert!(footprint_holds::<[u8; 3], u16, UnionSlot<[u8; 3], u16>>());
        assert!(footprint_holds::<String, (), UnionSlot<String, ()>>());
    }

    #[rstest]
    fn test_byte_slot_footprint() {
        assert!(footprint_holds::<u8, u64, ByteSlot<u8, u64>>());
        assert!(footprint_holds::<[u8; 3], u16, ByteSlot<[u8; 3], u16>>());
        assert!(footprint_holds::<String, (), ByteSlot<String, ()>>());
    }

    #[rstest]
    fn test_views_share_one_address() {
        let mut union_slot = UnionSlot::<u32, [u8; 7]>::uninit();
        assert_eq!(
            union_slot.left_ptr().cast::<u8>(),
            union_slot.right_ptr().cast::<u8>()
        );
        assert_eq!(
            union_slot.left_mut_ptr().cast::<u8>(),
            union_slot.right_mut_ptr().cast::<u8>()
        );

        let mut byte_slot = ByteSlot::<u32, [u8; 7]>::uninit();
        assert_eq!(
            byte_slot.left_ptr().cast::<u8>(),
            byte_slot.right_ptr().cast::<u8>()
        );
        assert_eq!(
            byte_slot.left_mut_ptr().cast::<u8>(),
            byte_slot.right_mut_ptr().cast::<u8>()
        );
    }

    #[rstest]
    fn test_pointers_are_aligned() {
        let slot = UnionSlot::<u8, u64>::uninit();
        assert!(slot.right_ptr().is_aligned());
        let slot = ByteSlot::<u8, u64>::uninit();
        assert!(slot.right_ptr().is_aligned());
    }
}
