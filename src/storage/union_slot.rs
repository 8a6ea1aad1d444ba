use core::mem::ManuallyDrop;
use core::ptr;

use super::{Sealed, Slot};

/// Native overlapping storage for two alternatives.
///
/// The union's fields are wrapped in `ManuallyDrop`, so the compiler neither
/// initializes nor drops them; which field is live is tracked outside the
/// slot. `#[repr(C)]` places every field at offset zero.
#[repr(C)]
pub union UnionSlot<L, R> {
    left: ManuallyDrop<L>,
    right: ManuallyDrop<R>,
    vacant: (),
}

impl<L, R> Sealed for UnionSlot<L, R> {}

impl<L, R> Slot<L, R> for UnionSlot<L, R> {
    type Rebind<A, B> = UnionSlot<A, B>;

    const STRATEGY: &'static str = "union";

    #[inline]
    fn uninit() -> Self {
        Self { vacant: () }
    }

    // `ManuallyDrop<T>` is `repr(transparent)` and every field of a
    // `repr(C)` union starts at offset zero, so a cast of the union pointer
    // addresses the selected field.

    #[inline]
    fn left_ptr(&self) -> *const L {
        ptr::from_ref(self).cast::<ManuallyDrop<L>>().cast()
    }

    #[inline]
    fn left_mut_ptr(&mut self) -> *mut L {
        ptr::from_mut(self).cast::<ManuallyDrop<L>>().cast()
    }

    #[inline]
    fn right_ptr(&self) -> *const R {
        ptr::from_ref(self).cast::<ManuallyDrop<R>>().cast()
    }

    #[inline]
    fn right_mut_ptr(&mut self) -> *mut R {
        ptr::from_mut(self).cast::<ManuallyDrop<R>>().cast()
    }
}

static_assertions::assert_eq_size!(UnionSlot<u8, u64>, u64);
static_assertions::assert_eq_align!(UnionSlot<u8, u64>, u64);
static_assertions::assert_eq_size!(UnionSlot<[u8; 12], u32>, [u32; 3]);
