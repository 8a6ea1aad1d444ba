use core::mem::MaybeUninit;

use super::{Sealed, Slot};

/// Opaque byte storage for two alternatives.
///
/// The region is an uninitialized `MaybeUninit` whose size and alignment are
/// taken from [`Footprint`]; its bytes are never interpreted as a
/// `Footprint`. Each access casts the start of the region to exactly one
/// alternative type.
///
/// The footprint includes the oracle enum's own tag where the compiler
/// cannot hide it in a niche, so a `ByteSlot` may be a few bytes larger than
/// the equivalent [`UnionSlot`](super::UnionSlot).
#[repr(transparent)]
pub struct ByteSlot<L, R> {
    bytes: MaybeUninit<Footprint<L, R>>,
}

/// Layout oracle: an enum carrying either alternative is at least as large
/// as each payload and aligned to the stricter of the two.
#[allow(dead_code)]
enum Footprint<L, R> {
    Left(L),
    Right(R),
}

impl<L, R> Sealed for ByteSlot<L, R> {}

impl<L, R> Slot<L, R> for ByteSlot<L, R> {
    type Rebind<A, B> = ByteSlot<A, B>;

    const STRATEGY: &'static str = "bytes";

    #[inline]
    fn uninit() -> Self {
        Self {
            bytes: MaybeUninit::uninit(),
        }
    }

    #[inline]
    fn left_ptr(&self) -> *const L {
        self.bytes.as_ptr().cast()
    }

    #[inline]
    fn left_mut_ptr(&mut self) -> *mut L {
        self.bytes.as_mut_ptr().cast()
    }

    #[inline]
    fn right_ptr(&self) -> *const R {
        self.bytes.as_ptr().cast()
    }

    #[inline]
    fn right_mut_ptr(&mut self) -> *mut R {
        self.bytes.as_mut_ptr().cast()
    }
}

static_assertions::const_assert!(core::mem::size_of::<ByteSlot<u8, u64>>() >= 8);
static_assertions::assert_eq_align!(ByteSlot<u8, u64>, u64);
static_assertions::assert_eq_size!(ByteSlot<&'static u8, ()>, &'static u8);
