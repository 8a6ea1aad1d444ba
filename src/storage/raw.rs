//! Unsafe, centralized operations on alternative slots.
//!
//! Every read, write, in-place drop and reference conversion that the
//! lifecycle manager performs on a slot goes through one of these helpers,
//! so the unsafe surface of the crate can be audited in one place.
//!
//! ## Core invariant
//! For every `Either` in this crate, the slot holds a live value of the
//! alternative named by its `Side`:
//! - from the moment a constructor completes,
//! - after any mutating operation completes,
//!
//! and it stays live until `drop` begins for the owning container. Between
//! the destroy and construct halves of an alternative switch the slot holds
//! no live value; nothing observes it in that window.

use core::ptr;

/// Writes `value` into an uninhabited slot position.
///
/// # Safety
/// - `slot` must be valid for writes and suitably aligned for `T`.
/// - Any value previously at `slot` must already have been dropped or moved
///   out; otherwise it leaks.
#[inline(always)]
pub(crate) unsafe fn construct<T>(slot: *mut T, value: T) {
    // SAFETY: caller guarantees validity, alignment and that nothing live is overwritten.
    unsafe { ptr::write(slot, value) }
}

/// Drops the value at `slot` in place, leaving the position uninhabited.
///
/// # Safety
/// - `slot` must hold a live `T`.
/// - Must not be called twice for the same value.
#[inline(always)]
pub(crate) unsafe fn destroy<T>(slot: *mut T) {
    // SAFETY: caller guarantees the value is live and dropped only once.
    unsafe { ptr::drop_in_place(slot) }
}

/// Moves the value out of `slot` bitwise, leaving the position uninhabited.
///
/// # Safety
/// - `slot` must hold a live `T`.
/// - The slot must not be read or dropped again until reconstructed.
#[inline(always)]
pub(crate) unsafe fn take_out<T>(slot: *const T) -> T {
    // SAFETY: caller guarantees liveness and that ownership moves to the returned value.
    unsafe { ptr::read(slot) }
}

/// Interprets a live slot as `&T`.
///
/// # Safety
/// - `slot` must hold a live `T` for all of `'a`.
/// - No `&mut T` to the same position may exist during `'a`.
#[inline(always)]
pub(crate) unsafe fn live_ref<'a, T>(slot: *const T) -> &'a T {
    // SAFETY: caller guarantees liveness and aliasing.
    unsafe { &*slot }
}

/// Interprets a live slot as `&mut T`.
///
/// # Safety
/// - `slot` must hold a live `T` for all of `'a`.
/// - The returned reference must be exclusive for `'a`.
#[inline(always)]
pub(crate) unsafe fn live_mut<'a, T>(slot: *mut T) -> &'a mut T {
    // SAFETY: caller guarantees liveness and exclusivity.
    unsafe { &mut *slot }
}
