//! Branch-free integer helpers
//!
//! The sign of a coefficient must not steer control flow. These helpers turn
//! it into an all-ones/all-zeros mask and route the mask through
//! [`black_box`] so the optimizer cannot fold the masking back into a branch.

use core::hint::black_box;

/// All ones if `x` is negative, zero otherwise
#[inline(always)]
pub fn sign_mask(x: i32) -> i32 {
    black_box(x >> 31)
}

/// `x + addend` if `x` is negative, `x` otherwise
#[inline(always)]
pub fn add_if_negative(x: i32, addend: i32) -> i32 {
    x + (sign_mask(x) & addend)
}

/// Absolute value without a sign-dependent branch
///
/// `x - 2x` when negative, `x` otherwise.
#[inline(always)]
pub fn abs(x: i32) -> i32 {
    x - (sign_mask(x) & x.wrapping_mul(2))
}
