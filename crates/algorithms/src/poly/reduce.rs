//! Scalar modular reduction
//!
//! All helpers operate on `i32` coefficients modulo q = 8380417. Input bounds
//! are preconditions: outside them the arithmetic overflows, which debug
//! builds report as a panic.

use latticesig_common::ct;
use latticesig_params::{Q, QINV};

/// Montgomery reduction: `a * 2^-32 mod q` in `(-q, q)`
///
/// Requires `-2^31 * q <= a <= 2^31 * q`.
#[inline(always)]
pub const fn montgomery_reduce(a: i64) -> i32 {
    let t = (a as i32).wrapping_mul(QINV);
    ((a - t as i64 * Q as i64) >> 32) as i32
}

/// Reduce `a <= 2^31 - 2^22 - 1` to a representative in `[-6283009, 6283008]`
#[inline(always)]
pub const fn reduce32(a: i32) -> i32 {
    let t = (a + (1 << 22)) >> 23;
    a - t * Q
}

/// Add q to a negative coefficient, without branching on its sign
#[inline(always)]
pub fn caddq(a: i32) -> i32 {
    ct::add_if_negative(a, Q)
}

/// Standard representative in `[0, q)`
#[inline(always)]
pub fn freeze(a: i32) -> i32 {
    caddq(reduce32(a))
}
