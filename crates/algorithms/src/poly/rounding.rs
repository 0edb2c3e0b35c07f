//! Rounding, decomposition and hints
//!
//! Scalar routines on standard representatives `a` in `[0, q)`. The
//! decomposition reproduces the standardized arithmetic exactly, including
//! the fold of the top bucket: when the naive high part would equal
//! (q-1)/alpha it becomes 0 and the low part becomes `a - q`.

use latticesig_params::{Gamma2, D, Q};

/// Split `a` into `(a1, a0)` with `a = a1 * 2^D + a0` and
/// `a0` in `(-2^(D-1), 2^(D-1)]`
#[inline]
pub fn power2round(a: i32) -> (i32, i32) {
    let a1 = (a + (1 << (D - 1)) - 1) >> D;
    let a0 = a - (a1 << D);
    (a1, a0)
}

/// Split `a` into `(a1, a0)` with `a = a1 * alpha + a0 (mod q)`,
/// `a1` in `[0, (q-1)/alpha)` and `a0` in `(-gamma2, gamma2]`, apart from
/// the folded top bucket where `a0` lies in `[-gamma2, 0)`
#[inline]
pub fn decompose(gamma2: Gamma2, a: i32) -> (i32, i32) {
    // ceil(a / 128), then a fixed-point multiply by 128/alpha
    let mut a1 = (a + 127) >> 7;
    match gamma2 {
        Gamma2::Div32 => {
            a1 = (a1 * 1025 + (1 << 21)) >> 22;
            a1 &= 15;
        }
        Gamma2::Div88 => {
            a1 = (a1 * 11275 + (1 << 23)) >> 24;
            a1 ^= ((43 - a1) >> 31) & a1;
        }
    }

    let mut a0 = a - a1 * gamma2.alpha();
    a0 -= (((Q - 1) / 2 - a0) >> 31) & Q;
    (a1, a0)
}

/// Whether adding the low part `a0` to the high part `a1` moves the value
/// into another bucket
#[inline]
pub fn make_hint(gamma2: Gamma2, a0: i32, a1: i32) -> bool {
    let g2 = gamma2.value();
    a0 > g2 || a0 < -g2 || (a0 == -g2 && a1 != 0)
}

/// High part of `a`, moved to the neighbouring bucket when `hint` is set
///
/// Buckets wrap around: stepping up from the top bucket lands on 0 and
/// stepping down from 0 lands on the top bucket.
#[inline]
pub fn use_hint(gamma2: Gamma2, a: i32, hint: bool) -> i32 {
    let (a1, a0) = decompose(gamma2, a);
    if !hint {
        return a1;
    }

    let top = gamma2.buckets() - 1;
    match gamma2 {
        Gamma2::Div32 => {
            if a0 > 0 {
                (a1 + 1) & top
            } else {
                (a1 - 1) & top
            }
        }
        Gamma2::Div88 => {
            if a0 > 0 {
                if a1 == top {
                    0
                } else {
                    a1 + 1
                }
            } else if a1 == 0 {
                top
            } else {
                a1 - 1
            }
        }
    }
}
