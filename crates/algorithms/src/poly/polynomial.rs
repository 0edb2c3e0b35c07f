//! Polynomials in Z_q[X]/(X^256 + 1)
//!
//! Coefficients are plain `i32` values. Which representative they hold is a
//! contract of each operation:
//!
//! - standard: `[0, q)`
//! - centered: around zero, e.g. after [`Polynomial::reduce`]
//! - NTT domain: bit-reversed evaluation form, possibly Montgomery scaled
//!
//! Addition, subtraction and shifting never reduce; the caller keeps
//! magnitudes within `i32`.

use core::ops::{Add, Sub};

use latticesig_common::ct;
use latticesig_params::{ParameterSet, D, N, Q};
use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroize;

use super::ntt::{CooleyTukeyNtt, InverseNttOperator, NttOperator};
use super::reduce::{caddq, freeze, montgomery_reduce, reduce32};
use super::rounding;
use crate::error::{validate, Result};

/// Outcome of an infinity-norm check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormCheck {
    /// Every centered coefficient is below the bound
    Within,
    /// Some coefficient reaches the bound, or the bound itself is too large
    Exceeds,
}

impl NormCheck {
    /// True for [`NormCheck::Exceeds`]
    pub fn exceeds(self) -> bool {
        self == NormCheck::Exceeds
    }
}

/// Largest bound [`Polynomial::check_norm`] evaluates; anything above is
/// rejected outright.
pub const NORM_CHECK_LIMIT: i32 = (Q - 1) / 8;

/// A polynomial with 256 `i32` coefficients
#[derive(Debug, Clone, PartialEq, Eq, Zeroize)]
pub struct Polynomial {
    /// Coefficients, lowest degree first
    pub coeffs: [i32; N],
}

impl Default for Polynomial {
    fn default() -> Self {
        Self::zero()
    }
}

impl Polynomial {
    /// Creates a new polynomial with all coefficients set to zero
    pub const fn zero() -> Self {
        Self { coeffs: [0; N] }
    }

    /// Creates a polynomial from a slice of exactly 256 coefficients
    pub fn from_coeffs(coeffs: &[i32]) -> Result<Self> {
        validate::length("polynomial coefficients", coeffs.len(), N)?;
        let mut poly = Self::zero();
        poly.coeffs.copy_from_slice(coeffs);
        Ok(poly)
    }

    /// Returns a slice view of the coefficients
    pub fn as_coeffs_slice(&self) -> &[i32] {
        &self.coeffs
    }

    /// Returns a mutable slice view of the coefficients
    pub fn as_mut_coeffs_slice(&mut self) -> &mut [i32] {
        &mut self.coeffs
    }

    /// Reduce every coefficient to `[-6283009, 6283008]`
    ///
    /// Coefficients must be at most `2^31 - 2^22 - 1`.
    pub fn reduce(&mut self) {
        for c in self.coeffs.iter_mut() {
            *c = reduce32(*c);
        }
    }

    /// Add q to every negative coefficient
    ///
    /// After [`Self::reduce`] this yields standard representatives. The sign
    /// is turned into a mask, never into a branch.
    pub fn caddq(&mut self) {
        for c in self.coeffs.iter_mut() {
            *c = caddq(*c);
        }
    }

    /// Reduce and normalize to standard representatives in `[0, q)`
    pub fn freeze(&mut self) {
        for c in self.coeffs.iter_mut() {
            *c = freeze(*c);
        }
    }

    /// Coefficient-wise addition without reduction
    pub fn add(&self, other: &Self) -> Self {
        let mut result = Self::zero();
        for ((r, &a), &b) in result.coeffs.iter_mut().zip(&self.coeffs).zip(&other.coeffs) {
            *r = a + b;
        }
        result
    }

    /// Coefficient-wise subtraction without reduction
    pub fn sub(&self, other: &Self) -> Self {
        let mut result = Self::zero();
        for ((r, &a), &b) in result.coeffs.iter_mut().zip(&self.coeffs).zip(&other.coeffs) {
            *r = a - b;
        }
        result
    }

    /// Multiply every coefficient by 2^D without reduction
    ///
    /// Coefficients must be below 2^(31-D) in magnitude.
    pub fn shiftl(&mut self) {
        for c in self.coeffs.iter_mut() {
            *c <<= D;
        }
    }

    /// Forward NTT in place; output is in bit-reversed order
    pub fn ntt(&mut self) {
        CooleyTukeyNtt::ntt(&mut self.coeffs);
    }

    /// Inverse NTT in place, multiplying by the Montgomery factor 2^32
    pub fn invntt_tomont(&mut self) {
        CooleyTukeyNtt::invntt_tomont(&mut self.coeffs);
    }

    /// Pointwise product of two NTT-domain polynomials, divided by 2^32
    pub fn pointwise_montgomery(&self, other: &Self) -> Self {
        let mut result = Self::zero();
        for ((r, &a), &b) in result.coeffs.iter_mut().zip(&self.coeffs).zip(&other.coeffs) {
            *r = montgomery_reduce(a as i64 * b as i64);
        }
        result
    }

    /// Infinity-norm check against `bound` on reduced coefficients
    ///
    /// The loop may stop at the first offending coefficient; which one that is
    /// may leak, its sign may not, so the absolute value is taken by masking.
    /// Bounds above (q-1)/8 always report [`NormCheck::Exceeds`].
    pub fn check_norm(&self, bound: i32) -> NormCheck {
        if bound > NORM_CHECK_LIMIT {
            return NormCheck::Exceeds;
        }
        for &c in self.coeffs.iter() {
            if ct::abs(c) >= bound {
                return NormCheck::Exceeds;
            }
        }
        NormCheck::Within
    }

    /// Split standard coefficients into `a1 * 2^D + a0` with
    /// `a0` in `(-2^(D-1), 2^(D-1)]`
    pub fn power2round(&self, a1: &mut Self, a0: &mut Self) {
        for ((&a, h), l) in self.coeffs.iter().zip(a1.coeffs.iter_mut()).zip(a0.coeffs.iter_mut()) {
            (*h, *l) = rounding::power2round(a);
        }
    }

    /// Split standard coefficients into high and low parts for `params.gamma2`
    pub fn decompose(&self, params: &ParameterSet, a1: &mut Self, a0: &mut Self) {
        let gamma2 = params.gamma2;
        for ((&a, h), l) in self.coeffs.iter().zip(a1.coeffs.iter_mut()).zip(a0.coeffs.iter_mut()) {
            (*h, *l) = rounding::decompose(gamma2, a);
        }
    }

    /// Write the hint polynomial for low parts `a0` and high parts `a1` into
    /// `self`; returns the number of set hints
    pub fn make_hint(&mut self, params: &ParameterSet, a0: &Self, a1: &Self) -> usize {
        let gamma2 = params.gamma2;
        let mut count = 0;
        for ((h, &low), &high) in self.coeffs.iter_mut().zip(&a0.coeffs).zip(&a1.coeffs) {
            let hint = rounding::make_hint(gamma2, low, high);
            *h = hint as i32;
            count += hint as usize;
        }
        count
    }

    /// Correct the high parts of `self` with `hint` into `out`
    pub fn use_hint(&self, params: &ParameterSet, hint: &Self, out: &mut Self) {
        let gamma2 = params.gamma2;
        for ((o, &a), &h) in out.coeffs.iter_mut().zip(&self.coeffs).zip(&hint.coeffs) {
            *o = rounding::use_hint(gamma2, a, h != 0);
        }
    }
}

impl ConstantTimeEq for Polynomial {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.coeffs[..].ct_eq(&other.coeffs[..])
    }
}

impl Add for &Polynomial {
    type Output = Polynomial;

    fn add(self, other: Self) -> Self::Output {
        Polynomial::add(self, other)
    }
}

impl Sub for &Polynomial {
    type Output = Polynomial;

    fn sub(self, other: Self) -> Self::Output {
        Polynomial::sub(self, other)
    }
}
