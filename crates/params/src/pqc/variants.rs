//! Closed strategy variants for the variant-sensitive parameters
//!
//! Each variant is chosen once, when a [`ParameterSet`](super::dilithium::ParameterSet)
//! is built, and carries the derived sizes the packers and samplers need.

use super::dilithium::Q;
use crate::error::ParamError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Coefficient bound of the narrow secret polynomials
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Eta {
    /// Coefficients in [-2, 2], packed at 3 bits
    Two,
    /// Coefficients in [-4, 4], packed at 4 bits
    Four,
}

impl Eta {
    /// Map a raw bound onto its variant
    pub fn from_value(value: u32) -> Result<Self, ParamError> {
        match value {
            2 => Ok(Self::Two),
            4 => Ok(Self::Four),
            other => Err(ParamError::UnsupportedEta(other)),
        }
    }

    /// The bound itself
    pub const fn value(self) -> i32 {
        match self {
            Self::Two => 2,
            Self::Four => 4,
        }
    }

    /// Bits per packed coefficient
    pub const fn bits(self) -> usize {
        match self {
            Self::Two => 3,
            Self::Four => 4,
        }
    }

    /// Size of one packed polynomial
    pub const fn packed_bytes(self) -> usize {
        match self {
            Self::Two => 96,
            Self::Four => 128,
        }
    }
}

/// Range of the masking polynomials, `[-(gamma1 - 1), gamma1]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Gamma1 {
    /// gamma1 = 2^17
    Pow17,
    /// gamma1 = 2^19
    Pow19,
}

impl Gamma1 {
    /// Map a raw range onto its variant
    pub fn from_value(value: u32) -> Result<Self, ParamError> {
        match value {
            v if v == 1 << 17 => Ok(Self::Pow17),
            v if v == 1 << 19 => Ok(Self::Pow19),
            other => Err(ParamError::UnsupportedGamma1(other)),
        }
    }

    /// gamma1 as a coefficient value
    pub const fn value(self) -> i32 {
        match self {
            Self::Pow17 => 1 << 17,
            Self::Pow19 => 1 << 19,
        }
    }

    /// Bits per packed z coefficient
    pub const fn bits(self) -> usize {
        match self {
            Self::Pow17 => 18,
            Self::Pow19 => 20,
        }
    }

    /// Size of one packed z polynomial
    pub const fn packed_bytes(self) -> usize {
        match self {
            Self::Pow17 => 576,
            Self::Pow19 => 640,
        }
    }
}

/// Low-order rounding range used by decomposition and hints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Gamma2 {
    /// gamma2 = (q-1)/88, 44 high-part buckets
    Div88,
    /// gamma2 = (q-1)/32, 16 high-part buckets
    Div32,
}

impl Gamma2 {
    /// Map a raw rounding range onto its variant
    pub fn from_value(value: u32) -> Result<Self, ParamError> {
        match value {
            v if v == (Q as u32 - 1) / 88 => Ok(Self::Div88),
            v if v == (Q as u32 - 1) / 32 => Ok(Self::Div32),
            other => Err(ParamError::UnsupportedGamma2(other)),
        }
    }

    /// gamma2 as a coefficient value
    pub const fn value(self) -> i32 {
        match self {
            Self::Div88 => (Q - 1) / 88,
            Self::Div32 => (Q - 1) / 32,
        }
    }

    /// alpha = 2 * gamma2, the width of one high-part bucket
    pub const fn alpha(self) -> i32 {
        2 * self.value()
    }

    /// Number of high-part buckets, (q-1)/alpha
    pub const fn buckets(self) -> i32 {
        match self {
            Self::Div88 => 44,
            Self::Div32 => 16,
        }
    }

    /// Bits per packed w1 coefficient
    pub const fn w1_bits(self) -> usize {
        match self {
            Self::Div88 => 6,
            Self::Div32 => 4,
        }
    }

    /// Size of one packed w1 polynomial
    pub const fn w1_packed_bytes(self) -> usize {
        match self {
            Self::Div88 => 192,
            Self::Div32 => 128,
        }
    }
}
