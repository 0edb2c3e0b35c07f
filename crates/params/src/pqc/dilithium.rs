//! Ring constants and parameter sets for the ML-DSA / Dilithium family

use core::fmt;
use core::str::FromStr;

use super::variants::{Eta, Gamma1, Gamma2};
use crate::error::ParamError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Polynomial degree
pub const N: usize = 256;

/// Prime modulus q = 2^23 - 2^13 + 1
pub const Q: i32 = 8380417;

/// Bits dropped from t by power-of-two rounding
pub const D: u32 = 13;

/// q^(-1) mod 2^32
pub const QINV: i32 = 58728449;

/// 2^32 mod q, centered
pub const MONT: i32 = -4186625;

/// Length of the public matrix seed and of the secret sampling seed
pub const SEED_BYTES: usize = 32;

/// Length of the collision-resistant hash feeding the masking sampler
pub const CRH_BYTES: usize = 64;

/// Size of one packed t1 polynomial (10 bits per coefficient)
pub const T1_PACKED_BYTES: usize = 320;

/// Size of one packed t0 polynomial (13 bits per coefficient)
pub const T0_PACKED_BYTES: usize = 416;

/// Matrix dimensions and signature bounds of a named scheme variant
///
/// The ring layer never reads these; they ride along with the presets so an
/// orchestrator has one source of truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dimensions {
    /// Rows of the public matrix
    pub k: usize,
    /// Columns of the public matrix
    pub l: usize,
    /// Rejection bound, tau * eta
    pub beta: u32,
    /// Maximum number of hint bits in a signature
    pub omega: usize,
}

/// Immutable record of the variant-sensitive constants
///
/// Built once per scheme variant and passed by reference into every
/// operation that depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(into = "RawParameterSet"))]
pub struct ParameterSet {
    /// Preset name, or `"custom"`
    pub name: &'static str,
    /// Narrow secret bound
    pub eta: Eta,
    /// Masking range
    pub gamma1: Gamma1,
    /// Decomposition range
    pub gamma2: Gamma2,
    /// Number of nonzero challenge coefficients
    pub tau: usize,
    /// Length of the seed the challenge sampler absorbs
    pub challenge_seed_bytes: usize,
    /// Orchestration constants, present on the named presets
    pub dimensions: Option<Dimensions>,
}

impl ParameterSet {
    /// ML-DSA-44 (Dilithium2)
    pub const ML_DSA_44: Self = Self {
        name: "ML-DSA-44",
        eta: Eta::Two,
        gamma1: Gamma1::Pow17,
        gamma2: Gamma2::Div88,
        tau: 39,
        challenge_seed_bytes: 32,
        dimensions: Some(Dimensions { k: 4, l: 4, beta: 78, omega: 80 }),
    };

    /// ML-DSA-65 (Dilithium3)
    pub const ML_DSA_65: Self = Self {
        name: "ML-DSA-65",
        eta: Eta::Four,
        gamma1: Gamma1::Pow19,
        gamma2: Gamma2::Div32,
        tau: 49,
        challenge_seed_bytes: 48,
        dimensions: Some(Dimensions { k: 6, l: 5, beta: 196, omega: 55 }),
    };

    /// ML-DSA-87 (Dilithium5)
    pub const ML_DSA_87: Self = Self {
        name: "ML-DSA-87",
        eta: Eta::Two,
        gamma1: Gamma1::Pow19,
        gamma2: Gamma2::Div32,
        tau: 60,
        challenge_seed_bytes: 64,
        dimensions: Some(Dimensions { k: 8, l: 7, beta: 120, omega: 75 }),
    };

    /// Every named preset
    pub const PRESETS: [Self; 3] = [Self::ML_DSA_44, Self::ML_DSA_65, Self::ML_DSA_87];

    /// Validate raw values and map them onto their variants
    ///
    /// A combination identical to a named preset returns that preset,
    /// dimensions included.
    pub fn try_new(
        eta: u32,
        gamma1: u32,
        gamma2: u32,
        tau: usize,
        challenge_seed_bytes: usize,
    ) -> Result<Self, ParamError> {
        let eta = Eta::from_value(eta)?;
        let gamma1 = Gamma1::from_value(gamma1)?;
        let gamma2 = Gamma2::from_value(gamma2)?;
        if !(1..=64).contains(&tau) {
            return Err(ParamError::InvalidTau(tau));
        }
        if !matches!(challenge_seed_bytes, 32 | 48 | 64) {
            return Err(ParamError::InvalidChallengeSeedBytes(challenge_seed_bytes));
        }

        let custom = Self {
            name: "custom",
            eta,
            gamma1,
            gamma2,
            tau,
            challenge_seed_bytes,
            dimensions: None,
        };
        Ok(Self::PRESETS
            .into_iter()
            .find(|preset| preset.same_ring_constants(&custom))
            .unwrap_or(custom))
    }

    /// Look a preset up by name, ignoring ASCII case
    pub fn by_name(name: &str) -> Result<Self, ParamError> {
        Self::PRESETS
            .into_iter()
            .find(|preset| preset.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| ParamError::UnknownParameterSet(name.to_string()))
    }

    /// Largest infinity norm a challenge-times-secret product can reach
    pub const fn beta(&self) -> u32 {
        self.tau as u32 * self.eta.value() as u32
    }

    fn same_ring_constants(&self, other: &Self) -> bool {
        self.eta == other.eta
            && self.gamma1 == other.gamma1
            && self.gamma2 == other.gamma2
            && self.tau == other.tau
            && self.challenge_seed_bytes == other.challenge_seed_bytes
    }
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self::ML_DSA_65
    }
}

impl FromStr for ParameterSet {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::by_name(s)
    }
}

impl fmt::Display for ParameterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Plain-number form of a [`ParameterSet`], as read from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RawParameterSet {
    /// Narrow secret bound (2 or 4)
    pub eta: u32,
    /// Masking range (2^17 or 2^19)
    pub gamma1: u32,
    /// Decomposition range ((q-1)/88 or (q-1)/32)
    pub gamma2: u32,
    /// Number of nonzero challenge coefficients
    pub tau: usize,
    /// Challenge seed length in bytes
    pub challenge_seed_bytes: usize,
}

impl From<ParameterSet> for RawParameterSet {
    fn from(params: ParameterSet) -> Self {
        Self {
            eta: params.eta.value() as u32,
            gamma1: params.gamma1.value() as u32,
            gamma2: params.gamma2.value() as u32,
            tau: params.tau,
            challenge_seed_bytes: params.challenge_seed_bytes,
        }
    }
}

impl TryFrom<RawParameterSet> for ParameterSet {
    type Error = ParamError;

    fn try_from(raw: RawParameterSet) -> Result<Self, Self::Error> {
        Self::try_new(raw.eta, raw.gamma1, raw.gamma2, raw.tau, raw.challenge_seed_bytes)
    }
}

// `name` borrows a static string, so deserialization goes through the raw
// form by hand to stay `DeserializeOwned`
#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for ParameterSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawParameterSet::deserialize(deserializer)?;
        Self::try_from(raw).map_err(serde::de::Error::custom)
    }
}
