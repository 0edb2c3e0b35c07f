//! Errors raised while selecting a parameter set

use thiserror::Error;

/// Reasons a raw parameter selection is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    /// eta must be 2 or 4
    #[error("unsupported eta {0} (expected 2 or 4)")]
    UnsupportedEta(u32),

    /// gamma1 must be 2^17 or 2^19
    #[error("unsupported gamma1 {0} (expected 131072 or 524288)")]
    UnsupportedGamma1(u32),

    /// gamma2 must be (q-1)/88 or (q-1)/32
    #[error("unsupported gamma2 {0} (expected 95232 or 261888)")]
    UnsupportedGamma2(u32),

    /// tau must fit the 64 pre-drawn sign bits of the challenge sampler
    #[error("invalid tau {0} (expected 1..=64)")]
    InvalidTau(usize),

    /// Challenge seeds are 32, 48 or 64 bytes
    #[error("invalid challenge seed length {0} (expected 32, 48 or 64)")]
    InvalidChallengeSeedBytes(usize),

    /// No preset carries this name
    #[error("unknown parameter set '{0}'")]
    UnknownParameterSet(String),
}
