//! Constant values and parameter sets for the latticesig ring layer
//!
//! Everything in this crate is plain data: the ring constants shared by every
//! variant of the scheme, the three closed strategy variants (`Eta`, `Gamma1`,
//! `Gamma2`) and the [`ParameterSet`] record that bundles them. Raw numbers are
//! validated once, when a parameter set is built; the arithmetic crates then
//! dispatch on the variants without re-checking.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod error;
pub mod pqc;

pub use error::ParamError;
pub use pqc::dilithium::{
    Dimensions, ParameterSet, RawParameterSet, CRH_BYTES, D, MONT, N, Q, QINV, SEED_BYTES,
    T0_PACKED_BYTES, T1_PACKED_BYTES,
};
pub use pqc::variants::{Eta, Gamma1, Gamma2};
