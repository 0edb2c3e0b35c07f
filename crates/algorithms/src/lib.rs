//! Polynomial ring layer for module-lattice signatures
//!
//! This crate provides the arithmetic the ML-DSA / Dilithium family is built
//! on: the ring Z_q[X]/(X^256 + 1) with q = 8380417, its Number Theoretic
//! Transform, the rounding and hint machinery, the deterministic samplers
//! keyed from SHAKE streams and the bit-exact coefficient codecs.
//!
//! Every variant-sensitive constant comes from a
//! [`ParameterSet`](latticesig_params::ParameterSet) passed by reference; no
//! operation keeps global state, so distinct polynomials may be processed on
//! different threads freely.
//!
//! # Security Features
//!
//! - Coefficient arithmetic branches on public data only
//! - Seed-derived sampler buffers and stream states wipe themselves on drop
//! - Secret-dependent sign handling goes through mask helpers

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Logging hooks; they expand to nothing unless the `trace` feature is on.
#[cfg(feature = "trace")]
macro_rules! trace_event {
    ($($arg:tt)*) => { tracing::trace!($($arg)*) };
}

#[cfg(not(feature = "trace"))]
macro_rules! trace_event {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "trace")]
macro_rules! debug_event {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "trace"))]
macro_rules! debug_event {
    ($($arg:tt)*) => {};
}

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Ring arithmetic, samplers and codecs
pub mod poly;
pub use poly::polynomial::{NormCheck, Polynomial};

// SHAKE streams
pub mod xof;
pub use xof::{ExtendableOutputFunction, ShakeXof128, ShakeXof256, XofReader};

pub use latticesig_params as params;
