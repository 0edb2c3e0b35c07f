//! # latticesig
//!
//! The polynomial ring layer of module-lattice signatures (ML-DSA /
//! Dilithium): arithmetic in Z_q[X]/(X^256 + 1) with q = 8380417, the
//! rounding and hint machinery, deterministic SHAKE-keyed samplers and the
//! bit-exact coefficient codecs.
//!
//! ## Features
//!
//! - `serde`: serialize and deserialize [`params::ParameterSet`]s
//! - `trace`: structured `tracing` events on sampler refills and rejected
//!   inputs
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`latticesig-params`]: Ring constants and parameter sets
//! - [`latticesig-common`]: Secret containers and mask helpers
//! - [`latticesig-algorithms`]: Ring arithmetic, samplers and codecs
//!
//! ## Example
//!
//! ```
//! use latticesig::prelude::*;
//!
//! let params = ParameterSet::ML_DSA_65;
//! let mut c = Polynomial::zero();
//! sample_challenge(&mut c, &params, &[0u8; 48]);
//! assert_eq!(c.coeffs.iter().filter(|&&x| x != 0).count(), params.tau);
//! ```

#![forbid(unsafe_code)]

pub use latticesig_algorithms as algorithms;
pub use latticesig_common as common;
pub use latticesig_params as params;

// Re-export the wiping and constant-time crates the public types implement
pub use subtle;
pub use zeroize;

pub use latticesig_algorithms::{Error, Result};

/// Common imports for working with the ring layer
pub mod prelude {
    pub use latticesig_algorithms::poly::prelude::*;
    pub use latticesig_algorithms::poly::serialize::{
        pack_eta, pack_t0, pack_t1, pack_w1, pack_z, try_unpack_eta, try_unpack_t0,
        try_unpack_t1, try_unpack_w1, try_unpack_z, unpack_eta, unpack_t0, unpack_t1, unpack_w1,
        unpack_z,
    };
    pub use latticesig_algorithms::Error;
    pub use latticesig_params::{Eta, Gamma1, Gamma2, ParameterSet, N, Q};
}
