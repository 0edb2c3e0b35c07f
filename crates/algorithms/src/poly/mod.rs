//! Polynomial engine over Z_q[X]/(X^256 + 1)
//!
//! [`polynomial::Polynomial`] carries the ring operations; the scalar
//! routines they are made of live in [`reduce`] and [`rounding`], the
//! transform in [`ntt`], and the byte-facing parts in [`sampling`] and
//! [`serialize`].

pub mod ntt;
pub mod polynomial;
pub mod reduce;
pub mod rounding;
pub mod sampling;
pub mod serialize;

/// Prelude for easy importing of common polynomial types and traits.
pub mod prelude {
    pub use super::ntt::{CooleyTukeyNtt, InverseNttOperator, NttOperator};
    pub use super::polynomial::{NormCheck, Polynomial};
    pub use super::reduce::{caddq, freeze, montgomery_reduce, reduce32};
    pub use super::rounding::{decompose, make_hint, power2round, use_hint};
    pub use super::sampling::{sample_challenge, sample_eta, sample_gamma1, sample_uniform};
    pub use super::serialize::Field;
}
