//! Security primitives and memory safety utilities
//!
//! Foundational types for handling seed-derived material inside the ring
//! layer: every sampler buffer and stream context ends up in one of these.

pub mod memory;
pub mod secret;

pub use memory::secure_zero;
pub use secret::{EphemeralSecret, SecretBuffer};
