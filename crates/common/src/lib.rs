//! Common implementations and shared functionality for the latticesig crates
//!
//! Secret containers that wipe themselves, a non-elidable wipe, compiler
//! barriers and the sign-mask helpers the ring arithmetic is built on.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod ct;
pub mod security;

pub use security::{secure_zero, EphemeralSecret, SecretBuffer};

// Re-export memory barrier utilities
pub use security::memory::barrier;
