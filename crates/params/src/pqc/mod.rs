//! Lattice signature parameters

pub mod dilithium;
pub mod variants;
