//! Error handling for the ring layer
//!
//! The arithmetic itself is total over its documented input domain; errors
//! only arise at the checked boundaries where raw buffers or raw parameter
//! values enter from the outside.

use latticesig_params::ParamError;
use thiserror::Error;

/// The error type for checked ring-layer entry points
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Parameter validation error
    #[error("invalid {name}: {reason}")]
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: &'static str,
    },

    /// Length validation error
    #[error("{context}: expected length {expected}, got {actual}")]
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length
        expected: usize,
        /// Actual length
        actual: usize,
    },

    /// Parameter-set selection error
    #[error(transparent)]
    Params(#[from] ParamError),
}

impl Error {
    /// Create a parameter error
    pub const fn param(name: &'static str, reason: &'static str) -> Self {
        Error::Parameter { name, reason }
    }
}

/// Result type for checked ring-layer entry points
pub type Result<T> = core::result::Result<T, Error>;

pub mod validate;
