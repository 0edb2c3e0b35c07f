//! Validation helpers for checked entry points

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(name, reason));
    }
    Ok(())
}

/// Validate an exact length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        debug_event!(context, expected, actual, "rejected buffer length");
        return Err(Error::Length {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}
