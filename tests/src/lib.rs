//! Statistical and timing test harness for the latticesig crates
//!
//! The suites here are shared by the integration tests under `tests/`.

pub mod suites;
