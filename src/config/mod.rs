//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, normalized record types)
//! - CLI option types and parsing
//! - The expected-records file loader

mod constants;
mod expected;
mod types;

// Re-export all constants
pub use constants::*;
pub use expected::{load_expected, ExpectedConfig, ExpectedRecord, ExpectedRecordSet};
pub use types::{Cli, Config, LogFormat, LogLevel};
