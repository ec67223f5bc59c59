//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (variable names, limits, retry strategy)
//! - Logging and HTTP client option types

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{ClientConfig, LogFormat, LogLevel};
