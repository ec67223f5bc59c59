//! Error handling and retry configuration.
//!
//! This module provides:
//! - Error type definitions for credential loading, initialization and SMS sending
//! - Error categorization for SMS failures
//! - Retry strategy configuration
//!
//! Credential errors are collected per key so every problem surfaces at once.
//! SMS errors are categorized by HTTP status first, then by transport flags.

mod categorization;
mod types;

// Re-export public API
pub use categorization::{
    api_error_hint, categorize_sms_error, categorize_status, get_retry_strategy,
};
pub use types::{
    ErrorType, InitializationError, SecretProblem, SecretProblems, SecretsError, SmsError,
};
