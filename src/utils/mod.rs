//! Utility functions for the messaging client.
//!
//! This module provides:
//! - Error retriability determination
//! - Error message sanitization and secret redaction

mod retry;
pub mod sanitize;

pub use retry::is_retriable_error;
pub use sanitize::sanitize_and_truncate_error_message;
