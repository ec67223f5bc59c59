//! Application initialization and resource setup.
//!
//! This module provides functions to initialize shared resources:
//! - Logger (plain or JSON)
//! - HTTP client for the messaging API
//!
//! All initialization functions return proper error types for error handling.

mod client;
mod logger;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;
