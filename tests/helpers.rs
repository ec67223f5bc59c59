// Shared test helpers for credential files and mock API setup.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::io::Write;

use sms_notify::{ClientConfig, Secrets};
use tempfile::NamedTempFile;

pub const SID: &str = "AC0123456789abcdef0123456789abcdef";
pub const TOKEN: &str = "fedcba9876543210fedcba9876543210";
pub const FROM: &str = "+15005550006";
pub const TO: &str = "+15551234567";

/// A complete, valid `.env` body.
#[allow(dead_code)] // Used by other test files
pub fn valid_env_contents() -> String {
    format!(
        "# test credentials\n\
         WIFI_SSID=\"Home Network\"\n\
         WIFI_PASSWORD=\"correct horse battery\"\n\
         TWILIO_ACCOUNT_SID={SID}\n\
         TWILIO_AUTH_TOKEN={TOKEN}\n\
         TWILIO_FROM_NUMBER={FROM}\n\
         TWILIO_TO_NUMBER={TO}\n"
    )
}

/// Writes `contents` to a temporary file that lives as long as the handle.
#[allow(dead_code)] // Used by other test files
pub fn write_env_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write env file");
    file.flush().expect("Failed to flush env file");
    file
}

/// Valid secrets built without touching the environment.
#[allow(dead_code)] // Used by other test files
pub fn test_secrets() -> Secrets {
    let file = write_env_file(&valid_env_contents());
    Secrets::from_env_file(file.path()).expect("valid test credentials")
}

/// Client config pointing at a mock server, with a short timeout.
#[allow(dead_code)] // Used by other test files
pub fn mock_config(base_url: &str) -> ClientConfig {
    ClientConfig {
        timeout_seconds: 2,
        base_url: base_url.to_string(),
        ..Default::default()
    }
}
