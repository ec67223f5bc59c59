//! Error type definitions.
//!
//! This module defines all error types used throughout the application.
//! None of them ever carries a secret value: problems are reported per key,
//! and API error bodies are redacted before they are stored.

use std::fmt;
use std::path::PathBuf;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

use crate::secrets::SecretKey;
use crate::twilio::MessageStatus;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// The configured API base URL is not a valid absolute URL.
    #[error("Invalid API base URL '{url}': {source}")]
    BaseUrlError {
        /// The rejected value
        url: String,
        /// Why it failed to parse
        #[source]
        source: url::ParseError,
    },
}

/// A single problem with a single credential.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SecretProblem {
    /// The variable is not set at all.
    #[error("is not set")]
    Missing,

    /// The variable is set but empty (or whitespace only).
    #[error("is empty")]
    Empty,

    /// The variable still holds a template value such as `enter`.
    #[error("still holds a placeholder value")]
    Placeholder,

    /// Phone number is not E.164 (`+` followed by 2-15 digits).
    #[error("'{0}' is not an E.164 phone number (expected e.g. +15551234567)")]
    InvalidPhoneNumber(String),

    /// Account SID is not `AC` followed by 32 hex digits.
    #[error("is not a valid account SID (expected 'AC' followed by 32 hex digits)")]
    InvalidAccountSid,

    /// SSID exceeds 32 bytes.
    #[error("is {0} bytes long (maximum is 32)")]
    SsidTooLong(usize),

    /// WiFi passphrase violates the WPA2-PSK rules.
    #[error("is not a valid WPA2 passphrase: {0}")]
    InvalidPassphrase(&'static str),
}

/// A list of credential problems, one entry per offending key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretProblems(pub Vec<(SecretKey, SecretProblem)>);

impl SecretProblems {
    /// Returns the problems reported for `key`.
    pub fn for_key(&self, key: SecretKey) -> impl Iterator<Item = &SecretProblem> {
        self.0
            .iter()
            .filter(move |(k, _)| *k == key)
            .map(|(_, p)| p)
    }

    /// Returns the number of problems.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true when there are no problems.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SecretProblems {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, problem)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{} {}", key.env_var(), problem)?;
        }
        Ok(())
    }
}

/// Error types for loading credentials.
#[derive(Error, Debug)]
pub enum SecretsError {
    /// One or more credentials failed validation. Every problem is listed.
    #[error("{} invalid credential(s): {}", .0.len(), .0)]
    Invalid(SecretProblems),

    /// The credentials file could not be read or parsed.
    #[error("Failed to read credentials file {}: {source}", .path.display())]
    EnvFile {
        /// File that was requested
        path: PathBuf,
        /// Underlying I/O or parse error
        #[source]
        source: dotenvy::Error,
    },
}

impl SecretsError {
    /// Returns the per-key problems when this is a validation error.
    pub fn problems(&self) -> Option<&SecretProblems> {
        match self {
            SecretsError::Invalid(problems) => Some(problems),
            SecretsError::EnvFile { .. } => None,
        }
    }
}

/// Error types for sending an SMS.
#[derive(Error, Debug)]
pub enum SmsError {
    /// Message body is empty.
    #[error("Message body is empty")]
    EmptyBody,

    /// Message body exceeds the concatenated-SMS limit.
    #[error("Message body is {0} characters long (maximum is 1600)")]
    BodyTooLong(usize),

    /// Transport-level failure (timeout, connection refused, TLS, decode).
    #[error("HTTP request failed: {0}")]
    Http(#[from] ReqwestError),

    /// The API answered with a structured error.
    #[error("Messaging API rejected the request (HTTP {status}, code {code}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Twilio error code, see <https://www.twilio.com/docs/api/errors>
        code: u32,
        /// Error message with secrets redacted
        message: String,
    },

    /// The API answered with something that is not a structured error.
    #[error("Unexpected response from messaging API (HTTP {status}): {body}")]
    UnexpectedResponse {
        /// HTTP status code
        status: u16,
        /// Sanitized, truncated response body
        body: String,
    },

    /// The API accepted the request but reported the message as failed.
    #[error("Message {sid} {status}{}", failure_detail(.code, .message))]
    MessageFailed {
        /// Message SID
        sid: String,
        /// Terminal status, e.g. `failed` or `undelivered`
        status: MessageStatus,
        /// Twilio error code, when reported
        code: Option<u32>,
        /// Twilio error message, when reported
        message: Option<String>,
    },
}

fn failure_detail(code: &Option<u32>, message: &Option<String>) -> String {
    match (code, message) {
        (Some(code), Some(message)) => format!(" (code {code}): {message}"),
        (Some(code), None) => format!(" (code {code})"),
        (None, Some(message)) => format!(": {message}"),
        (None, None) => String::new(),
    }
}

impl SmsError {
    /// HTTP status code of the failed response, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            SmsError::Api { status, .. } | SmsError::UnexpectedResponse { status, .. } => {
                Some(*status)
            }
            SmsError::Http(e) => e.status().map(|s| s.as_u16()),
            SmsError::EmptyBody | SmsError::BodyTooLong(_) | SmsError::MessageFailed { .. } => {
                None
            }
        }
    }

    /// Twilio error code carried by this error, if any.
    pub fn api_code(&self) -> Option<u32> {
        match self {
            SmsError::Api { code, .. } => Some(*code),
            SmsError::MessageFailed { code, .. } => *code,
            _ => None,
        }
    }
}

/// Categories of SMS send failures, used for retry decisions and log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    /// Rejected before any request is made
    InvalidBody,
    /// Accepted by the API, then reported as failed
    MessageFailed,
    /// Request timed out
    HttpRequestTimeoutError,
    /// Could not connect
    HttpRequestConnectError,
    /// Response body could not be decoded
    HttpRequestDecodeError,
    /// Any other transport or status error
    HttpRequestOtherError,
    /// 400 Bad Request (invalid number, unverified recipient)
    HttpRequestBadRequest,
    /// 401 Unauthorized (wrong SID/token)
    HttpRequestUnauthorized,
    /// 403 Forbidden
    HttpRequestForbidden,
    /// 404 Not Found (unknown account)
    HttpRequestNotFound,
    /// 429 Too Many Requests
    HttpRequestTooManyRequests,
    /// 5xx
    HttpRequestServerError,
}

impl ErrorType {
    /// Returns a human-readable label for this error type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::InvalidBody => "Invalid message body",
            ErrorType::MessageFailed => "Message failed",
            ErrorType::HttpRequestTimeoutError => "HTTP request timeout",
            ErrorType::HttpRequestConnectError => "HTTP connect error",
            ErrorType::HttpRequestDecodeError => "HTTP response decode error",
            ErrorType::HttpRequestOtherError => "HTTP request error",
            ErrorType::HttpRequestBadRequest => "Bad request (400)",
            ErrorType::HttpRequestUnauthorized => "Unauthorized (401)",
            ErrorType::HttpRequestForbidden => "Forbidden (403)",
            ErrorType::HttpRequestNotFound => "Not found (404)",
            ErrorType::HttpRequestTooManyRequests => "Too many requests (429)",
            ErrorType::HttpRequestServerError => "Server error (5xx)",
        }
    }
}
