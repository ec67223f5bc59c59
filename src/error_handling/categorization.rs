//! Error categorization and retry strategy.
//!
//! This module provides functions to categorize SMS failures and configure
//! the retry strategy for the messaging API.

use std::time::Duration;
use tokio_retry::strategy::ExponentialBackoff;

use crate::config::HTTP_STATUS_TOO_MANY_REQUESTS;

use super::types::{ErrorType, SmsError};

/// Creates an exponential backoff retry strategy.
///
/// Returns a retry strategy configured with:
/// - Initial delay: `RETRY_INITIAL_DELAY_MS` milliseconds
/// - Backoff factor: `RETRY_FACTOR` (doubles delay each retry)
/// - Maximum delay: `RETRY_MAX_DELAY_SECS` seconds
/// - Maximum retries: `RETRY_MAX_ATTEMPTS`
///
/// `ExponentialBackoff` yields `base^n * factor` milliseconds, so the base is
/// the growth factor and the multiplier scales the first delay.
pub fn get_retry_strategy() -> impl Iterator<Item = Duration> {
    ExponentialBackoff::from_millis(crate::config::RETRY_FACTOR)
        .factor(crate::config::RETRY_INITIAL_DELAY_MS / crate::config::RETRY_FACTOR)
        .max_delay(Duration::from_secs(crate::config::RETRY_MAX_DELAY_SECS))
        .take(crate::config::RETRY_MAX_ATTEMPTS)
}

/// Maps an HTTP status code to an `ErrorType`.
pub fn categorize_status(status: u16) -> ErrorType {
    match status {
        400 => ErrorType::HttpRequestBadRequest,
        401 => ErrorType::HttpRequestUnauthorized,
        403 => ErrorType::HttpRequestForbidden,
        404 => ErrorType::HttpRequestNotFound,
        HTTP_STATUS_TOO_MANY_REQUESTS => ErrorType::HttpRequestTooManyRequests,
        500..=599 => ErrorType::HttpRequestServerError,
        _ => ErrorType::HttpRequestOtherError,
    }
}

/// Categorizes an `SmsError` into an `ErrorType`.
///
/// Status codes win over transport flags: a `reqwest::Error` produced by
/// `error_for_status()` is categorized by its status.
pub fn categorize_sms_error(error: &SmsError) -> ErrorType {
    if let Some(status) = error.status() {
        return categorize_status(status);
    }

    match error {
        SmsError::EmptyBody | SmsError::BodyTooLong(_) => ErrorType::InvalidBody,
        SmsError::MessageFailed { .. } => ErrorType::MessageFailed,
        SmsError::Http(e) if e.is_timeout() => ErrorType::HttpRequestTimeoutError,
        SmsError::Http(e) if e.is_connect() => ErrorType::HttpRequestConnectError,
        SmsError::Http(e) if e.is_decode() => ErrorType::HttpRequestDecodeError,
        _ => ErrorType::HttpRequestOtherError,
    }
}

/// Returns a remediation hint for well-known Twilio error codes.
///
/// See <https://www.twilio.com/docs/api/errors>.
pub fn api_error_hint(code: u32) -> Option<&'static str> {
    match code {
        20003 => Some("check TWILIO_ACCOUNT_SID and TWILIO_AUTH_TOKEN"),
        20404 => Some("the account SID does not exist or was closed"),
        21211 => Some("TWILIO_TO_NUMBER is not a valid phone number"),
        21212 | 21606 => Some("TWILIO_FROM_NUMBER is not a number owned by this account"),
        21408 => Some("SMS to this region is not enabled for the account"),
        21608 => Some("trial accounts can only send to verified numbers"),
        21610 => Some("the recipient has replied STOP and unsubscribed"),
        21614 => Some("TWILIO_TO_NUMBER cannot receive SMS"),
        30007 => Some("the carrier filtered the message; avoid URL shorteners and spam-like text"),
        _ => None,
    }
}
