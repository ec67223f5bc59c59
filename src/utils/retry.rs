//! Error retriability.

use crate::error_handling::{categorize_sms_error, ErrorType, SmsError};

/// Determines if an SMS error is retriable (should be retried).
///
/// Only transient failures are retried. A retried request that actually
/// reached the API may send a duplicate SMS, so the set is kept narrow.
///
/// # Retriable Errors
///
/// - Network timeouts and connection failures
/// - Server errors (5xx HTTP status codes)
/// - Rate limiting (429 Too Many Requests)
///
/// # Non-Retriable Errors
///
/// - Client errors (4xx HTTP status codes, except 429): bad credentials,
///   invalid numbers, unverified recipients
/// - Invalid message bodies
/// - Messages the API accepted and then reported as failed
/// - Decode errors
pub fn is_retriable_error(error: &SmsError) -> bool {
    matches!(
        categorize_sms_error(error),
        ErrorType::HttpRequestTimeoutError
            | ErrorType::HttpRequestConnectError
            | ErrorType::HttpRequestTooManyRequests
            | ErrorType::HttpRequestServerError
    )
}
