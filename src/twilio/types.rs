//! Messaging API request/response types.

use serde::Deserialize;
use strum_macros::Display;

/// Delivery state reported by the Messages resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MessageStatus {
    /// Accepted by a messaging service, sender not chosen yet
    Accepted,
    /// Scheduled for later delivery
    Scheduled,
    /// Waiting to be sent
    Queued,
    /// Being handed to the carrier
    Sending,
    /// Handed to the carrier
    Sent,
    /// Carrier confirmed delivery
    Delivered,
    /// Carrier could not deliver
    Undelivered,
    /// Rejected before reaching the carrier
    Failed,
    /// Canceled before sending
    Canceled,
    /// Read by the recipient (WhatsApp and similar channels)
    Read,
    /// Inbound message being received
    Receiving,
    /// Inbound message received
    Received,
    /// Some segments delivered
    PartiallyDelivered,
    /// Any status this crate does not know about
    #[serde(other)]
    Unknown,
}

impl MessageStatus {
    /// True for states from which the message will never be delivered.
    pub fn is_failure(self) -> bool {
        matches!(
            self,
            MessageStatus::Failed | MessageStatus::Undelivered | MessageStatus::Canceled
        )
    }
}

/// The API's acknowledgement of an accepted message.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageReceipt {
    /// Message SID (`SM...`)
    pub sid: String,
    /// Delivery state at the time of the response
    pub status: MessageStatus,
    /// Recipient in E.164 form
    pub to: String,
    /// Sender, absent when a messaging service picks one later
    pub from: Option<String>,
    /// Sent as a string by the API, e.g. `"1"`
    #[serde(default)]
    num_segments: Option<String>,
    /// Twilio error code when the message failed
    #[serde(default)]
    pub error_code: Option<u32>,
    /// Description matching `error_code`
    #[serde(default)]
    pub error_message: Option<String>,
}

impl MessageReceipt {
    /// Number of SMS segments the body was split into, when reported.
    pub fn num_segments(&self) -> Option<u32> {
        self.num_segments.as_deref().and_then(|s| s.parse().ok())
    }
}

/// Structured error body returned with non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub code: u32,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receipt_deserializes() {
        let json = r#"{
            "sid": "SM0123456789abcdef0123456789abcdef",
            "status": "queued",
            "to": "+15551234567",
            "from": "+15005550006",
            "body": "hello",
            "num_segments": "2",
            "error_code": null,
            "error_message": null
        }"#;
        let receipt: MessageReceipt = serde_json::from_str(json).unwrap();
        assert_eq!(receipt.status, MessageStatus::Queued);
        assert_eq!(receipt.num_segments(), Some(2));
        assert!(receipt.error_code.is_none());
    }

    #[test]
    fn test_unknown_status_is_tolerated() {
        let json = r#"{"sid":"SM1","status":"brand_new_state","to":"+15551234567"}"#;
        let receipt: MessageReceipt = serde_json::from_str(json).unwrap();
        assert_eq!(receipt.status, MessageStatus::Unknown);
        assert_eq!(receipt.num_segments(), None);
    }

    #[test]
    fn test_status_display_and_failure() {
        assert_eq!(MessageStatus::PartiallyDelivered.to_string(), "partially_delivered");
        assert!(MessageStatus::Undelivered.is_failure());
        assert!(!MessageStatus::Sent.is_failure());
    }

    #[test]
    fn test_error_body_deserializes() {
        let json = r#"{"code":21211,"message":"The 'To' number is not valid.","more_info":"https://www.twilio.com/docs/errors/21211","status":400}"#;
        let body: ApiErrorBody = serde_json::from_str(json).unwrap();
        assert_eq!(body.code, 21211);
        assert_eq!(body.message, "The 'To' number is not valid.");
    }
}
