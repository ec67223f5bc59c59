//! Twilio SMS client.
//!
//! Sends messages through the Messages resource of the Twilio REST API
//! (`POST /2010-04-01/Accounts/{AccountSid}/Messages.json`) using HTTP Basic
//! auth with the account SID and auth token. Transient failures (429, 5xx,
//! timeouts, connection errors) are retried with exponential backoff.

mod client;
mod types;

pub use client::{validate_body, TwilioClient};
pub use types::{MessageReceipt, MessageStatus};
