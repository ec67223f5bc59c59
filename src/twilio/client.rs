//! SMS sending through the Twilio Messages resource.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use log::{debug, info, warn};
use reqwest::StatusCode;
use tokio_retry::RetryIf;
use url::Url;

use crate::config::{ClientConfig, MAX_SMS_BODY_CHARS, TWILIO_API_BASE_URL, TWILIO_API_VERSION};
use crate::error_handling::{get_retry_strategy, InitializationError, SmsError};
use crate::initialization::init_client;
use crate::secrets::{PhoneNumber, TwilioCredentials};
use crate::utils::{is_retriable_error, sanitize_and_truncate_error_message};

use super::types::{ApiErrorBody, MessageReceipt};

/// Client for the Twilio Messages API.
///
/// Owns its credentials; nothing else in the process needs to see the auth
/// token once the client is built.
pub struct TwilioClient {
    http: Arc<reqwest::Client>,
    credentials: TwilioCredentials,
    base_url: Url,
}

impl TwilioClient {
    /// Creates a client against the public Twilio endpoint.
    pub fn new(
        http: Arc<reqwest::Client>,
        credentials: TwilioCredentials,
    ) -> Result<Self, InitializationError> {
        Self::with_base_url(http, credentials, TWILIO_API_BASE_URL)
    }

    /// Creates a client against `base_url` (regional endpoints, test servers).
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::BaseUrlError` if `base_url` is not an absolute URL.
    pub fn with_base_url(
        http: Arc<reqwest::Client>,
        credentials: TwilioCredentials,
        base_url: &str,
    ) -> Result<Self, InitializationError> {
        let base_url = Url::parse(base_url).map_err(|source| InitializationError::BaseUrlError {
            url: base_url.to_string(),
            source,
        })?;
        Ok(Self {
            http,
            credentials,
            base_url,
        })
    }

    /// Builds the HTTP client from `config` and creates a client against `config.base_url`.
    pub fn from_config(
        credentials: TwilioCredentials,
        config: &ClientConfig,
    ) -> Result<Self, InitializationError> {
        let http = init_client(config)?;
        Self::with_base_url(http, credentials, &config.base_url)
    }

    /// `{base}/2010-04-01/Accounts/{sid}/Messages.json`
    pub fn messages_url(&self) -> String {
        format!(
            "{}/{}/Accounts/{}/Messages.json",
            self.base_url.as_str().trim_end_matches('/'),
            TWILIO_API_VERSION,
            self.credentials.account_sid()
        )
    }

    /// Sends `body` to the configured recipient (`TWILIO_TO_NUMBER`).
    pub async fn send_sms(&self, body: &str) -> Result<MessageReceipt, SmsError> {
        let to = self.credentials.to_number().clone();
        self.send_sms_to(&to, body).await
    }

    /// Sends `body` to `to`, retrying transient failures.
    ///
    /// # Errors
    ///
    /// - `SmsError::EmptyBody` / `SmsError::BodyTooLong` before any request is made
    /// - `SmsError::Api` when the API rejects the message (not retried unless 429/5xx)
    /// - `SmsError::Http` for transport failures that persisted through all retries
    /// - `SmsError::MessageFailed` when the API accepted the request but
    ///   reports the message as failed (never retried)
    pub async fn send_sms_to(
        &self,
        to: &PhoneNumber,
        body: &str,
    ) -> Result<MessageReceipt, SmsError> {
        validate_body(body)?;

        info!(
            "Sending SMS from {} to {} ({} chars)",
            self.credentials.from_number(),
            to,
            body.chars().count()
        );

        let attempts = AtomicU32::new(0);
        let result = RetryIf::spawn(
            get_retry_strategy(),
            || {
                attempts.fetch_add(1, Ordering::SeqCst);
                self.send_once(to, body)
            },
            |e: &SmsError| {
                let retry = is_retriable_error(e);
                if retry {
                    warn!("Transient messaging API failure, retrying: {e}");
                }
                retry
            },
        )
        .await
        .and_then(|receipt| self.reject_failed(receipt));

        let attempts = attempts.load(Ordering::SeqCst);
        match &result {
            Ok(receipt) => info!(
                "SMS accepted: sid={} status={} (attempts: {})",
                receipt.sid, receipt.status, attempts
            ),
            Err(e) => warn!("SMS to {} failed after {} attempt(s): {}", to, attempts, e),
        }
        result
    }

    fn reject_failed(&self, receipt: MessageReceipt) -> Result<MessageReceipt, SmsError> {
        if !receipt.status.is_failure() {
            return Ok(receipt);
        }
        let token = self.credentials.auth_token().expose();
        Err(SmsError::MessageFailed {
            sid: receipt.sid,
            status: receipt.status,
            code: receipt.error_code,
            message: receipt
                .error_message
                .map(|m| sanitize_and_truncate_error_message(&m, &[token])),
        })
    }

    async fn send_once(&self, to: &PhoneNumber, body: &str) -> Result<MessageReceipt, SmsError> {
        let url = self.messages_url();
        debug!("POST {url}");

        let response = self
            .http
            .post(&url)
            .basic_auth(
                self.credentials.account_sid().as_str(),
                Some(self.credentials.auth_token().expose()),
            )
            .form(&[
                ("To", to.as_str()),
                ("From", self.credentials.from_number().as_str()),
                ("Body", body),
            ])
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        debug!("Messaging API responded with HTTP {}", status.as_u16());
        self.parse_response(status, &text)
    }

    fn parse_response(&self, status: StatusCode, text: &str) -> Result<MessageReceipt, SmsError> {
        let token = self.credentials.auth_token().expose();
        if status.is_success() {
            return serde_json::from_str::<MessageReceipt>(text).map_err(|_| {
                SmsError::UnexpectedResponse {
                    status: status.as_u16(),
                    body: sanitize_and_truncate_error_message(text, &[token]),
                }
            });
        }

        match serde_json::from_str::<ApiErrorBody>(text) {
            Ok(err) => Err(SmsError::Api {
                status: status.as_u16(),
                code: err.code,
                message: sanitize_and_truncate_error_message(&err.message, &[token]),
            }),
            Err(_) => Err(SmsError::UnexpectedResponse {
                status: status.as_u16(),
                body: sanitize_and_truncate_error_message(text, &[token]),
            }),
        }
    }
}

/// Rejects empty bodies and bodies above the concatenated-SMS limit.
pub fn validate_body(body: &str) -> Result<(), SmsError> {
    if body.trim().is_empty() {
        return Err(SmsError::EmptyBody);
    }
    let len = body.chars().count();
    if len > MAX_SMS_BODY_CHARS {
        return Err(SmsError::BodyTooLong(len));
    }
    Ok(())
}
