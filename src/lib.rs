//! sms_notify library: validated credentials and SMS notifications
//!
//! This library owns the credential boundary of a WiFi-connected notifier:
//! the WiFi network credentials and the Twilio account used to send SMS
//! alerts. The six values are loaded once at startup into an immutable
//! [`Secrets`] object, validated together (placeholders, E.164 numbers,
//! WPA2 passphrase rules), and passed explicitly to whatever needs them.
//!
//! # Example
//!
//! ```no_run
//! use sms_notify::{send_notification, ClientConfig, Secrets};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let secrets = Secrets::from_env()?;
//! let receipt = send_notification(&secrets, &ClientConfig::default(), None, "Door opened").await?;
//! println!("Queued message {}", receipt.sid);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! Sending requires a Tokio runtime. Loading and validating credentials does not.

#![warn(missing_docs)]

pub mod cli;
pub mod config;
pub mod error_handling;
pub mod initialization;
pub mod secrets;
pub mod twilio;
mod utils;

// Re-export public API
pub use config::{ClientConfig, LogFormat, LogLevel};
pub use error_handling::{SecretProblem, SecretsError, SmsError};
pub use run::{check_credentials, send_notification};
pub use secrets::{
    AccountSid, PhoneNumber, Secret, SecretKey, Secrets, TwilioCredentials, WifiCredentials,
};
pub use twilio::{MessageReceipt, MessageStatus, TwilioClient};

// High-level operations used by the CLI
mod run {
    use std::path::Path;

    use anyhow::{Context, Result};
    use log::info;

    use crate::config::ClientConfig;
    use crate::error_handling::SecretsError;
    use crate::secrets::{PhoneNumber, Secrets};
    use crate::twilio::{MessageReceipt, TwilioClient};

    /// Loads and validates the credential set.
    ///
    /// Reads `env_file` when given, otherwise the process environment. This
    /// is the fail-fast startup check: call it before any networking or
    /// messaging code runs.
    ///
    /// # Errors
    ///
    /// Returns every credential problem at once, or a file error.
    pub fn check_credentials(env_file: Option<&Path>) -> Result<Secrets, SecretsError> {
        match env_file {
            Some(path) => info!("Loading credentials from {}", path.display()),
            None => info!("Loading credentials from the environment"),
        }
        let secrets = Secrets::load(env_file)?;
        info!(
            "Credentials valid (WiFi network '{}', sender {})",
            secrets.wifi().ssid(),
            secrets.twilio().from_number()
        );
        Ok(secrets)
    }

    /// Sends one SMS using `secrets`.
    ///
    /// The message goes to `to` when given, otherwise to `TWILIO_TO_NUMBER`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built or the message is
    /// rejected after retries.
    pub async fn send_notification(
        secrets: &Secrets,
        config: &ClientConfig,
        to: Option<&PhoneNumber>,
        body: &str,
    ) -> Result<MessageReceipt> {
        let client = TwilioClient::from_config(secrets.twilio().clone(), config)
            .context("Failed to initialize messaging client")?;
        let receipt = match to {
            Some(number) => client.send_sms_to(number, body).await,
            None => client.send_sms(body).await,
        }
        .context("Failed to send SMS")?;
        Ok(receipt)
    }
}
