//! Command-line interface.
//!
//! Parsing lives in the library so it can be tested without spawning the
//! binary; `main.rs` only loads `.env`, initializes logging and calls [`run`].

use std::fmt::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::{ClientConfig, LogFormat, LogLevel, DEFAULT_TIMEOUT_SECS};
use crate::error_handling::{api_error_hint, SecretsError, SmsError};
use crate::secrets::{env_template, PhoneNumber, Secrets};
use crate::{check_credentials, send_notification};

/// Validate WiFi/Twilio credentials and send SMS notifications.
#[derive(Debug, Parser)]
#[command(name = "sms_notify", version, about)]
pub struct Cli {
    /// Credentials file in dotenv format (default: environment, after loading ./.env)
    #[arg(long, global = true)]
    pub env_file: Option<PathBuf>,

    /// Log level (default: info, adjusted by RUST_LOG)
    #[arg(long, value_enum, global = true)]
    pub log_level: Option<LogLevel>,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain, global = true)]
    pub log_format: LogFormat,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS, global = true)]
    pub timeout_seconds: u64,

    /// Messaging API base URL
    #[arg(long, global = true, hide = true)]
    pub api_base_url: Option<String>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Load and validate all six credentials, then print a redacted summary
    Check,
    /// Send an SMS
    Send {
        /// Message text (at most 1600 characters)
        body: String,
        /// Recipient in E.164 form (default: TWILIO_TO_NUMBER)
        #[arg(long, value_parser = PhoneNumber::parse)]
        to: Option<PhoneNumber>,
    },
    /// Print a .env template with placeholder values
    Template,
}

impl Cli {
    /// HTTP client configuration derived from the global options.
    pub fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig {
            timeout_seconds: self.timeout_seconds,
            ..Default::default()
        };
        if let Some(url) = &self.api_base_url {
            config.base_url = url.clone();
        }
        config
    }
}

/// Runs the parsed command, writing user-facing output to stdout.
pub async fn run(cli: Cli) -> Result<()> {
    match &cli.command {
        Command::Template => {
            print!("{}", env_template());
        }
        Command::Check => {
            let secrets = check_credentials(cli.env_file.as_deref())?;
            print!("{}", render_summary(&secrets));
        }
        Command::Send { body, to } => {
            let secrets = check_credentials(cli.env_file.as_deref())?;
            let receipt =
                send_notification(&secrets, &cli.client_config(), to.as_ref(), body).await?;
            println!("✅ Message {} {}", receipt.sid, receipt.status);
            if let Some(segments) = receipt.num_segments() {
                println!("Segments: {segments}");
            }
        }
    }
    Ok(())
}

/// Renders the redacted credential summary printed by `check`.
pub fn render_summary(secrets: &Secrets) -> String {
    let mut out = String::from("✅ All credentials valid\n");
    for (key, value) in secrets.redacted_summary() {
        let _ = writeln!(out, "  {:<20} {}", key.env_var(), value);
    }
    out
}

/// Renders an error chain for the terminal, with one line per credential
/// problem and a hint for well-known API error codes.
pub fn render_error(error: &anyhow::Error) -> String {
    let mut out = String::new();
    if let Some(SecretsError::Invalid(problems)) = error.downcast_ref::<SecretsError>() {
        let _ = writeln!(out, "❌ {} credential problem(s):", problems.len());
        for (key, problem) in &problems.0 {
            let _ = writeln!(out, "  {} ({}) {}", key.env_var(), key.label(), problem);
        }
        out.push_str("Run `sms_notify template` for a starting .env file.\n");
        return out;
    }

    let _ = writeln!(out, "❌ sms_notify error: {:#}", error);
    let api_code = error
        .chain()
        .find_map(|cause| cause.downcast_ref::<SmsError>().and_then(SmsError::api_code));
    if let Some(hint) = api_code.and_then(api_error_hint) {
        let _ = writeln!(out, "Hint: {hint}");
    }
    out
}
