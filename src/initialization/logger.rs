//! Logger initialization.
//!
//! This module provides functions to initialize the logger with custom formatting.

use std::io::Write;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::*;
use log::LevelFilter;

/// Initializes the logger with the specified level and format.
///
/// Configures `env_logger` with custom formatting. Supports both plain text
/// (with colors and emojis) and JSON formats for structured logging.
///
/// Defaults to `info`. `RUST_LOG` directives apply on top of the defaults,
/// and an explicit `level` (the `--log-level` flag) overrides both for this
/// crate and the global default.
///
/// Nothing in this crate logs a secret value, so no filtering is applied to
/// messages here.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// # Use RUST_LOG for quick debugging (no CLI args needed)
/// RUST_LOG=debug sms_notify check
///
/// # Per-module filtering via RUST_LOG
/// RUST_LOG=sms_notify=debug,reqwest=info sms_notify send "Door opened"
///
/// # The flag wins over RUST_LOG
/// RUST_LOG=debug sms_notify --log-level warn check
/// ```
pub fn init_logger_with(
    level: Option<LevelFilter>,
    format: LogFormat,
) -> Result<(), InitializationError> {
    let rust_log = std::env::var(env_logger::DEFAULT_FILTER_ENV).ok();
    let mut builder = logger_builder(rust_log.as_deref(), level, format);

    // try_init: tests may initialize the logger more than once
    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}

/// Builds the logger: defaults, then `filters` (`RUST_LOG` syntax), then `level`.
fn logger_builder(
    filters: Option<&str>,
    level: Option<LevelFilter>,
    format: LogFormat,
) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();

    builder.filter_level(LevelFilter::Info);
    builder.filter_module("reqwest", LevelFilter::Info);
    builder.filter_module("hyper", LevelFilter::Info);
    builder.filter_module("hyper_util", LevelFilter::Info);

    if let Some(filters) = filters {
        builder.parse_filters(filters);
    }

    if let Some(level) = level {
        builder.filter_level(level);
        builder.filter_module("sms_notify", level);
    }

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{{\"ts\":{},\"level\":\"{}\",\"target\":\"{}\",\"msg\":{}}}",
                    chrono::Utc::now().timestamp_millis(),
                    record.level(),
                    record.target(),
                    serde_json::to_string(&record.args().to_string())
                        .unwrap_or_else(|_| "\"\"".into())
                )
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                let level = record.level();
                let colored_level = match level {
                    log::Level::Error => level.to_string().red(),
                    log::Level::Warn => level.to_string().yellow(),
                    log::Level::Info => level.to_string().green(),
                    log::Level::Debug => level.to_string().blue(),
                    log::Level::Trace => level.to_string().purple(),
                };

                let emoji = match level {
                    log::Level::Error => "❌",
                    log::Level::Warn => "⚠️",
                    log::Level::Info => "📨",
                    log::Level::Debug => "🔍",
                    log::Level::Trace => "🔬",
                };

                writeln!(
                    buf,
                    "{} {} [{}] {}",
                    emoji,
                    record.target().cyan(),
                    colored_level,
                    record.args()
                )
            });
        }
    }

    builder
}
