//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `sms_notify` library that handles:
//! - Environment variable loading (.env file)
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing error output and exit codes
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use sms_notify::cli::{render_error, run, Cli};
use sms_notify::config::DEFAULT_ENV_FILE;
use sms_notify::initialization::init_logger_with;

/// Loads `.env` from the working directory, or else from next to the executable.
///
/// Values already present in the environment are not overridden.
fn load_default_env_file() {
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(DEFAULT_ENV_FILE);
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // An explicit --env-file is read directly by the loader and must not be
    // mixed with a stray ./.env
    if cli.env_file.is_none() {
        load_default_env_file();
    }

    init_logger_with(cli.log_level.clone().map(Into::into), cli.log_format.clone())
        .context("Failed to initialize logger")?;

    if let Err(e) = run(cli).await {
        eprint!("{}", render_error(&e));
        process::exit(1);
    }
    Ok(())
}
