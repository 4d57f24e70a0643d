//! # rotpass
//!
//! Command-line front end for `rotpass_core`.
//!
//! ## Exit status
//!
//! - `0` every requested password was derived
//! - `1` a request was rejected, the config could not be read, or any
//!   service in `generate` failed
//!
//! Passwords go to stdout; prompts, logs and errors go to stderr.

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

use std::process;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;
mod json;
mod prompt;

use cli::Cli;

/// Initialize tracing subscriber with environment filter.
///
/// `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Format an error for user display (no stack traces)
fn format_error(err: &anyhow::Error) -> String {
    let mut msg = err.to_string();

    // Only add the cause if it adds information
    if let Some(source) = err.source() {
        let source_msg = source.to_string();
        if !msg.contains(&source_msg) && !source_msg.is_empty() {
            msg = format!("{msg}\nCause: {source_msg}");
        }
    }

    msg
}

fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let now = cli.now.unwrap_or_else(|| chrono::Utc::now().timestamp());
    commands::execute_command(cli.command, now)
}

fn main() {
    if let Err(err) = run_cli() {
        eprintln!("Error: {}", format_error(&err));
        process::exit(1);
    }
}
