//! CLI command definitions using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rotpass_core::{DEFAULT_LENGTH, GenerationOptions, RotationUnit};

/// rotpass - deterministic, time-rotated passwords
#[derive(Parser, Debug)]
#[command(name = "rotpass")]
#[command(version)]
#[command(about = "Derive reproducible, periodically rotating passwords from a master secret")]
#[command(
    long_about = "rotpass derives a password for each service from a master secret, the service identifier and the current rotation window. Nothing is stored: the same inputs in the same window always give the same password."
)]
pub struct Cli {
    /// Log derivation details to stderr
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// Derive as of this unix time (seconds) instead of now
    #[arg(long, global = true, value_name = "UNIX_SECONDS", allow_negative_numbers = true)]
    pub now: Option<i64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Derive passwords for every service in a config file
    Generate {
        /// Path to the services config (JSON)
        #[arg(short, long, default_value = "config.json")]
        config: PathBuf,

        /// Output as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Derive the password for a single service
    Derive {
        /// Service identifier, e.g. github.com
        #[arg(allow_hyphen_values = true)]
        identifier: String,

        /// Password length (at least 4)
        #[arg(short, long, default_value_t = DEFAULT_LENGTH)]
        length: usize,

        /// Rotation unit (second, minute, hour, day, week, month); unknown names rotate monthly
        #[arg(short = 'u', long, default_value = "month")]
        rotation_unit: String,

        /// Do not require uppercase letters
        #[arg(long, default_value_t = false)]
        no_uppercase: bool,

        /// Do not require lowercase letters
        #[arg(long, default_value_t = false)]
        no_lowercase: bool,

        /// Do not require digits
        #[arg(long, default_value_t = false)]
        no_digits: bool,

        /// Do not require special characters
        #[arg(long, default_value_t = false)]
        no_specials: bool,

        /// Use digits only, ignoring the other class flags
        #[arg(long, default_value_t = false)]
        only_digits: bool,

        /// Output as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Show the current rotation window
    Window {
        /// Rotation unit (second, minute, hour, day, week, month); unknown names rotate monthly
        #[arg(short = 'u', long, default_value = "month")]
        rotation_unit: String,

        /// Output as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

/// Class and length flags of the `derive` subcommand.
#[derive(Debug, Clone, Copy)]
#[allow(clippy::struct_excessive_bools)]
pub struct DeriveFlags {
    pub length: usize,
    pub rotation_unit: RotationUnit,
    pub no_uppercase: bool,
    pub no_lowercase: bool,
    pub no_digits: bool,
    pub no_specials: bool,
    pub only_digits: bool,
}

impl DeriveFlags {
    /// Generation options these flags describe.
    pub const fn options(self) -> GenerationOptions {
        GenerationOptions {
            rotation_unit: self.rotation_unit,
            length: self.length,
            require_uppercase: !self.no_uppercase,
            require_lowercase: !self.no_lowercase,
            require_digits: !self.no_digits,
            require_specials: !self.no_specials,
            only_digits: self.only_digits,
        }
    }
}
