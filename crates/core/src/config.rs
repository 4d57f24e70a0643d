//! Services configuration.
//!
//! # Example Config
//!
//! ```json
//! {
//!   "services": [
//!     { "identifier": "github.com" },
//!     { "identifier": "bank.example", "length": 8, "only_digits": true, "rotation_unit": "week" }
//!   ]
//! }
//! ```
//!
//! Every field except `identifier` is optional; omitted fields take the
//! defaults of [`GenerationOptions`]. An unknown `rotation_unit`, including a
//! non-string value such as `null`, rotates monthly.

use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

use crate::{
    error::Error,
    options::{DEFAULT_LENGTH, GenerationOptions},
    result::Result,
    rotation::RotationUnit,
};

// ═══════════════════════════════════════════════════════════════════════════
// CONFIGURATION STRUCTURES
// ═══════════════════════════════════════════════════════════════════════════

/// Top-level config document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServicesConfig {
    #[serde(default)]
    pub services: Vec<ServiceEntry>,
}

/// One service to derive a password for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct ServiceEntry {
    pub identifier: String,
    #[serde(default = "default_length")]
    pub length: usize,
    /// Kept as the raw name so unknown units can fall back instead of failing
    /// the whole document. A non-string value keeps its JSON text.
    #[serde(
        default = "default_rotation_unit",
        deserialize_with = "deserialize_rotation_unit"
    )]
    pub rotation_unit: String,
    #[serde(default = "default_true")]
    pub require_uppercase: bool,
    #[serde(default = "default_true")]
    pub require_lowercase: bool,
    #[serde(default = "default_true")]
    pub require_digits: bool,
    #[serde(default = "default_true")]
    pub require_specials: bool,
    #[serde(default)]
    pub only_digits: bool,
}

const fn default_length() -> usize {
    DEFAULT_LENGTH
}

fn default_rotation_unit() -> String {
    RotationUnit::Month.to_string()
}

const fn default_true() -> bool {
    true
}

/// Accepts any JSON value; non-strings such as `null` or `7` become their
/// JSON text and resolve as unknown units.
fn deserialize_rotation_unit<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(name) => name,
        other => other.to_string(),
    })
}

// ═══════════════════════════════════════════════════════════════════════════
// PUBLIC API
// ═══════════════════════════════════════════════════════════════════════════

impl ServicesConfig {
    /// Parse a config document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::JsonParseFailed`] if the JSON is malformed or an entry
    /// lacks `identifier`.
    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(Error::from)
    }

    /// Read and parse a config file.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The file cannot be read
    /// - The JSON is malformed
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::config_read_failed(path, e.to_string()))?;

        Self::from_json_str(&content).map_err(|e| match e {
            Error::JsonParseFailed { reason } => {
                Error::json_parse_failed(format!("{}: {reason}", path.display()))
            }
            other => other,
        })
    }
}

impl ServiceEntry {
    /// Entry for `identifier` with all defaults.
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            length: DEFAULT_LENGTH,
            rotation_unit: default_rotation_unit(),
            require_uppercase: true,
            require_lowercase: true,
            require_digits: true,
            require_specials: true,
            only_digits: false,
        }
    }

    /// Resolved rotation unit, with the month fallback for unknown names.
    #[must_use]
    pub fn rotation_unit(&self) -> RotationUnit {
        if !RotationUnit::is_known(&self.rotation_unit) {
            warn!(
                identifier = %self.identifier,
                rotation_unit = %self.rotation_unit,
                "unknown rotation unit, rotating monthly"
            );
        }
        RotationUnit::from_name(&self.rotation_unit)
    }

    /// Generation options for this entry. Length is not validated here.
    #[must_use]
    pub fn options(&self) -> GenerationOptions {
        GenerationOptions {
            rotation_unit: self.rotation_unit(),
            length: self.length,
            require_uppercase: self.require_uppercase,
            require_lowercase: self.require_lowercase,
            require_digits: self.require_digits,
            require_specials: self.require_specials,
            only_digits: self.only_digits,
        }
    }
}
