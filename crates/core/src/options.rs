//! Generation options and requests.

use serde::{Deserialize, Serialize};

use crate::{charset::CharClass, rotation::RotationUnit, secret::MasterSecret};

/// Shortest password the deriver will produce.
pub const MIN_LENGTH: usize = 4;

/// Default password length.
pub const DEFAULT_LENGTH: usize = 16;

/// Per-service knobs controlling the shape of a derived password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct GenerationOptions {
    pub rotation_unit: RotationUnit,
    pub length: usize,
    pub require_uppercase: bool,
    pub require_lowercase: bool,
    pub require_digits: bool,
    pub require_specials: bool,
    pub only_digits: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            rotation_unit: RotationUnit::Month,
            length: DEFAULT_LENGTH,
            require_uppercase: true,
            require_lowercase: true,
            require_digits: true,
            require_specials: true,
            only_digits: false,
        }
    }
}

impl GenerationOptions {
    #[must_use]
    pub const fn with_rotation_unit(mut self, unit: RotationUnit) -> Self {
        self.rotation_unit = unit;
        self
    }

    #[must_use]
    pub const fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    #[must_use]
    pub const fn with_uppercase(mut self, required: bool) -> Self {
        self.require_uppercase = required;
        self
    }

    #[must_use]
    pub const fn with_lowercase(mut self, required: bool) -> Self {
        self.require_lowercase = required;
        self
    }

    #[must_use]
    pub const fn with_digits(mut self, required: bool) -> Self {
        self.require_digits = required;
        self
    }

    #[must_use]
    pub const fn with_specials(mut self, required: bool) -> Self {
        self.require_specials = required;
        self
    }

    #[must_use]
    pub const fn with_only_digits(mut self, only_digits: bool) -> Self {
        self.only_digits = only_digits;
        self
    }

    /// Whether `class` is switched on. Ignores `only_digits`.
    #[must_use]
    pub const fn requires(&self, class: CharClass) -> bool {
        match class {
            CharClass::Lowercase => self.require_lowercase,
            CharClass::Uppercase => self.require_uppercase,
            CharClass::Digits => self.require_digits,
            CharClass::Specials => self.require_specials,
        }
    }
}

/// Everything needed to derive one password, minus the time.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub master_secret: MasterSecret,
    pub identifier: String,
    pub options: GenerationOptions,
}

impl GenerationRequest {
    /// Request with default options.
    pub fn new(master_secret: impl Into<MasterSecret>, identifier: impl Into<String>) -> Self {
        Self {
            master_secret: master_secret.into(),
            identifier: identifier.into(),
            options: GenerationOptions::default(),
        }
    }

    #[must_use]
    pub const fn with_options(mut self, options: GenerationOptions) -> Self {
        self.options = options;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_config_defaults() {
        let options = GenerationOptions::default();
        assert_eq!(options.rotation_unit, RotationUnit::Month);
        assert_eq!(options.length, 16);
        assert!(options.require_uppercase);
        assert!(options.require_lowercase);
        assert!(options.require_digits);
        assert!(options.require_specials);
        assert!(!options.only_digits);
    }

    #[test]
    fn test_builders_chain() {
        let options = GenerationOptions::default()
            .with_length(24)
            .with_rotation_unit(RotationUnit::Week)
            .with_specials(false);
        assert_eq!(options.length, 24);
        assert_eq!(options.rotation_unit, RotationUnit::Week);
        assert!(!options.requires(CharClass::Specials));
        assert!(options.requires(CharClass::Lowercase));
    }

    #[test]
    fn test_request_debug_hides_secret() {
        let request = GenerationRequest::new("UltraSecret", "github.com");
        let debug = format!("{request:?}");
        assert!(debug.contains("github.com"));
        assert!(!debug.contains("UltraSecret"));
    }
}
