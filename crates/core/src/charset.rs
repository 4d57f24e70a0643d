//! Character classes and pool assembly.

use strum::{Display, EnumIter, IntoEnumIterator};

use crate::{
    digest::HexDigest,
    error::Error,
    options::GenerationOptions,
    result::Result,
};

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SPECIALS: &[u8] = b"!@#$%^&*()-_=+";

/// A character class that can be required of a password.
///
/// Iteration order is the order classes are appended to the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Digits,
    Specials,
}

impl CharClass {
    /// The characters belonging to this class.
    #[must_use]
    pub const fn alphabet(self) -> &'static [u8] {
        match self {
            Self::Lowercase => LOWERCASE,
            Self::Uppercase => UPPERCASE,
            Self::Digits => DIGITS,
            Self::Specials => SPECIALS,
        }
    }

    /// Digest offset of the hex pair that picks this class's required
    /// character. Fixed per class, regardless of which other classes are on.
    #[must_use]
    pub const fn digest_offset(self) -> usize {
        match self {
            Self::Lowercase => 0,
            Self::Uppercase => 2,
            Self::Digits => 4,
            Self::Specials => 6,
        }
    }

    /// Whether `c` belongs to this class.
    #[must_use]
    pub fn contains(self, c: char) -> bool {
        u8::try_from(c).is_ok_and(|byte| self.alphabet().contains(&byte))
    }

    /// The class's required character for `digest`.
    fn required_char(self, digest: &HexDigest) -> Result<char> {
        pick(self.alphabet(), digest.byte_at(self.digest_offset()))
    }
}

/// Allowed characters for one request, plus the characters every password
/// must contain before shuffling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterPool {
    allowed: Vec<u8>,
    required: Vec<char>,
}

impl CharacterPool {
    /// Build the pool for `options`, choosing required characters from `digest`.
    ///
    /// `only_digits` wins over the per-class flags: the pool is the digits and
    /// no required characters are chosen.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if no class is enabled.
    pub fn assemble(options: &GenerationOptions, digest: &HexDigest) -> Result<Self> {
        let pool = if options.only_digits {
            Self {
                allowed: DIGITS.to_vec(),
                required: Vec::new(),
            }
        } else {
            let classes: Vec<CharClass> = CharClass::iter()
                .filter(|class| options.requires(*class))
                .collect();
            let required = classes
                .iter()
                .map(|class| class.required_char(digest))
                .collect::<Result<Vec<char>>>()?;
            let allowed = classes
                .iter()
                .flat_map(|class| class.alphabet().iter().copied())
                .collect();
            Self { allowed, required }
        };

        if pool.allowed.is_empty() {
            return Err(Error::invalid_configuration(
                "no character classes enabled; enable at least one class or only_digits",
            ));
        }

        Ok(pool)
    }

    /// Characters a password may contain.
    #[must_use]
    pub fn allowed(&self) -> &[u8] {
        &self.allowed
    }

    /// Required characters, in class order.
    #[must_use]
    pub fn required(&self) -> &[char] {
        &self.required
    }

    /// Whether `c` may appear in a password drawn from this pool.
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        u8::try_from(c).is_ok_and(|byte| self.allowed.contains(&byte))
    }

    /// Pool character selected by keystream byte `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if the pool is empty.
    pub fn pick(&self, value: u8) -> Result<char> {
        pick(&self.allowed, value)
    }
}

fn pick(alphabet: &[u8], value: u8) -> Result<char> {
    usize::from(value)
        .checked_rem(alphabet.len())
        .and_then(|index| alphabet.get(index))
        .map(|&byte| char::from(byte))
        .ok_or_else(|| Error::invalid_configuration("character pool is empty"))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn github_digest() -> HexDigest {
        HexDigest::of("UltraSecret:github.com:669")
    }

    #[test]
    fn test_alphabets() {
        assert_eq!(CharClass::Lowercase.alphabet().len(), 26);
        assert_eq!(CharClass::Uppercase.alphabet().len(), 26);
        assert_eq!(CharClass::Digits.alphabet().len(), 10);
        assert_eq!(CharClass::Specials.alphabet(), b"!@#$%^&*()-_=+");
    }

    #[test]
    fn test_all_classes_required_chars() {
        // digest starts 28 5e db 36
        let pool = CharacterPool::assemble(&GenerationOptions::default(), &github_digest()).unwrap();
        assert_eq!(pool.required(), &['o', 'Q', '9', '=']);
        assert_eq!(pool.allowed().len(), 26 + 26 + 10 + 14);
    }

    #[test]
    fn test_pool_order_follows_class_order() {
        let pool = CharacterPool::assemble(&GenerationOptions::default(), &github_digest()).unwrap();
        assert_eq!(pool.allowed().first(), Some(&b'a'));
        assert_eq!(pool.allowed().get(26), Some(&b'A'));
        assert_eq!(pool.allowed().get(52), Some(&b'0'));
        assert_eq!(pool.allowed().last(), Some(&b'+'));
    }

    #[test]
    fn test_offsets_are_fixed_per_class() {
        let options = GenerationOptions::default()
            .with_lowercase(false)
            .with_uppercase(false);
        let pool = CharacterPool::assemble(&options, &github_digest()).unwrap();
        // digits still read offset 4 (0xdb), specials offset 6 (0x36)
        assert_eq!(pool.required(), &['9', '=']);
        assert_eq!(pool.allowed(), b"0123456789!@#$%^&*()-_=+");
    }

    #[test]
    fn test_only_digits_overrides_flags() {
        let options = GenerationOptions::default()
            .with_only_digits(true)
            .with_digits(false);
        let pool = CharacterPool::assemble(&options, &github_digest()).unwrap();
        assert!(pool.required().is_empty());
        assert_eq!(pool.allowed(), b"0123456789");
    }

    #[test]
    fn test_empty_pool_is_rejected() {
        let options = GenerationOptions::default()
            .with_lowercase(false)
            .with_uppercase(false)
            .with_digits(false)
            .with_specials(false);
        let result = CharacterPool::assemble(&options, &github_digest());
        assert!(matches!(result, Err(Error::InvalidConfiguration { .. })));
    }

    #[test]
    fn test_class_membership() {
        assert!(CharClass::Specials.contains('='));
        assert!(!CharClass::Specials.contains('a'));
        assert!(!CharClass::Lowercase.contains('é'));
    }
}
