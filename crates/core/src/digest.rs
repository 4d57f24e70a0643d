//! SHA-256 hex digests used as a deterministic keystream.
//!
//! The derivation reads the digest two hex characters at a time. Reads are
//! addressed by character offset into the 64-character lowercase hex string
//! and wrap around the end, so any offset is valid.

use sha2::{Digest, Sha256};

/// Number of hex characters in a SHA-256 digest.
pub const HEX_DIGEST_LEN: usize = 64;

/// Lowercase hex SHA-256 of `input`.
///
/// # Examples
///
/// ```
/// use rotpass_core::digest::sha256_hex;
///
/// let hex = sha256_hex("");
/// assert_eq!(hex, "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855");
/// ```
#[must_use]
pub fn sha256_hex(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// A 64-character lowercase hex digest read as a cyclic keystream.
#[derive(Clone, PartialEq, Eq)]
pub struct HexDigest {
    hex: [u8; HEX_DIGEST_LEN],
}

impl HexDigest {
    /// Digest `input` with SHA-256.
    #[must_use]
    pub fn of(input: &str) -> Self {
        let mut hex = [0u8; HEX_DIGEST_LEN];
        hex.iter_mut()
            .zip(sha256_hex(input).bytes())
            .for_each(|(slot, byte)| *slot = byte);
        Self { hex }
    }

    /// The digest as a hex string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.hex).unwrap_or_default()
    }

    /// Value of the two hex characters starting at `offset`, wrapping past
    /// the end of the digest.
    ///
    /// The second character is read independently modulo the digest length,
    /// so an odd offset at the last position pairs the final character with
    /// the first.
    #[must_use]
    pub fn byte_at(&self, offset: usize) -> u8 {
        let high = self.nibble_at(offset);
        let low = self.nibble_at(offset.wrapping_add(1));
        high.wrapping_shl(4) | low
    }

    fn nibble_at(&self, offset: usize) -> u8 {
        offset
            .checked_rem(HEX_DIGEST_LEN)
            .and_then(|index| self.hex.get(index))
            .and_then(|&c| char::from(c).to_digit(16))
            .and_then(|digit| u8::try_from(digit).ok())
            .unwrap_or_default()
    }
}

// Digests derive from the master secret; keep them out of logs.
impl std::fmt::Debug for HexDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("HexDigest(<redacted>)")
    }
}
