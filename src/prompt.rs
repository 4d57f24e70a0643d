//! Master secret acquisition.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use rotpass_core::MasterSecret;
use zeroize::Zeroize;

pub const PROMPT: &str = "Enter your master secret: ";

/// Prompt on stderr and read the master secret from stdin.
pub fn read_master_secret() -> Result<MasterSecret> {
    read_master_secret_from(&mut std::io::stdin().lock(), &mut std::io::stderr())
}

/// Write the prompt to `out`, then read one line from `input`.
///
/// Surrounding whitespace is trimmed. An empty secret is rejected.
pub fn read_master_secret_from(
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<MasterSecret> {
    out.write_all(PROMPT.as_bytes())
        .and_then(|()| out.flush())
        .context("Failed to write prompt")?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("Failed to read master secret")?;

    let secret = MasterSecret::new(line.trim());
    line.zeroize();

    if secret.is_empty() {
        return Err(rotpass_core::Error::MissingSecret.into());
    }
    Ok(secret)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_reads_and_trims_line() {
        let mut input = Cursor::new("  UltraSecret \nignored\n");
        let mut out = Vec::new();

        let secret = read_master_secret_from(&mut input, &mut out).unwrap();

        assert_eq!(secret.expose(), "UltraSecret");
        assert_eq!(String::from_utf8(out).unwrap(), PROMPT);
    }

    #[test]
    fn test_empty_input_rejected() {
        let mut input = Cursor::new("");
        let result = read_master_secret_from(&mut input, &mut Vec::new());
        assert!(result.is_err());
    }

    #[test]
    fn test_whitespace_only_rejected() {
        let mut input = Cursor::new("   \n");
        let err = read_master_secret_from(&mut input, &mut Vec::new()).err().unwrap();
        assert!(err.to_string().contains("must not be empty"));
    }
}
