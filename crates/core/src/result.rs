//! Result type definition for rotpass operations.

use crate::error::Error;

/// The standard Result type for rotpass operations.
///
/// All fallible operations in the core return this type.
/// Use the `?` operator, `match`, or combinator methods to handle results.
///
/// # Examples
///
/// ```
/// use rotpass_core::{GenerationOptions, Result, derive_password};
///
/// fn github_password(secret: &str, now: i64) -> Result<String> {
///     let password = derive_password(secret, "github.com", &GenerationOptions::default(), now)?;
///     Ok(password)
/// }
///
/// assert!(github_password("UltraSecret", 1_760_000_000).is_ok());
/// ```
pub type Result<T> = std::result::Result<T, Error>;
