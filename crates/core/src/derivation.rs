//! Deterministic password derivation.
//!
//! # Algorithm
//!
//! 1. Resolve the rotation bucket for `now`.
//! 2. Build the seed `"{secret}:{identifier}:{bucket}"`. Neither part is
//!    escaped, so `("a:b", "c")` and `("a", "b:c")` share a seed.
//! 3. Hash the seed to a 64-character hex keystream.
//! 4. Assemble the character pool and pick one required character per
//!    enabled class from fixed keystream offsets 0, 2, 4 and 6.
//! 5. Fill from offset 8 onward, two hex characters per position, wrapping
//!    around the digest, until the requested length is reached.
//! 6. Shuffle the result keyed by the seed.

use tracing::{debug, trace};
use zeroize::Zeroizing;

use crate::{
    charset::CharacterPool,
    digest::HexDigest,
    error::Error,
    options::{GenerationOptions, GenerationRequest, MIN_LENGTH},
    result::Result,
    rotation::RotationWindow,
    secret::MasterSecret,
    shuffle::deterministic_shuffle,
};

/// Keystream offset where the fill loop starts, after the four class picks.
const FILL_START: usize = 8;

/// Hex characters consumed per filled position.
const FILL_STRIDE: usize = 2;

/// The outcome of one derivation.
#[derive(Clone, PartialEq, Eq)]
pub struct Derivation {
    /// Bucket the password belongs to.
    pub window: RotationWindow,
    /// Required characters followed by the fill, before shuffling.
    pub candidate: Vec<char>,
    /// The final password.
    pub password: String,
}

impl std::fmt::Debug for Derivation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Derivation")
            .field("window", &self.window)
            .field("length", &self.password.chars().count())
            .finish_non_exhaustive()
    }
}

/// Derive the password for `request` at unix time `now`.
///
/// # Errors
///
/// - [`Error::InvalidLength`] if the requested length is below 4. Checked
///   before any hashing.
/// - [`Error::InvalidConfiguration`] if no character class is enabled.
/// - [`Error::LengthTooLarge`] if the password buffer cannot be allocated.
pub fn derive(request: &GenerationRequest, now: i64) -> Result<String> {
    derive_detailed(request, now).map(|derivation| derivation.password)
}

/// Convenience form of [`derive`] taking the parts separately.
///
/// # Errors
///
/// See [`derive`].
pub fn derive_password(
    master_secret: &str,
    identifier: &str,
    options: &GenerationOptions,
    now: i64,
) -> Result<String> {
    let request = GenerationRequest::new(MasterSecret::new(master_secret), identifier)
        .with_options(*options);
    derive(&request, now)
}

/// Like [`derive`], also returning the window and the pre-shuffle sequence.
///
/// # Errors
///
/// See [`derive`].
pub fn derive_detailed(request: &GenerationRequest, now: i64) -> Result<Derivation> {
    let options = &request.options;
    if options.length < MIN_LENGTH {
        return Err(Error::invalid_length(options.length, MIN_LENGTH));
    }

    let window = RotationWindow::at(options.rotation_unit, now);
    let seed = base_seed(&request.master_secret, &request.identifier, window.bucket);
    let digest = HexDigest::of(&seed);

    let pool = CharacterPool::assemble(options, &digest)?;
    debug!(
        identifier = %request.identifier,
        unit = %window.unit,
        bucket = window.bucket,
        pool_size = pool.allowed().len(),
        required = pool.required().len(),
        length = options.length,
        "deriving password"
    );

    let candidate = fill(&pool, &digest, options.length)?;
    let password: String = deterministic_shuffle(candidate.iter().copied(), &seed)
        .into_iter()
        .collect();
    trace!(identifier = %request.identifier, "derivation complete");

    Ok(Derivation {
        window,
        candidate,
        password,
    })
}

/// `"{secret}:{identifier}:{bucket}"`, unescaped. Wiped on drop.
fn base_seed(secret: &MasterSecret, identifier: &str, bucket: i64) -> Zeroizing<String> {
    Zeroizing::new(format!("{}:{identifier}:{bucket}", secret.expose()))
}

/// Required characters, then keystream picks until `length` is reached.
///
/// Required characters are kept verbatim, even when they repeat a fill pick.
fn fill(pool: &CharacterPool, digest: &HexDigest, length: usize) -> Result<Vec<char>> {
    let required = pool.required();
    let mut candidate = Vec::new();
    candidate
        .try_reserve_exact(length)
        .map_err(|_| Error::length_too_large(length))?;
    candidate.extend_from_slice(required);

    (0..length.saturating_sub(required.len())).try_for_each(|step| {
        let offset = FILL_START.wrapping_add(step.wrapping_mul(FILL_STRIDE));
        candidate.push(pool.pick(digest.byte_at(offset))?);
        Ok::<(), Error>(())
    })?;

    Ok(candidate)
}
