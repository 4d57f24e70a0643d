//! # rotpass core
//!
//! Deterministic, time-rotated password derivation.
//!
//! Given a master secret, a service identifier and a unix time, the deriver
//! reproduces the same password for every instant inside one rotation window
//! and a new one after the window boundary. Nothing is stored.
//!
//! ## Laws
//!
//! - No `unwrap()`, `expect()` or `panic!()` - fallible operations return `Result`
//! - No clock reads - callers pass `now` in
//! - No I/O except [`config::ServicesConfig::load`]
//!
//! ## Example
//!
//! ```
//! use rotpass_core::{GenerationOptions, GenerationRequest, derive};
//!
//! let request = GenerationRequest::new("UltraSecret", "github.com")
//!     .with_options(GenerationOptions::default());
//! let password = derive(&request, 1_760_000_000)?;
//! assert_eq!(password, "B2eotu&9=QEnpuAd");
//! # Ok::<(), rotpass_core::Error>(())
//! ```

pub mod charset;
pub mod config;
pub mod derivation;
pub mod digest;
mod error;
pub mod options;
mod result;
pub mod rotation;
pub mod secret;
pub mod shuffle;

pub use charset::{CharClass, CharacterPool};
pub use config::{ServiceEntry, ServicesConfig};
pub use derivation::{Derivation, derive, derive_detailed, derive_password};
pub use error::Error;
pub use options::{DEFAULT_LENGTH, GenerationOptions, GenerationRequest, MIN_LENGTH};
pub use result::Result;
pub use rotation::{RotationUnit, RotationWindow, resolve_window, resolve_window_by_name};
pub use secret::MasterSecret;
pub use shuffle::deterministic_shuffle;
