//! Rotation window resolution.
//!
//! A rotation window is the integer bucket `floor(now / unit_seconds)`. Passwords
//! are stable for every `now` inside one bucket and change when the boundary
//! is crossed. Nothing here reads the clock; callers pass `now` in.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Seconds in an average Gregorian month (365.2425 / 12 days).
pub const AVERAGE_MONTH_SECONDS: i64 = 2_629_746;

/// Named rotation granularity.
///
/// Parsing is case-sensitive and only accepts the lowercase names.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RotationUnit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    #[default]
    Month,
}

impl RotationUnit {
    /// Length of one window of this unit, in seconds.
    #[must_use]
    pub const fn seconds(self) -> i64 {
        match self {
            Self::Second => 1,
            Self::Minute => 60,
            Self::Hour => 3_600,
            Self::Day => 86_400,
            Self::Week => 604_800,
            Self::Month => AVERAGE_MONTH_SECONDS,
        }
    }

    /// Resolve a unit name, falling back to [`RotationUnit::Month`] for
    /// anything unrecognised.
    ///
    /// Existing configs rely on the fallback, so a typo such as `"fortnight"`
    /// silently rotates monthly instead of failing.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or(Self::Month)
    }

    /// Whether `name` is one of the recognised unit names.
    #[must_use]
    pub fn is_known(name: &str) -> bool {
        name.parse::<Self>().is_ok()
    }

    /// All units, shortest first.
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }
}

/// A resolved rotation bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RotationWindow {
    pub unit: RotationUnit,
    pub bucket: i64,
}

impl RotationWindow {
    /// Resolve the bucket containing `now` (unix seconds).
    #[must_use]
    pub fn at(unit: RotationUnit, now: i64) -> Self {
        Self {
            unit,
            bucket: resolve_window(unit, now),
        }
    }

    /// First unix second belonging to this bucket.
    #[must_use]
    pub const fn starts_at(&self) -> i64 {
        self.bucket.saturating_mul(self.unit.seconds())
    }

    /// First unix second of the following bucket, i.e. when the password rotates.
    #[must_use]
    pub const fn next_rotation_at(&self) -> i64 {
        self.starts_at().saturating_add(self.unit.seconds())
    }

    /// Whole seconds from `now` until the next rotation, clamped at zero.
    #[must_use]
    pub const fn seconds_until_rotation(&self, now: i64) -> i64 {
        let remaining = self.next_rotation_at().saturating_sub(now);
        if remaining < 0 { 0 } else { remaining }
    }
}

/// Map `now` (unix seconds) to its integer bucket for `unit`.
///
/// Floor division, so times before the epoch land in negative buckets.
#[must_use]
pub fn resolve_window(unit: RotationUnit, now: i64) -> i64 {
    now.checked_div_euclid(unit.seconds()).unwrap_or_default()
}

/// Like [`resolve_window`], taking a unit name with the month fallback.
#[must_use]
pub fn resolve_window_by_name(unit: &str, now: i64) -> i64 {
    resolve_window(RotationUnit::from_name(unit), now)
}
