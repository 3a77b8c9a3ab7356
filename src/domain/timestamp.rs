//! Deadline timestamps.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Seconds since the Unix epoch.
///
/// Used both for clock readings and for caller-supplied deadlines.  An
/// operation is expired when `now > deadline`; a deadline equal to the
/// current time is still accepted.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Timestamp(u64);

impl Timestamp {
    /// A deadline that never expires.
    pub const NEVER: Self = Self(u64::MAX);

    /// Creates a timestamp from whole seconds.
    #[must_use]
    pub const fn from_secs(secs: u64) -> Self {
        Self(secs)
    }

    /// Returns whole seconds since the epoch.
    #[must_use]
    pub const fn as_secs(&self) -> u64 {
        self.0
    }

    /// Returns `true` if a deadline of `self` has passed at `now`.
    #[must_use]
    pub const fn is_expired_at(&self, now: Timestamp) -> bool {
        now.0 > self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
