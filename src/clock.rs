//! Time sources for deadline checks.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;

use crate::domain::Timestamp;

/// Supplies the current time.
///
/// A pool reads its clock exactly once per operation, on entry.
pub trait Clock: Send + Sync {
    /// Current time in whole seconds since the Unix epoch.
    fn now(&self) -> Timestamp;
}

/// Wall-clock time from the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        // pre-epoch clocks read as the epoch
        let secs = u64::try_from(Utc::now().timestamp()).unwrap_or(0);
        Timestamp::from_secs(secs)
    }
}

/// A settable clock.
///
/// Clones share the same reading, so a test can hold one handle while the
/// pool holds another.
///
/// # Examples
///
/// ```
/// use simple_swap::clock::{Clock, ManualClock};
/// use simple_swap::domain::Timestamp;
///
/// let clock = ManualClock::new(Timestamp::from_secs(100));
/// let handle = clock.clone();
/// handle.advance(5);
/// assert_eq!(clock.now(), Timestamp::from_secs(105));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    secs: Arc<AtomicU64>,
}

impl ManualClock {
    /// Creates a clock reading `start`.
    #[must_use]
    pub fn new(start: Timestamp) -> Self {
        Self {
            secs: Arc::new(AtomicU64::new(start.as_secs())),
        }
    }

    /// Sets the reading.
    pub fn set(&self, now: Timestamp) {
        self.secs.store(now.as_secs(), Ordering::SeqCst);
    }

    /// Moves the reading forward, saturating at [`Timestamp::NEVER`].
    pub fn advance(&self, secs: u64) {
        let _ = self
            .secs
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |s| {
                Some(s.saturating_add(secs))
            });
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        Timestamp::from_secs(self.secs.load(Ordering::SeqCst))
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_is_after_2020() {
        // 2020-01-01T00:00:00Z
        assert!(SystemClock.now() > Timestamp::from_secs(1_577_836_800));
    }

    #[test]
    fn manual_clock_set_and_advance() {
        let clock = ManualClock::new(Timestamp::from_secs(10));
        clock.set(Timestamp::from_secs(50));
        clock.advance(7);
        assert_eq!(clock.now(), Timestamp::from_secs(57));
    }

    #[test]
    fn manual_clock_saturates() {
        let clock = ManualClock::new(Timestamp::NEVER);
        clock.advance(1);
        assert_eq!(clock.now(), Timestamp::NEVER);
    }

    #[test]
    fn clones_share_reading() {
        let a = ManualClock::default();
        let b = a.clone();
        b.set(Timestamp::from_secs(3));
        assert_eq!(a.now(), Timestamp::from_secs(3));
    }
}
