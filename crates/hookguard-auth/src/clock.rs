//! Time sources for the replay-window check.

use chrono::Utc;

/// Source of the current time, in seconds since the Unix epoch.
pub trait Clock: Send + Sync {
    /// Current time in seconds since the Unix epoch.
    fn now_unix_secs(&self) -> i64;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_unix_secs(&self) -> i64 {
        Utc::now().timestamp()
    }
}

/// A clock frozen at a fixed instant.
///
/// # Examples
///
/// ```
/// use hookguard_auth::clock::{Clock, FixedClock};
///
/// assert_eq!(FixedClock(1_700_000_000).now_unix_secs(), 1_700_000_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_unix_secs(&self) -> i64 {
        self.0
    }
}
