//! Injectable time source.
//!
//! Trip timestamps and license expiry checks read time through [`Clock`] rather than calling
//! `Utc::now()` directly, so tests can pin "now" and "today" to known values.

use chrono::{DateTime, NaiveDate, Utc};

/// Source of the current time for the dispatch orchestrator.
///
/// Passed around as `Arc<dyn Clock>` in [`AppState`](crate::server::state::AppState).
pub trait Clock: Send + Sync + 'static {
    /// Returns the current instant in UTC.
    fn now(&self) -> DateTime<Utc>;

    /// Returns the current calendar date in UTC.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Wall clock backed by the system time.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a single instant.
#[cfg(test)]
#[derive(Clone, Copy, Debug)]
pub struct FixedClock {
    now: DateTime<Utc>,
}

#[cfg(test)]
impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }
}

#[cfg(test)]
impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }
}
