//! Wall-clock abstraction for the tracker and the aggregator.
//!
//! Day-boundary logic is impossible to test against the real system time.
//! The tracker and summary layers receive a [`Clock`] instead of reading
//! globals, so tests can pin "now" to a fixed instant.

use chrono::{Local, NaiveDate};

/// A source of wall-clock time.
///
/// `today()` must be derived from the same instant `now()` reports,
/// otherwise rollover detection can disagree with interval timestamps
/// right around midnight.
pub trait Clock {
    /// Current time as Unix seconds with sub-second precision.
    fn now(&self) -> f64;

    /// Current local calendar date.
    fn today(&self) -> NaiveDate;
}

/// The production clock backed by the local system time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> f64 {
        let now = Local::now();
        now.timestamp() as f64 + f64::from(now.timestamp_subsec_micros()) / 1_000_000.0
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock pinned to a fixed instant, advanced manually.
///
/// Used by tests and by anything that needs deterministic day math.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    pub now_ts: f64,
    pub today: NaiveDate,
}

impl Clock for FixedClock {
    fn now(&self) -> f64 {
        self.now_ts
    }

    fn today(&self) -> NaiveDate {
        self.today
    }
}
