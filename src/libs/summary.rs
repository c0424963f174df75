//! Read-only aggregation of interval totals for reports and the status view.
//!
//! Everything here derives from the store; nothing mutates it. Callers
//! that span time run the tracker's rollover first so the open interval
//! is attributed to the correct day before totals are computed.

use crate::db::intervals::{DayTotals, Intervals};
use crate::libs::clock::Clock;
use crate::libs::error::Result;
use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Weekend days are dropped from the weekly breakdown below this much
/// active time, to keep near-zero Saturday/Sunday noise off the table.
/// A display policy only; `daily_totals` itself never filters.
const WEEKEND_MIN_ACTIVE_SECS: f64 = 15.0 * 60.0;

/// One row of the weekly breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekRow {
    pub day: NaiveDate,
    pub active_secs: f64,
    pub pause_secs: f64,
}

/// Aggregator over the interval store.
pub struct Summary<'a, C: Clock> {
    intervals: &'a Intervals,
    clock: &'a C,
}

impl<'a, C: Clock> Summary<'a, C> {
    pub fn new(intervals: &'a Intervals, clock: &'a C) -> Self {
        Summary { intervals, clock }
    }

    /// Today's active seconds, including the live duration of an open
    /// interval. Zero when no rows exist for today.
    pub fn active_seconds_today(&self) -> Result<f64> {
        let today = self.clock.today();
        let totals = self.intervals.daily_totals(today, self.clock.now())?;
        Ok(totals.into_iter().find(|(day, _)| *day == today).map_or(0.0, |(_, secs)| secs))
    }

    /// Active seconds per recorded day over the trailing `days` calendar
    /// days (today included), newest first.
    pub fn report_rows(&self, days: u64) -> Result<Vec<(NaiveDate, f64)>> {
        let since = self.clock.today() - Days::new(days.saturating_sub(1));
        self.intervals.daily_totals(since, self.clock.now())
    }

    /// Active and pause totals for the trailing 7 calendar days, newest
    /// first. Days without rows appear as zeros; Saturday and Sunday are
    /// omitted unless their active total exceeds the 15-minute threshold.
    pub fn weekly_breakdown(&self) -> Result<Vec<WeekRow>> {
        let today = self.clock.today();
        let since = today - Days::new(6);
        let recorded = self.intervals.daily_breakdown(since, self.clock.now())?;

        let mut rows = Vec::new();
        for offset in 0..7 {
            let day = today - Days::new(offset);
            let totals = recorded.iter().find(|t| t.day == day).cloned().unwrap_or(DayTotals {
                day,
                active_secs: 0.0,
                pause_secs: 0.0,
            });

            let weekend = matches!(day.weekday(), Weekday::Sat | Weekday::Sun);
            if weekend && totals.active_secs <= WEEKEND_MIN_ACTIVE_SECS {
                continue;
            }

            rows.push(WeekRow {
                day,
                active_secs: totals.active_secs,
                pause_secs: totals.pause_secs,
            });
        }

        Ok(rows)
    }
}
