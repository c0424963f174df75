//! Interval domain types shared by the store, the tracker and the views.

use chrono::NaiveDate;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef};
use rusqlite::ToSql;
use std::fmt;

/// The category of a tracked interval.
///
/// Every interval is either `Active` (the user is working) or `Pause`
/// (the session is locked or the user stepped away). The value is stored
/// as the lowercase string the `intervals` table CHECK constraint expects.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum IntervalKind {
    Active,
    Pause,
}

impl IntervalKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IntervalKind::Active => "active",
            IntervalKind::Pause => "pause",
        }
    }
}

impl fmt::Display for IntervalKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl ToSql for IntervalKind {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for IntervalKind {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value.as_str()? {
            "active" => Ok(IntervalKind::Active),
            "pause" => Ok(IntervalKind::Pause),
            other => Err(FromSqlError::Other(format!("unknown interval kind '{}'", other).into())),
        }
    }
}

/// A single contiguous span of tracked time.
///
/// `end_ts` is `None` while the interval is open ("right now"). The `day`
/// is fixed at insertion time; an interval that runs past midnight keeps
/// its start day and the aggregator attributes all of its duration there.
#[derive(Debug, Clone)]
pub struct Interval {
    /// The unique identifier assigned by the store.
    pub id: i64,
    /// The local calendar day at the moment the interval was started.
    pub day: NaiveDate,
    /// Interval start, Unix seconds with sub-second precision.
    pub start_ts: f64,
    /// Interval end, or `None` while the interval is open.
    pub end_ts: Option<f64>,
    /// Whether this span counts as work or as a break.
    pub kind: IntervalKind,
}

impl Interval {
    /// Duration in seconds, using `now_ts` as a provisional end for an
    /// open interval.
    pub fn duration_secs(&self, now_ts: f64) -> f64 {
        self.end_ts.unwrap_or(now_ts) - self.start_ts
    }
}
