//! Database operations for tracked time intervals.
//!
//! The `intervals` table is the single source of truth for the tracker:
//! an append-only log of `active`/`pause` spans, at most one of which is
//! open (`end_ts IS NULL`) at any time. Rows are never deleted and never
//! mutated except for closing the open interval.
//!
//! Closing is deliberately a "close every open row" update rather than a
//! close-by-id: if a crash ever leaves two open rows behind, the next
//! transition reconciles them all to the same end time. This is the only
//! crash-recovery mechanism the store needs, so it must not be optimized
//! into a single-row update.

use crate::db::db::Db;
use crate::libs::error::Result;
use crate::libs::interval::{Interval, IntervalKind};
use chrono::NaiveDate;
use parking_lot::Mutex;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::sync::Arc;

/// SQL schema for the intervals table.
///
/// `day` is the ISO local date fixed at insertion; `start_ts`/`end_ts`
/// are floating-point Unix seconds. The CHECK constraint mirrors
/// [`IntervalKind`].
const SCHEMA_INTERVALS: &str = "CREATE TABLE IF NOT EXISTS intervals (
    id INTEGER NOT NULL PRIMARY KEY,
    day TEXT NOT NULL,
    start_ts REAL NOT NULL,
    end_ts REAL,
    kind TEXT NOT NULL CHECK(kind IN ('active','pause'))
)";

/// Append a new open interval. Business rules (closing the previous open
/// interval first) are the tracker's job, not the store's.
const INSERT_INTERVAL: &str = "INSERT INTO intervals (day, start_ts, kind) VALUES (?1, ?2, ?3)";

/// Close every open interval at the given timestamp (self-healing).
const CLOSE_OPEN_INTERVALS: &str = "UPDATE intervals SET end_ts = ?1 WHERE end_ts IS NULL";

/// Kind and day of the most recent open interval, if any.
const SELECT_OPEN_KIND: &str = "SELECT kind FROM intervals WHERE end_ts IS NULL ORDER BY id DESC LIMIT 1";
const SELECT_OPEN_DAY: &str = "SELECT day FROM intervals WHERE end_ts IS NULL ORDER BY id DESC LIMIT 1";

/// Number of open intervals; anything above one means a past crash left
/// the log inconsistent and the next close-all will reconcile it.
const COUNT_OPEN_INTERVALS: &str = "SELECT COUNT(*) FROM intervals WHERE end_ts IS NULL";

/// Active seconds per day since a given date, newest day first. An open
/// interval contributes `?1 - start_ts`, so "now" must be bound first.
const SELECT_DAILY_TOTALS: &str = "
    SELECT day,
           SUM(CASE WHEN kind = 'active' THEN (COALESCE(end_ts, ?1) - start_ts) ELSE 0 END) AS active_sec
    FROM intervals
    WHERE day >= ?2
    GROUP BY day
    ORDER BY day DESC";

/// Active and pause seconds per day since a given date, newest day first.
const SELECT_DAILY_BREAKDOWN: &str = "
    SELECT day,
           SUM(CASE WHEN kind = 'active' THEN (COALESCE(end_ts, ?1) - start_ts) ELSE 0 END) AS active_sec,
           SUM(CASE WHEN kind = 'pause'  THEN (COALESCE(end_ts, ?1) - start_ts) ELSE 0 END) AS pause_sec
    FROM intervals
    WHERE day >= ?2
    GROUP BY day
    ORDER BY day DESC";

const SELECT_DAY_INTERVALS: &str = "SELECT id, day, start_ts, end_ts, kind FROM intervals WHERE day = ?1 ORDER BY id";

/// Per-day active and pause totals, as returned by [`Intervals::daily_breakdown`].
#[derive(Debug, Clone, PartialEq)]
pub struct DayTotals {
    pub day: NaiveDate,
    pub active_secs: f64,
    pub pause_secs: f64,
}

/// Store for tracked time intervals.
///
/// The connection is wrapped in an `Arc<Mutex<>>` so the watch ticker and
/// session-event callbacks can share one handle; cross-process coordination
/// relies on SQLite's own locking with the bounded busy timeout configured
/// in [`Db`].
pub struct Intervals {
    pub conn: Arc<Mutex<Connection>>,
}

impl Intervals {
    /// Opens the store at its configured location and ensures the schema
    /// exists. Safe to call on every connection open.
    pub fn new() -> Result<Intervals> {
        Self::with_db(Db::new()?)
    }

    /// Opens the store at an explicit path, for tests and dashboards that
    /// point at a non-default file.
    pub fn open(path: &Path) -> Result<Intervals> {
        Self::with_db(Db::open(path)?)
    }

    fn with_db(db: Db) -> Result<Intervals> {
        db.conn.execute(SCHEMA_INTERVALS, [])?;

        Ok(Intervals {
            conn: Arc::new(Mutex::new(db.conn)),
        })
    }

    /// Appends a new open interval for `day` starting at `start_ts`.
    ///
    /// Does not check for an existing open interval; the tracker closes
    /// the previous one first (or uses [`Intervals::transition`]).
    pub fn insert(&self, day: NaiveDate, start_ts: f64, kind: IntervalKind) -> Result<()> {
        let conn = self.conn.lock();
        conn.execute(INSERT_INTERVAL, params![day.format("%Y-%m-%d").to_string(), start_ts, kind])?;
        Ok(())
    }

    /// Closes every open interval at `now_ts`.
    pub fn close_open(&self, now_ts: f64) -> Result<()> {
        let conn = self.conn.lock();
        conn.execute(CLOSE_OPEN_INTERVALS, params![now_ts])?;
        Ok(())
    }

    /// Closes every open interval at `now_ts` and opens a new one, as a
    /// single transaction so a concurrent reader never observes the torn
    /// state between the two statements.
    pub fn transition(&self, now_ts: f64, day: NaiveDate, kind: IntervalKind) -> Result<()> {
        let mut conn = self.conn.lock();
        let tx = conn.transaction()?;
        tx.execute(CLOSE_OPEN_INTERVALS, params![now_ts])?;
        tx.execute(INSERT_INTERVAL, params![day.format("%Y-%m-%d").to_string(), now_ts, kind])?;
        tx.commit()?;
        Ok(())
    }

    /// Kind of the open interval, or `None` when nothing is open.
    pub fn current_mode(&self) -> Result<Option<IntervalKind>> {
        let conn = self.conn.lock();
        let kind = conn.query_row(SELECT_OPEN_KIND, [], |row| row.get::<_, IntervalKind>(0)).optional()?;
        Ok(kind)
    }

    /// Day of the open interval, or `None` when nothing is open.
    pub fn current_day(&self) -> Result<Option<NaiveDate>> {
        let conn = self.conn.lock();
        let day = conn
            .query_row(SELECT_OPEN_DAY, [], |row| row.get::<_, String>(0))
            .optional()?
            .map(|s| NaiveDate::parse_from_str(&s, "%Y-%m-%d"))
            .transpose()
            .map_err(|e| crate::libs::error::AppError::InvalidState(format!("unparseable day in open interval: {}", e)))?;
        Ok(day)
    }

    /// Number of currently open intervals. Used by the tracker to spot
    /// (and log) an inconsistent log before reconciling it.
    pub fn open_count(&self) -> Result<i64> {
        let conn = self.conn.lock();
        let count = conn.query_row(COUNT_OPEN_INTERVALS, [], |row| row.get(0))?;
        Ok(count)
    }

    /// Active seconds per day for every day with rows since `since`,
    /// newest day first. An open interval counts up to `now_ts`.
    pub fn daily_totals(&self, since: NaiveDate, now_ts: f64) -> Result<Vec<(NaiveDate, f64)>> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare(SELECT_DAILY_TOTALS)?;
        let rows = stmt.query_map(params![now_ts, since.format("%Y-%m-%d").to_string()], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, f64>(1)?))
        })?;

        let mut totals = Vec::new();
        for row in rows {
            let (day_str, active_secs) = row?;
            let day = NaiveDate::parse_from_str(&day_str, "%Y-%m-%d")
                .map_err(|e| crate::libs::error::AppError::InvalidState(format!("unparseable day '{}': {}", day_str, e)))?;
            totals.push((day, active_secs));
        }

        Ok(totals)
    }

    /// Active and pause seconds per day since `since`, newest day first.
    pub fn daily_breakdown(&self, since: NaiveDate, now_ts: f64) -> Result<Vec<DayTotals>> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare(SELECT_DAILY_BREAKDOWN)?;
        let rows = stmt.query_map(params![now_ts, since.format("%Y-%m-%d").to_string()], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, f64>(1)?, row.get::<_, f64>(2)?))
        })?;

        let mut totals = Vec::new();
        for row in rows {
            let (day_str, active_secs, pause_secs) = row?;
            let day = NaiveDate::parse_from_str(&day_str, "%Y-%m-%d")
                .map_err(|e| crate::libs::error::AppError::InvalidState(format!("unparseable day '{}': {}", day_str, e)))?;
            totals.push(DayTotals { day, active_secs, pause_secs });
        }

        Ok(totals)
    }

    /// All intervals recorded for `day`, oldest first.
    pub fn fetch_day(&self, day: NaiveDate) -> Result<Vec<Interval>> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare(SELECT_DAY_INTERVALS)?;
        let interval_iter = stmt.query_map(params![day.format("%Y-%m-%d").to_string()], |row| {
            let day_str: String = row.get(1)?;
            Ok((row.get::<_, i64>(0)?, day_str, row.get::<_, f64>(2)?, row.get::<_, Option<f64>>(3)?, row.get::<_, IntervalKind>(4)?))
        })?;

        let mut intervals = Vec::new();
        for interval in interval_iter {
            let (id, day_str, start_ts, end_ts, kind) = interval?;
            let day = NaiveDate::parse_from_str(&day_str, "%Y-%m-%d")
                .map_err(|e| crate::libs::error::AppError::InvalidState(format!("unparseable day '{}': {}", day_str, e)))?;
            intervals.push(Interval { id, day, start_ts, end_ts, kind });
        }

        Ok(intervals)
    }
}
