//! The interval state machine.
//!
//! Decides, given the persisted state and the wall clock, when to close
//! the open interval and when to start a new one. Guarantees the single
//! open interval invariant across mode switches and day rollovers.
//!
//! Rollover is pulled, not pushed: there is no background task watching
//! midnight. Every caller that spans time (the watch ticker, mode
//! toggles, the status view) calls [`Tracker::ensure_rollover`] first,
//! which makes the machine safe to re-enter fresh on every process start.

use crate::db::intervals::Intervals;
use crate::libs::clock::Clock;
use crate::libs::error::Result;
use crate::libs::interval::IntervalKind;
use tracing::{info, warn};

/// The state machine over the interval store.
///
/// Holds the store and a clock as injected dependencies; it keeps no
/// interval state of its own beyond what it reads back from the store,
/// so several trackers (or processes) can point at the same file.
pub struct Tracker<'a, C: Clock> {
    intervals: &'a Intervals,
    clock: &'a C,
}

impl<'a, C: Clock> Tracker<'a, C> {
    pub fn new(intervals: &'a Intervals, clock: &'a C) -> Self {
        Tracker { intervals, clock }
    }

    /// Splits the open interval at the day seam, if one was left open
    /// across midnight.
    ///
    /// - No open interval: starts an `active` interval for today
    ///   (first-run bootstrap; the tracker defaults to active when it
    ///   has no history).
    /// - Open interval from a previous day: closes it now and opens a
    ///   new one for today with the same kind. Rollover preserves mode,
    ///   it only splits the span so every row stays within one day.
    /// - Open interval for today: no-op.
    pub fn ensure_rollover(&self) -> Result<()> {
        self.heal_open_intervals()?;

        let today = self.clock.today();
        match (self.intervals.current_mode()?, self.intervals.current_day()?) {
            (None, _) => {
                info!(day = %today, "no open interval; starting default active interval");
                self.intervals.insert(today, self.clock.now(), IntervalKind::Active)?;
            }
            (Some(kind), Some(day)) if day != today => {
                info!(from = %day, to = %today, kind = %kind, "day rollover; splitting open interval");
                self.intervals.transition(self.clock.now(), today, kind)?;
            }
            _ => {}
        }

        Ok(())
    }

    /// Switches the open interval to `desired`, if it is not already.
    ///
    /// Idempotent: repeated calls with the same desired mode are no-ops,
    /// so a chatty platform listener cannot fragment the history into
    /// many tiny intervals.
    pub fn ensure_mode(&self, desired: IntervalKind) -> Result<()> {
        let mode = self.intervals.current_mode()?;
        if mode == Some(desired) {
            return Ok(());
        }

        info!(from = ?mode, to = %desired, "switching mode");
        self.intervals.transition(self.clock.now(), self.clock.today(), desired)?;
        Ok(())
    }

    // More than one open row means a past crash interrupted a transition.
    // The close-all update inside the next transition reconciles them, so
    // this only reports the inconsistency.
    fn heal_open_intervals(&self) -> Result<()> {
        let open = self.intervals.open_count()?;
        if open > 1 {
            warn!(open, "more than one open interval found; next transition will reconcile them");
        }
        Ok(())
    }
}

/// The interface platform glue drives.
///
/// OS session notifications (lock/unlock, suspend/resume) arrive on the
/// platform's own event delivery and call these methods synchronously.
/// Each call re-checks rollover first so an event that arrives right
/// after midnight lands on the correct day.
pub trait SessionListener {
    fn on_session_suspended(&self) -> Result<()>;
    fn on_session_resumed(&self) -> Result<()>;
}

impl<C: Clock> SessionListener for Tracker<'_, C> {
    fn on_session_suspended(&self) -> Result<()> {
        self.ensure_rollover()?;
        self.ensure_mode(IntervalKind::Pause)
    }

    fn on_session_resumed(&self) -> Result<()> {
        self.ensure_rollover()?;
        self.ensure_mode(IntervalKind::Active)
    }
}
