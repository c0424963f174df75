//! Status command: current mode and today's active total.

use crate::db::intervals::Intervals;
use crate::libs::clock::SystemClock;
use crate::libs::formatter::format_seconds;
use crate::libs::messages::Message;
use crate::libs::summary::Summary;
use crate::libs::tracker::Tracker;
use crate::msg_print;
use anyhow::Result;

/// Active time past which the status output nudges toward a break.
const BREAK_REMINDER_SECS: f64 = 7.0 * 3600.0;

pub fn cmd() -> Result<()> {
    let intervals = Intervals::new()?;
    let clock = SystemClock;

    Tracker::new(&intervals, &clock).ensure_rollover()?;

    let mode = intervals.current_mode()?.map_or_else(|| "none".to_string(), |kind| kind.to_string());
    let active_secs = Summary::new(&intervals, &clock).active_seconds_today()?;

    println!("Active today: {}", format_seconds(active_secs));
    msg_print!(Message::StatusMode(mode));
    if active_secs > BREAK_REMINDER_SECS {
        msg_print!(Message::BreakReminder);
    }

    Ok(())
}
