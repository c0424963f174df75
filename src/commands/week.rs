//! Weekly breakdown command, the console version of the dashboard table.

use crate::db::intervals::Intervals;
use crate::libs::clock::SystemClock;
use crate::libs::messages::Message;
use crate::libs::summary::Summary;
use crate::libs::tracker::Tracker;
use crate::libs::view::View;
use crate::msg_print;
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let intervals = Intervals::new()?;
    let clock = SystemClock;

    // The open interval contributes live time to today's bucket, so make
    // sure it is attributed to the correct day first.
    Tracker::new(&intervals, &clock).ensure_rollover()?;

    let rows = Summary::new(&intervals, &clock).weekly_breakdown()?;
    if rows.is_empty() {
        msg_print!(Message::NoRecordsFound);
        return Ok(());
    }

    msg_print!(Message::WeekHeader);
    View::week(&rows);

    Ok(())
}
