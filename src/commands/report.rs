//! Daily report command.
//!
//! Prints one row per recorded day over the trailing N days, newest
//! first. Read-only: it never opens or closes intervals, so it is safe
//! to run while a watcher process owns the tracking.

use crate::db::intervals::Intervals;
use crate::libs::clock::SystemClock;
use crate::libs::messages::Message;
use crate::libs::summary::Summary;
use crate::libs::view::View;
use crate::msg_print;
use anyhow::Result;
use chrono::Local;
use clap::Args;

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Number of trailing days to include
    #[arg(long, default_value_t = 30)]
    days: u64,
}

pub fn cmd(report_args: ReportArgs) -> Result<()> {
    let intervals = Intervals::new()?;
    let clock = SystemClock;
    let rows = Summary::new(&intervals, &clock).report_rows(report_args.days)?;

    if rows.is_empty() {
        msg_print!(Message::NoRecordsFound);
        return Ok(());
    }

    let date = Local::now().format("%B %-d, %Y").to_string();
    msg_print!(Message::ReportHeader(date), true);
    View::report(&rows);

    Ok(())
}
