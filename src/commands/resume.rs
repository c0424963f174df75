//! Resume command: switch tracking back to active mode.

use crate::db::intervals::Intervals;
use crate::libs::clock::SystemClock;
use crate::libs::messages::Message;
use crate::libs::tracker::{SessionListener, Tracker};
use crate::msg_success;
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let intervals = Intervals::new()?;
    let clock = SystemClock;

    Tracker::new(&intervals, &clock).on_session_resumed()?;

    msg_success!(Message::TrackingResumed);
    Ok(())
}
