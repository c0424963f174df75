//! Pause command: switch tracking to pause mode.
//!
//! The console analog of a session-lock notification; it drives the same
//! listener interface the platform glue does.

use crate::db::intervals::Intervals;
use crate::libs::clock::SystemClock;
use crate::libs::messages::Message;
use crate::libs::tracker::{SessionListener, Tracker};
use crate::msg_success;
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let intervals = Intervals::new()?;
    let clock = SystemClock;

    Tracker::new(&intervals, &clock).on_session_suspended()?;

    msg_success!(Message::TrackingPaused);
    Ok(())
}
