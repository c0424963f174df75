//! Foreground tracking loop.
//!
//! Opens the store, switches to active mode and then re-checks rollover
//! on a fixed interval until a shutdown signal arrives. A storage failure
//! on one tick is logged and retried on the next poll; a single failed
//! tick must never take the tracking process down. On shutdown the open
//! interval is closed so no phantom time accumulates while the watcher
//! is not running.

use crate::db::intervals::Intervals;
use crate::libs::clock::{Clock, SystemClock};
use crate::libs::config::Config;
use crate::libs::interval::IntervalKind;
use crate::libs::messages::Message;
use crate::libs::tracker::Tracker;
use crate::{msg_error, msg_info, msg_print, msg_warning};
use anyhow::Result;
use std::time::Duration;

pub async fn cmd() -> Result<()> {
    let poll_interval = Config::read()?.tracker().poll_interval;
    let intervals = Intervals::new()?;
    let clock = SystemClock;
    let tracker = Tracker::new(&intervals, &clock);

    tracker.ensure_rollover()?;
    tracker.ensure_mode(IntervalKind::Active)?;
    msg_print!(Message::WatcherStarted(poll_interval));

    let mut ticker = tokio::time::interval(Duration::from_secs(poll_interval));
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
    // The first tick of a tokio interval fires immediately; consume it so
    // the loop starts with a full poll period.
    ticker.tick().await;

    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if let Err(e) = tracker.ensure_rollover() {
                    msg_warning!(Message::WatcherTickFailed(e.to_string()));
                }
            }
            _ = &mut shutdown => {
                msg_info!(Message::WatcherShuttingDown);
                break;
            }
        }
    }

    intervals.close_open(clock.now())?;
    msg_info!(Message::WatcherClosedOpenInterval);

    Ok(())
}

/// Resolves when the process is asked to stop.
#[cfg(unix)]
async fn shutdown_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigterm = match signal(SignalKind::terminate()) {
        Ok(s) => s,
        Err(e) => {
            msg_error!(Message::WatcherCtrlCListenFailed(e.to_string()));
            return std::future::pending::<()>().await;
        }
    };
    let mut sigint = match signal(SignalKind::interrupt()) {
        Ok(s) => s,
        Err(e) => {
            msg_error!(Message::WatcherCtrlCListenFailed(e.to_string()));
            return std::future::pending::<()>().await;
        }
    };

    tokio::select! {
        _ = sigterm.recv() => {
            msg_info!(Message::WatcherReceivedSigterm);
        }
        _ = sigint.recv() => {
            msg_info!(Message::WatcherReceivedSigint);
        }
    }
}

#[cfg(not(unix))]
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => {
            msg_info!(Message::WatcherReceivedCtrlC);
        }
        Err(e) => {
            msg_error!(Message::WatcherCtrlCListenFailed(e.to_string()));
            std::future::pending::<()>().await;
        }
    }
}
