//! Display implementation for tempo application messages.
//!
//! All user-facing text lives here, so a message never renders two
//! different ways in two places and the wording stays greppable.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),

            // === REPORT MESSAGES ===
            Message::ReportHeader(date) => format!("Report for {}", date),
            Message::WeekHeader => "Last 7 days (active vs pause)".to_string(),
            Message::NoRecordsFound => "No records found.".to_string(),

            // === STATUS MESSAGES ===
            Message::StatusMode(mode) => format!("Status: {}", mode),
            Message::BreakReminder => "🙂 Take a short break and relax.".to_string(),

            // === MODE MESSAGES ===
            Message::TrackingPaused => "Tracking paused".to_string(),
            Message::TrackingResumed => "Tracking resumed".to_string(),

            // === WATCHER MESSAGES ===
            Message::WatcherStarted(interval) => format!("Watcher started (rollover check every {}s)", interval),
            Message::WatcherReceivedSigterm => "Received SIGTERM, shutting down...".to_string(),
            Message::WatcherReceivedSigint => "Received SIGINT, shutting down...".to_string(),
            Message::WatcherReceivedCtrlC => "Received Ctrl+C, shutting down...".to_string(),
            Message::WatcherCtrlCListenFailed(e) => format!("Failed to listen for Ctrl+C: {}", e),
            Message::WatcherShuttingDown => "Watcher shutting down".to_string(),
            Message::WatcherTickFailed(e) => format!("Tick failed, will retry on next poll: {}", e),
            Message::WatcherClosedOpenInterval => "Closed open interval".to_string(),
        };

        write!(f, "{}", text)
    }
}
