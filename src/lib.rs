//! # Tempo - Session Time Tracker
//!
//! A command-line utility for tracking active and paused working time
//! and generating daily and weekly reports.
//!
//! ## Features
//!
//! - **Interval Tracking**: Contiguous active/pause spans persisted to SQLite
//! - **Day Rollover**: Open intervals are split at midnight so daily totals
//!   stay a simple per-day sum
//! - **Session Events**: Pause/resume driven by session lock and unlock
//! - **Reporting**: Daily totals and a weekly active/pause breakdown
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tempo::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
