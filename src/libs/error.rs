//! Unified application error type.
//!
//! Core modules (db, tracker, summary) return `AppError` and propagate with
//! `?`; commands convert to `anyhow::Error` at the boundary. Storage failures
//! of any flavor (open, read, write, lock timeout) collapse into
//! `StorageUnavailable` so that polling callers can treat them uniformly as
//! transient and retry on the next tick.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// The backing store could not be opened, read or written.
    ///
    /// Covers disk and permission failures, SQLite busy-timeout expiry and
    /// corrupt database files.
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(#[from] rusqlite::Error),

    /// Filesystem failure while preparing the data directory.
    #[error("Storage unavailable: {0}")]
    StorageIo(#[from] io::Error),

    /// The store held a state the tracker never writes.
    ///
    /// More than one open interval is the only known case; the close-all
    /// query reconciles it, so this is reported rather than fatal.
    #[error("Invalid tracker state: {0}")]
    InvalidState(String),

    /// Configuration file unreadable or unparseable.
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
