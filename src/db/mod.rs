//! Database layer for the tempo application.
//!
//! A thin persistence layer over SQLite: [`db`] manages connections and
//! the busy timeout, [`intervals`] owns the interval table schema and the
//! raw read/write primitives the tracker and aggregator build on.

/// Core database connection and initialization module.
pub mod db;

/// The append-only interval store, the tracker's single source of truth.
pub mod intervals;
