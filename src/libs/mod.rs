//! Core library modules for the tempo application.
//!
//! Holds the interval state machine ([`tracker`]), the aggregation layer
//! ([`summary`]) and the ambient pieces they depend on: clock injection,
//! configuration, data paths, formatting, messaging and console views.

pub mod clock;
pub mod config;
pub mod data_storage;
pub mod error;
pub mod formatter;
pub mod interval;
pub mod messages;
pub mod summary;
pub mod tracker;
pub mod view;
