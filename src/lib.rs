//! Careboard: clinical risk dashboard core.
//!
//! An in-memory record store of patients, alerts, and published model
//! snapshots, with pure filtering over view criteria, a small alert
//! lifecycle, and assembled payloads (overview, roster cards, queue
//! cards, analytics series) ready for any presentation layer. The
//! [`Dashboard`] state object ties store and criteria together; the
//! bundled binary renders it in a terminal.

pub mod alerts;
pub mod analytics;
pub mod config;
pub mod dashboard;
pub mod models;
pub mod notify;
pub mod overview;
pub mod roster;
pub mod store;

pub use dashboard::Dashboard;
pub use store::{DataError, RecordStore};
