//! Olympic-style medal tally scoring.
//!
//! The core is pure data transformation: per-event rank entries go in,
//! validated configurations, aggregated score maps, sortable standings and
//! query projections come out. The CLI and TUI in this crate are thin
//! consumers of that core.

pub mod competition;
pub mod config;
pub mod error;
pub mod output;
pub mod query;
pub mod ranking;
pub mod scoring;
pub mod tui;
