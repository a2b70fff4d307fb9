//! Access-Log Statistics Pipeline
//!
//! Reads HTTP access-log lines one at a time and keeps two running totals:
//! bytes served and a per-status histogram over a fixed set of codes.
//!
//! Every N consumed lines (10 by default, matched or not) a snapshot of the
//! totals is written to the output. One more snapshot is always written when
//! the input ends or the run is interrupted. Lines that do not match the
//! expected entry are dropped without affecting the totals. They still count
//! toward the cadence.
//!
//! The overall data processing architecture is:
//!
//! stdin
//! spawn_reader
//! Input
//! extract_record
//! LogRecord
//! AggregateState
//! StatsSnapshot
//! write_snapshot
//!

mod aggregation;
mod constants;
mod error;
mod histogram;
mod input;
mod parse;
mod render;
mod run;
mod types;

#[cfg(test)]
mod tests;

pub use aggregation::{AggregateState, StatsSnapshot};
pub use constants::REPORT_EVERY;
pub use error::StatsError;
pub use histogram::StatusHistogram;
pub use input::{Input, input_channel, install_interrupt_handler, spawn_reader};
pub use parse::extract_record;
pub use render::{SnapshotFormat, render_json, render_text, write_snapshot};
pub use run::{StatsOptions, StatsSummary, run_stats, run_stdin};
pub use types::{LogRecord, TrackedStatus};
