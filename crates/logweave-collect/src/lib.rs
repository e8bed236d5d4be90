//! Log collection for logweave.
//!
//! This crate turns a directory of raw log files into a grouped, filtered,
//! ID-assigned [`Timeline`]. The pipeline is:
//!
//! 1. [`collect`] probes a static table of candidate paths per source,
//! 2. [`split`] cuts each found file into multi-line logical records,
//! 3. [`bus`] and [`dialect`] parse, classify, and filter those records
//!    into [`logweave_core::Event`]s.

pub mod bus;
pub mod collect;
pub mod dialect;
pub mod split;

pub use collect::{
    collect, CollectError, CollectOutcome, GroupEvents, SourceKind, SourceReport, SourceSpec,
    Timeline, SOURCES,
};
pub use split::{split_records, Record, RecordScanner, SplitPolicy};
