//! Core types for logweave-core.
//!
//! This crate defines the data structures shared across the pipeline: the
//! normalised [`Event`], its [`SourceGroup`] lane and [`BusCategory`]
//! classification, the inclusive [`TimeWindow`] filter, the [`RunStats`]
//! accumulator, and the run-scoped [`CollectPolicy`].

pub mod policy;
pub mod stats;
pub mod types;
pub mod window;

pub use policy::{CollectPolicy, SeverityPolicy};
pub use stats::RunStats;
pub use types::{BusCategory, Event, SourceGroup};
pub use window::{TimeWindow, WindowError};
