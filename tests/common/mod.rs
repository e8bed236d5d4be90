//! Shared test utilities for logweave integration harnesses.
//!
//! Import everything via `mod common; use common::*;` at the top of each
//! harness file.

pub mod builders;
pub mod fixtures;

pub use builders::*;
pub use fixtures::*;
