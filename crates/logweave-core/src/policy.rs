//! Run-scoped collection policies.
//!
//! Two knobs that the source history of the upstream tool left ambiguous are
//! made explicit and configurable here: the severity filter applied to the
//! master/api log dialects, and the set of bus categories excluded from the
//! output entirely.

use crate::types::BusCategory;

/// Severity filter for the master and api log dialects. Both variants are
/// attested upstream; `DropNoise` is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeverityPolicy {
    /// Drop DEBUG and WARNING records, keep ERROR/INFO and everything else.
    #[default]
    DropNoise,
    /// Drop any record whose level contains "ERROR", keep the rest.
    DropErrors,
}

impl SeverityPolicy {
    /// Whether a record with this level survives the filter.
    pub fn keeps_level(&self, level: &str) -> bool {
        match self {
            SeverityPolicy::DropNoise => level != "DEBUG" && level != "WARNING",
            SeverityPolicy::DropErrors => !level.contains("ERROR"),
        }
    }
}

/// All run-scoped parsing knobs, built once from the CLI and passed by
/// reference through collection.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectPolicy {
    pub severity: SeverityPolicy,
    /// Bus events classified into one of these categories are dropped before
    /// they are counted.
    pub excluded_categories: Vec<BusCategory>,
}

impl Default for CollectPolicy {
    fn default() -> Self {
        Self {
            severity: SeverityPolicy::default(),
            excluded_categories: vec![BusCategory::MinionEvent],
        }
    }
}

impl CollectPolicy {
    pub fn excludes(&self, category: Option<BusCategory>) -> bool {
        category.is_some_and(|c| self.excluded_categories.contains(&c))
    }
}
