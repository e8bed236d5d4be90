//! The normalised [`Event`] and its classification types.
//!
//! Every accepted log record, regardless of source, becomes one `Event`.
//! Events are constructed once during parsing and never mutated afterwards,
//! except for the late `sequence_id` assignment the collector performs after
//! all groups are in place.

use chrono::NaiveDateTime;

/// A normalised event produced by one of the per-source parsers.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    /// Parsed timestamp. Required — records without a parseable timestamp
    /// are dropped, never emitted with a placeholder.
    pub timestamp: NaiveDateTime,
    /// Which timeline lane the event belongs to.
    pub group: SourceGroup,
    /// Short inline text: the bus tag, or the severity level.
    pub label: String,
    /// Full reconstructed record, including all continuation lines. For bus
    /// events this is the pretty-printed JSON payload; for log dialects it
    /// is `"{component-or-level} - {content}"`.
    pub raw: String,
    /// Bus-tag-derived classification. Always `None` for log-dialect events
    /// and for bus tags that match no rule.
    pub category: Option<BusCategory>,
    /// Rendering hint, fixed per source group.
    pub color: &'static str,
    /// Assigned by the collector after all groups are assembled: contiguous
    /// from 0 in group-concatenation order. `None` until then.
    pub sequence_id: Option<u64>,
}

impl Event {
    /// Construct an event for `group` with the group's fixed colour and no
    /// sequence ID yet.
    pub fn new(
        timestamp: NaiveDateTime,
        group: SourceGroup,
        label: impl Into<String>,
        raw: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            group,
            label: label.into(),
            raw: raw.into(),
            category: None,
            color: group.color(),
            sequence_id: None,
        }
    }

    pub fn with_category(mut self, category: Option<BusCategory>) -> Self {
        self.category = category;
        self
    }
}

/// A fixed timeline lane. `Taskomatic` and `Database` are reserved lanes
/// with no parser yet; they are always emitted as empty groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceGroup {
    EventBus,
    Master,
    Api,
    WebUi,
    Taskomatic,
    Database,
}

impl SourceGroup {
    /// All groups in their fixed output order. Sequence IDs are assigned in
    /// this order, group by group.
    pub const ALL: [SourceGroup; 6] = [
        SourceGroup::EventBus,
        SourceGroup::Master,
        SourceGroup::Api,
        SourceGroup::WebUi,
        SourceGroup::Taskomatic,
        SourceGroup::Database,
    ];

    /// Stable numeric lane ID used by the renderer.
    pub fn id(&self) -> u64 {
        match self {
            SourceGroup::EventBus => 0,
            SourceGroup::Master => 1,
            SourceGroup::Api => 2,
            SourceGroup::WebUi => 3,
            SourceGroup::Taskomatic => 4,
            SourceGroup::Database => 5,
        }
    }

    /// Human-readable lane title shown in the rendered timeline.
    pub fn display_name(&self) -> &'static str {
        match self {
            SourceGroup::EventBus => "Salt Event Bus",
            SourceGroup::Master => "Salt Master",
            SourceGroup::Api => "Salt API",
            SourceGroup::WebUi => "Java Web UI",
            SourceGroup::Taskomatic => "Java Taskomatic",
            SourceGroup::Database => "PostgreSQL",
        }
    }

    /// Fixed rendering colour per lane.
    pub fn color(&self) -> &'static str {
        match self {
            SourceGroup::EventBus => "green",
            SourceGroup::Master => "blue",
            SourceGroup::Api => "red",
            SourceGroup::WebUi => "orange",
            SourceGroup::Taskomatic | SourceGroup::Database => "gray",
        }
    }
}

impl std::fmt::Display for SourceGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Semantic subtype of an event-bus event, derived from the tag prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BusCategory {
    Batch,
    Job,
    JobReturn,
    Auth,
    MinionEvent,
    MinionRefresh,
}

impl BusCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            BusCategory::Batch => "batch",
            BusCategory::Job => "job",
            BusCategory::JobReturn => "job_return",
            BusCategory::Auth => "auth",
            BusCategory::MinionEvent => "minion_event",
            BusCategory::MinionRefresh => "minion_refresh",
        }
    }
}

impl std::fmt::Display for BusCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
