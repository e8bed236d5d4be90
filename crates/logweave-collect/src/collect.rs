//! The collector — probes the static source table, runs the matching
//! parser per source, and assembles the grouped, ID-assigned timeline.
//!
//! Source dispatch is an explicit enum over a const table, so adding a
//! source means adding a variant and the compiler points at every match
//! that needs updating. A missing source is a warning and an empty lane; an
//! I/O error on a file that *was* found is fatal for the whole run.

use crate::{bus, dialect};
use logweave_core::{CollectPolicy, Event, RunStats, SourceGroup, TimeWindow};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CollectError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Which parser handles a source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    SaltEvents,
    SaltMaster,
    SaltApi,
    JavaWebUi,
}

/// One entry of the static source table.
#[derive(Debug)]
pub struct SourceSpec {
    pub name: &'static str,
    pub kind: SourceKind,
    pub group: SourceGroup,
    /// Candidate paths relative to the logs root, probed in order; the
    /// first existing file wins.
    pub candidates: &'static [&'static str],
}

/// Logical sources and where their files live inside a logs tree or an
/// unpacked supportconfig.
pub const SOURCES: [SourceSpec; 4] = [
    SourceSpec {
        name: "salt-events",
        kind: SourceKind::SaltEvents,
        group: SourceGroup::EventBus,
        candidates: &[
            "salt-events.txt",
            "salt-event.log",
            "var/log/rhn/salt-event.log",
            "spacewalk-debug/salt-logs/salt/salt-event.log",
        ],
    },
    SourceSpec {
        name: "salt-master",
        kind: SourceKind::SaltMaster,
        group: SourceGroup::Master,
        candidates: &[
            "master",
            "var/log/salt/master",
            "spacewalk-debug/salt-logs/salt/master",
            "plugin-saltlogfiles.txt",
        ],
    },
    SourceSpec {
        name: "salt-api",
        kind: SourceKind::SaltApi,
        group: SourceGroup::Api,
        candidates: &[
            "api",
            "var/log/salt/api",
            "spacewalk-debug/salt-logs/salt/api",
            "plugin-saltlogfiles.txt",
        ],
    },
    SourceSpec {
        name: "web-ui",
        kind: SourceKind::JavaWebUi,
        group: SourceGroup::WebUi,
        candidates: &[
            "rhn_web_ui.log",
            "var/log/rhn/rhn_web_ui.log",
            "spacewalk-debug/rhn-logs/rhn/rhn_web_ui.log",
        ],
    },
];

/// One timeline lane and its accepted events.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupEvents {
    pub group: SourceGroup,
    pub events: Vec<Event>,
}

/// All lanes in fixed output order, including the reserved empty ones.
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
    pub groups: Vec<GroupEvents>,
}

impl Timeline {
    fn empty() -> Self {
        Self {
            groups: SourceGroup::ALL
                .iter()
                .map(|&group| GroupEvents {
                    group,
                    events: Vec::new(),
                })
                .collect(),
        }
    }

    /// The lane for `group`. Lanes are laid out in [`SourceGroup::ALL`]
    /// order, so the group ID doubles as the index.
    pub fn group(&self, group: SourceGroup) -> &GroupEvents {
        &self.groups[group.id() as usize]
    }

    fn group_mut(&mut self, group: SourceGroup) -> &mut GroupEvents {
        &mut self.groups[group.id() as usize]
    }

    pub fn total_events(&self) -> usize {
        self.groups.iter().map(|g| g.events.len()).sum()
    }
}

/// Where a source's file was (or was not) found, for the console report.
#[derive(Debug, Clone)]
pub struct SourceReport {
    pub name: &'static str,
    pub group: SourceGroup,
    pub path: Option<PathBuf>,
    pub candidates: &'static [&'static str],
}

/// Everything one collection pass produces.
#[derive(Debug)]
pub struct CollectOutcome {
    pub timeline: Timeline,
    pub stats: RunStats,
    pub reports: Vec<SourceReport>,
}

/// Probe every source under `logs_root`, parse what exists, and assemble
/// the final timeline with sequence IDs assigned in group order.
pub fn collect(
    logs_root: &Path,
    window: &TimeWindow,
    policy: &CollectPolicy,
) -> Result<CollectOutcome, CollectError> {
    let mut timeline = Timeline::empty();
    let mut stats = RunStats::default();
    let mut reports = Vec::with_capacity(SOURCES.len());

    for spec in &SOURCES {
        let found = spec
            .candidates
            .iter()
            .map(|candidate| logs_root.join(candidate))
            .find(|path| path.is_file());

        let Some(path) = found else {
            tracing::warn!(
                source = spec.name,
                group = spec.group.display_name(),
                "no log file found at any candidate path"
            );
            reports.push(SourceReport {
                name: spec.name,
                group: spec.group,
                path: None,
                candidates: spec.candidates,
            });
            continue;
        };

        let text = fs::read_to_string(&path).map_err(|source| CollectError::Read {
            path: path.clone(),
            source,
        })?;

        let events = match spec.kind {
            SourceKind::SaltEvents => bus::parse_bus_log(&text, window, policy, &mut stats),
            SourceKind::SaltMaster => dialect::parse_master_log(&text, window, policy, &mut stats),
            SourceKind::SaltApi => dialect::parse_api_log(&text, window, policy, &mut stats),
            SourceKind::JavaWebUi => dialect::parse_web_ui_log(&text, window, policy, &mut stats),
        };
        tracing::debug!(
            source = spec.name,
            path = %path.display(),
            events = events.len(),
            "parsed source"
        );

        timeline.group_mut(spec.group).events = events;
        reports.push(SourceReport {
            name: spec.name,
            group: spec.group,
            path: Some(path),
            candidates: spec.candidates,
        });
    }

    assign_sequence_ids(&mut timeline);

    Ok(CollectOutcome {
        timeline,
        stats,
        reports,
    })
}

/// Number events 0..N-1 over the groups concatenated in fixed order. This
/// runs once, after all sources are parsed, so IDs stay reproducible if
/// per-source parsing is ever parallelised.
fn assign_sequence_ids(timeline: &mut Timeline) {
    let mut next = 0u64;
    for group in &mut timeline.groups {
        for event in &mut group.events {
            event.sequence_id = Some(next);
            next += 1;
        }
    }
}
