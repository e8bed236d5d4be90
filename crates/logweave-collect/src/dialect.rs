//! Timestamped log dialect parsers: salt-master, salt-api, and the Java
//! web UI log.
//!
//! All three share the `YYYY-MM-DD HH:MM:SS,mmm` header prefix and the
//! continuation-until-next-header record shape; they differ in the header
//! capture layout and in their severity filter:
//!
//! - **web UI**: single bracketed thread field, keeps only exact `ERROR`
//!   records, shifts timestamps back one hour (the log is written in local
//!   time one hour ahead of the other sources), and suppresses two known
//!   noisy messages.
//! - **master / api**: bracketed component plus bracketed level, filtered
//!   by the run's [`SeverityPolicy`], no timestamp shift.

use crate::split::{Record, RecordScanner, SplitPolicy};
use chrono::{Duration, NaiveDateTime};
use logweave_core::{CollectPolicy, Event, RunStats, SourceGroup, TimeWindow};
use regex::Regex;
use std::sync::LazyLock;

/// `timestamp [thread] LEVEL content` — the web UI header.
static WEB_UI_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}[.,]\d{3}) (\[.*\]) (\w+) (.*)$")
        .expect("static regex")
});

/// `timestamp [component][LEVEL ...][rest` — the salt master/api header.
static SALT_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}[.,]\d{3}) (\[.*\])\[(\w+).*\](\[.*\].*)$")
        .expect("static regex")
});

/// Messages the web UI log repeats so often they drown the timeline.
const WEB_UI_SUPPRESSED: [&str; 2] = [
    "LoginController - LOCAL AUTH FAILURE:",
    "common.DownloadFile - ",
];

/// The web UI log is written one hour ahead of the Salt logs; shift its
/// timestamps back so events line up across lanes.
const WEB_UI_OFFSET_HOURS: i64 = 1;

fn parse_header_timestamp(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S,%3f")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.3f"))
        .ok()
}

/// Header content plus all continuation lines, joined with `\n`.
fn with_continuations(head: &str, record: &Record<'_>) -> String {
    let mut content = head.to_string();
    for line in &record.lines[1..] {
        content.push('\n');
        content.push_str(line);
    }
    content
}

/// Parse the Java web UI log. Only exact-`ERROR` records survive.
pub fn parse_web_ui_log(
    text: &str,
    window: &TimeWindow,
    _policy: &CollectPolicy,
    stats: &mut RunStats,
) -> Vec<Event> {
    let lines: Vec<&str> = text.lines().collect();
    let mut events = Vec::new();

    for record in RecordScanner::new(&lines, SplitPolicy::NextHeader) {
        let Some(caps) = WEB_UI_HEADER.captures(record.lines[0]) else {
            tracing::warn!(line = record.lines[0], "dropping web UI record with unrecognised header");
            continue;
        };
        let level = caps.get(3).map_or("", |m| m.as_str());
        if level != "ERROR" {
            continue;
        }

        let Some(timestamp) = parse_header_timestamp(&caps[1]) else {
            tracing::warn!(stamp = &caps[1], "dropping web UI record with unparseable timestamp");
            continue;
        };
        let timestamp = timestamp - Duration::hours(WEB_UI_OFFSET_HOURS);

        if !window.contains(timestamp) {
            continue;
        }

        let content = with_continuations(&caps[4], &record);
        if WEB_UI_SUPPRESSED.iter().any(|s| content.contains(s)) {
            continue;
        }

        stats.record(timestamp);
        events.push(Event::new(
            timestamp,
            SourceGroup::WebUi,
            level,
            format!("{level} - {content}"),
        ));
    }

    events
}

/// Parse the salt-master log.
pub fn parse_master_log(
    text: &str,
    window: &TimeWindow,
    policy: &CollectPolicy,
    stats: &mut RunStats,
) -> Vec<Event> {
    parse_salt_dialect(text, SourceGroup::Master, window, policy, stats)
}

/// Parse the salt-api log.
pub fn parse_api_log(
    text: &str,
    window: &TimeWindow,
    policy: &CollectPolicy,
    stats: &mut RunStats,
) -> Vec<Event> {
    parse_salt_dialect(text, SourceGroup::Api, window, policy, stats)
}

fn parse_salt_dialect(
    text: &str,
    group: SourceGroup,
    window: &TimeWindow,
    policy: &CollectPolicy,
    stats: &mut RunStats,
) -> Vec<Event> {
    let lines: Vec<&str> = text.lines().collect();
    let mut events = Vec::new();

    for record in RecordScanner::new(&lines, SplitPolicy::NextHeader) {
        let Some(caps) = SALT_HEADER.captures(record.lines[0]) else {
            tracing::warn!(line = record.lines[0], "dropping salt log record with unrecognised header");
            continue;
        };
        let level = caps.get(3).map_or("", |m| m.as_str());
        if !policy.severity.keeps_level(level) {
            continue;
        }

        let Some(timestamp) = parse_header_timestamp(&caps[1]) else {
            tracing::warn!(stamp = &caps[1], "dropping salt log record with unparseable timestamp");
            continue;
        };
        if !window.contains(timestamp) {
            continue;
        }

        let component = &caps[2];
        let content = with_continuations(&caps[4], &record);
        stats.record(timestamp);
        events.push(Event::new(
            timestamp,
            group,
            level,
            format!("{component} - {content}"),
        ));
    }

    events
}
