//! Record splitting — turning a raw line sequence into logical records.
//!
//! A record may span several physical lines. Two continuation policies
//! cover every source we parse:
//!
//! - [`SplitPolicy::BalancedBrace`] for the Salt event bus: a record starts
//!   at a `<tag>\t{` line and runs until the first line that is exactly `}`
//!   (inclusive). There is no nesting counter — a payload containing a bare
//!   `}` line before the true end mis-terminates. That is a structural
//!   assumption about the bus log, not a general JSON balancer.
//! - [`SplitPolicy::NextHeader`] for the timestamped dialects: a record
//!   starts at a `YYYY-MM-DD HH:MM:SS,mmm` prefixed line and runs until the
//!   next line with the same prefix (exclusive), or end of file.
//!
//! Lines that never match a record start are skipped silently; end of file
//! inside a continuation region terminates the open record without error.

use regex::Regex;
use std::sync::LazyLock;

/// Start pattern for bus records: a tab immediately followed by `{`.
static BUS_START: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\t\{").expect("static regex"));

/// Start pattern for timestamped dialect records.
static HEADER_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}[.,]\d{3} ").expect("static regex")
});

/// Continuation policy, chosen per source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitPolicy {
    BalancedBrace,
    NextHeader,
}

impl SplitPolicy {
    fn is_record_start(&self, line: &str) -> bool {
        match self {
            SplitPolicy::BalancedBrace => BUS_START.is_match(line),
            SplitPolicy::NextHeader => HEADER_START.is_match(line),
        }
    }
}

/// One logical record: the start line plus all of its continuation lines.
#[derive(Debug, Clone, PartialEq)]
pub struct Record<'a> {
    /// Index of the start line within the scanned slice.
    pub start: usize,
    pub lines: Vec<&'a str>,
}

impl Record<'_> {
    /// The reconstructed record text, physical lines joined with `\n`.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Cursor-based scanner yielding logical records from a line slice.
pub struct RecordScanner<'a> {
    lines: &'a [&'a str],
    pos: usize,
    policy: SplitPolicy,
}

impl<'a> RecordScanner<'a> {
    pub fn new(lines: &'a [&'a str], policy: SplitPolicy) -> Self {
        Self {
            lines,
            pos: 0,
            policy,
        }
    }

    /// Collect the record starting at `self.pos` and advance the cursor to
    /// the first line of the next candidate record.
    fn collect_record(&mut self) -> Record<'a> {
        let start = self.pos;
        let mut lines = vec![self.lines[start]];
        let mut i = start + 1;
        match self.policy {
            SplitPolicy::BalancedBrace => {
                while i < self.lines.len() {
                    lines.push(self.lines[i]);
                    let closed = self.lines[i] == "}";
                    i += 1;
                    if closed {
                        break;
                    }
                }
            }
            SplitPolicy::NextHeader => {
                while i < self.lines.len() && !HEADER_START.is_match(self.lines[i]) {
                    lines.push(self.lines[i]);
                    i += 1;
                }
            }
        }
        self.pos = i;
        Record { start, lines }
    }
}

impl<'a> Iterator for RecordScanner<'a> {
    type Item = Record<'a>;

    fn next(&mut self) -> Option<Record<'a>> {
        while self.pos < self.lines.len() {
            if self.policy.is_record_start(self.lines[self.pos]) {
                return Some(self.collect_record());
            }
            self.pos += 1;
        }
        None
    }
}

/// Split a full text into records under one policy. Convenience wrapper over
/// [`RecordScanner`] for callers that already hold the whole file.
pub fn split_records<'a>(lines: &'a [&'a str], policy: SplitPolicy) -> Vec<Record<'a>> {
    RecordScanner::new(lines, policy).collect()
}
