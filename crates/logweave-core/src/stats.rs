//! Run statistics, threaded explicitly through collection.
//!
//! The accumulator is updated once per accepted event during parsing and
//! read once at the end of the run for the console summary. It is a plain
//! value passed by `&mut`, never process-global state, so a future parallel
//! per-source collection only needs a final merge.

use chrono::NaiveDateTime;

/// Count and time span of all accepted events in one run.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RunStats {
    pub accepted: u64,
    pub first: Option<NaiveDateTime>,
    pub last: Option<NaiveDateTime>,
}

impl RunStats {
    /// Record one accepted event.
    pub fn record(&mut self, ts: NaiveDateTime) {
        self.accepted += 1;
        if self.first.is_none_or(|first| ts < first) {
            self.first = Some(ts);
        }
        if self.last.is_none_or(|last| ts > last) {
            self.last = Some(ts);
        }
    }
}
