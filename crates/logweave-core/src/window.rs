//! The optional `[from, until]` time window applied to every parsed event.
//!
//! Bounds come from the CLI as ISO-8601 strings and are parsed once at
//! startup; a malformed bound is a configuration error, never a per-event
//! failure. Both bounds are inclusive and an absent bound imposes no
//! constraint.

use chrono::NaiveDateTime;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WindowError {
    #[error("'{0}' is not a valid datetime (expected e.g. 2021-11-11T16:23:28.804535)")]
    InvalidBound(String),
}

/// Inclusive time window. [`TimeWindow::UNBOUNDED`] keeps everything.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TimeWindow {
    pub from: Option<NaiveDateTime>,
    pub until: Option<NaiveDateTime>,
}

impl TimeWindow {
    pub const UNBOUNDED: TimeWindow = TimeWindow {
        from: None,
        until: None,
    };

    /// Parse optional bound strings. Errors on the first malformed bound.
    pub fn parse(from: Option<&str>, until: Option<&str>) -> Result<Self, WindowError> {
        Ok(Self {
            from: from.map(parse_datetime).transpose()?,
            until: until.map(parse_datetime).transpose()?,
        })
    }

    /// Keep `t` iff `from <= t` and `t <= until`, each only when present.
    pub fn contains(&self, t: NaiveDateTime) -> bool {
        if let Some(from) = self.from {
            if t < from {
                return false;
            }
        }
        if let Some(until) = self.until {
            if t > until {
                return false;
            }
        }
        true
    }
}

/// Parse an ISO-8601 datetime with optional fractional seconds. Accepts both
/// the `T` and the space separator, matching what operators paste from logs.
pub fn parse_datetime(s: &str) -> Result<NaiveDateTime, WindowError> {
    const FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
    FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .ok_or_else(|| WindowError::InvalidBound(s.to_string()))
}
