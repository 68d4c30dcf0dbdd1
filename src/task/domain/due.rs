//! ISO-local due timestamps.

use super::ParseDueDateTimeError;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Formats accepted when parsing, most specific first.
const ACCEPTED_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Format written when serializing.
const CANONICAL_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// A task's due timestamp in local time without a zone offset.
///
/// Browsers submit `datetime-local` values such as `2099-01-01T00:00` while
/// the store echoes them back with seconds, so both shapes are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DueDateTime(NaiveDateTime);

impl DueDateTime {
    /// Wraps an already-parsed local timestamp.
    #[must_use]
    pub const fn from_naive(value: NaiveDateTime) -> Self {
        Self(value)
    }

    /// Returns the wrapped local timestamp.
    #[must_use]
    pub const fn as_naive(self) -> NaiveDateTime {
        self.0
    }

    /// Returns whether the timestamp lies strictly after `now`.
    #[must_use]
    pub fn is_after(self, now: NaiveDateTime) -> bool {
        self.0 > now
    }
}

impl FromStr for DueDateTime {
    type Err = ParseDueDateTimeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        ACCEPTED_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
            .map(Self)
            .ok_or_else(|| ParseDueDateTimeError(value.to_owned()))
    }
}

impl TryFrom<String> for DueDateTime {
    type Error = ParseDueDateTimeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DueDateTime> for String {
    fn from(value: DueDateTime) -> Self {
        value.to_string()
    }
}

impl fmt::Display for DueDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(CANONICAL_FORMAT))
    }
}
