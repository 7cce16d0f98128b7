//! Minute-resolution timestamps.

use crate::clock::Clock;
use chrono::NaiveDateTime;
use std::fmt;

/// `strftime` pattern for `YYYY/MM/DD HH:MM`, zero padded, 24-hour clock.
pub const FORMAT: &str = "%Y/%m/%d %H:%M";

/// Length in bytes of a formatted timestamp.
pub const LEN: usize = 16;

/// A point in time rendered as `YYYY/MM/DD HH:MM`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Timestamp(String);

impl Timestamp {
    /// Formats `date_time`, dropping seconds and anything finer.
    pub fn from_datetime(date_time: NaiveDateTime) -> Self {
        Timestamp(date_time.format(FORMAT).to_string())
    }

    /// Reads `clock` and formats the result.
    pub fn now<C: Clock>(clock: &C) -> Self {
        Self::from_datetime(clock.now())
    }

    /// The formatted text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Timestamp {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
