//! Wall-clock time of day without a date or timezone.
//!
//! The scheduling API exchanges times as `HH:MM:SS` strings (and sometimes the
//! shorter `HH:MM`). [`TimeOfDay`] parses both forms strictly, formats back to
//! `HH:MM:SS`, and orders by seconds since midnight. Anchoring onto a concrete
//! date is explicit via [`TimeOfDay::on`].

use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, SlotError};

/// A time of day in whole seconds, `00:00:00 <= t < 24:00:00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TimeOfDay {
    seconds: u32,
}

impl TimeOfDay {
    /// Build a time from its components.
    ///
    /// # Errors
    /// Returns `SlotError::InvalidTime` if any component is out of range.
    pub fn from_hms(hour: u32, minute: u32, second: u32) -> Result<Self> {
        if hour >= 24 || minute >= 60 || second >= 60 {
            return Err(SlotError::InvalidTime(format!(
                "{:02}:{:02}:{:02}",
                hour, minute, second
            )));
        }
        Ok(Self {
            seconds: hour * 3600 + minute * 60 + second,
        })
    }

    pub fn hour(self) -> u32 {
        self.seconds / 3600
    }

    pub fn minute(self) -> u32 {
        (self.seconds / 60) % 60
    }

    pub fn second(self) -> u32 {
        self.seconds % 60
    }

    /// Anchor this time onto `date`, producing an absolute naive instant.
    pub fn on(self, date: NaiveDate) -> NaiveDateTime {
        date.and_time(self.to_naive_time())
    }

    pub fn to_naive_time(self) -> NaiveTime {
        NaiveTime::default() + Duration::seconds(i64::from(self.seconds))
    }

    /// Signed duration from `earlier` to `self`. Negative when `self` comes first.
    pub fn signed_duration_since(self, earlier: TimeOfDay) -> Duration {
        Duration::seconds(i64::from(self.seconds) - i64::from(earlier.seconds))
    }

    /// Format as `HH:MM`, the form shown on slot labels.
    pub fn format_short(self) -> String {
        format!("{:02}:{:02}", self.hour(), self.minute())
    }
}

impl From<NaiveTime> for TimeOfDay {
    /// Sub-second precision is discarded.
    fn from(time: NaiveTime) -> Self {
        Self {
            seconds: time.num_seconds_from_midnight(),
        }
    }
}

impl FromStr for TimeOfDay {
    type Err = SlotError;

    /// Accepts `HH:MM:SS` or `HH:MM`, each component exactly two ASCII digits.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || SlotError::InvalidTime(s.to_string());

        let parts: Vec<&str> = s.split(':').collect();
        if !(2..=3).contains(&parts.len()) {
            return Err(invalid());
        }

        let mut fields = [0u32; 3];
        for (field, part) in fields.iter_mut().zip(&parts) {
            if part.len() != 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            *field = part.parse().map_err(|_| invalid())?;
        }

        Self::from_hms(fields[0], fields[1], fields[2]).map_err(|_| invalid())
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hour(),
            self.minute(),
            self.second()
        )
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
