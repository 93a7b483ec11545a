//! ISO-style weekday numbering and weekday-based schedule selection.
//!
//! The scheduling backend numbers weekdays Monday = 0 … Sunday = 6, while most
//! clocks (and the JS `Date#getDay` the front-end used) count Sunday = 0. The
//! conversion between the two lives in `sunday_based_to_iso` and nowhere else;
//! [`IsoWeekday::of`], the `From<Weekday>` impl and
//! [`IsoWeekday::from_sunday_based`] all go through it.

use std::collections::BTreeSet;
use std::fmt;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};
use crate::schedule::ScheduleAvailability;

/// `native` must already be in `0..=6`.
const fn sunday_based_to_iso(native: u8) -> u8 {
    (native + 6) % 7
}

/// A weekday in backend numbering: Monday = 0 … Sunday = 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct IsoWeekday(u8);

impl IsoWeekday {
    pub const MONDAY: IsoWeekday = IsoWeekday(0);
    pub const TUESDAY: IsoWeekday = IsoWeekday(1);
    pub const WEDNESDAY: IsoWeekday = IsoWeekday(2);
    pub const THURSDAY: IsoWeekday = IsoWeekday(3);
    pub const FRIDAY: IsoWeekday = IsoWeekday(4);
    pub const SATURDAY: IsoWeekday = IsoWeekday(5);
    pub const SUNDAY: IsoWeekday = IsoWeekday(6);

    /// # Errors
    /// Returns `SlotError::InvalidWeekday` unless `value` is in `0..=6`.
    pub fn new(value: u8) -> Result<Self> {
        if value > 6 {
            return Err(SlotError::InvalidWeekday(value));
        }
        Ok(Self(value))
    }

    /// Convert a Sunday = 0 weekday number into backend numbering:
    /// `iso = (native + 6) mod 7`.
    ///
    /// # Errors
    /// Returns `SlotError::InvalidWeekday` unless `native` is in `0..=6`.
    pub fn from_sunday_based(native: u8) -> Result<Self> {
        if native > 6 {
            return Err(SlotError::InvalidWeekday(native));
        }
        Ok(Self(sunday_based_to_iso(native)))
    }

    /// The weekday `date` falls on.
    pub fn of(date: NaiveDate) -> Self {
        Self::from(date.weekday())
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl From<Weekday> for IsoWeekday {
    fn from(weekday: Weekday) -> Self {
        Self(sunday_based_to_iso(weekday.num_days_from_sunday() as u8))
    }
}

impl From<IsoWeekday> for Weekday {
    fn from(weekday: IsoWeekday) -> Self {
        match weekday.0 {
            0 => Weekday::Mon,
            1 => Weekday::Tue,
            2 => Weekday::Wed,
            3 => Weekday::Thu,
            4 => Weekday::Fri,
            5 => Weekday::Sat,
            _ => Weekday::Sun,
        }
    }
}

impl TryFrom<u8> for IsoWeekday {
    type Error = SlotError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<IsoWeekday> for u8 {
    fn from(weekday: IsoWeekday) -> Self {
        weekday.0
    }
}

impl fmt::Display for IsoWeekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Weekday::from(*self))
    }
}

/// All weekdays referenced by any entry of any schedule, sorted and deduplicated.
pub fn days_of_week_union(schedules: &[ScheduleAvailability]) -> Vec<IsoWeekday> {
    schedules
        .iter()
        .flat_map(|s| s.availability.iter().map(|a| a.day_of_week))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Schedules with at least one entry on the weekday of `date`.
pub fn filter_by_weekday(
    schedules: &[ScheduleAvailability],
    date: NaiveDate,
) -> Vec<&ScheduleAvailability> {
    let weekday = IsoWeekday::of(date);
    schedules
        .iter()
        .filter(|s| s.is_available_on(weekday))
        .collect()
}
