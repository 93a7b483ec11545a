//! Schedule data model: availability windows, exceptions, and generated slots.
//!
//! [`ScheduleAvailability`] and [`ScheduleException`] mirror the records served
//! by the scheduling API (snake_case field names). [`AvailabilityWindow`] and
//! [`ExceptionInterval`] are the plain inputs of the slot generator.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};
use crate::time::TimeOfDay;
use crate::weekday::IsoWeekday;

/// Longest slot that still fits inside one day.
pub const MAX_SLOT_DURATION_MINUTES: u32 = 24 * 60 - 1;

/// One contiguous daily bookable interval, walked in fixed-size slots.
///
/// `slot_duration_minutes` must be in `1..=MAX_SLOT_DURATION_MINUTES`; windows
/// outside that range generate no slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityWindow {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
    pub slot_duration_minutes: u32,
}

impl AvailabilityWindow {
    /// Build a validated window.
    ///
    /// # Errors
    /// Returns `SlotError::InvertedInterval` if `start >= end` and
    /// `SlotError::InvalidSlotSize` unless `slot_duration_minutes` is in
    /// `1..=MAX_SLOT_DURATION_MINUTES`.
    pub fn new(start: TimeOfDay, end: TimeOfDay, slot_duration_minutes: u32) -> Result<Self> {
        if start >= end {
            return Err(inverted(start, end));
        }
        if slot_duration_minutes == 0 || slot_duration_minutes > MAX_SLOT_DURATION_MINUTES {
            return Err(SlotError::InvalidSlotSize);
        }
        Ok(Self {
            start,
            end,
            slot_duration_minutes,
        })
    }
}

/// A non-bookable sub-range of a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExceptionInterval {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl ExceptionInterval {
    /// # Errors
    /// Returns `SlotError::InvertedInterval` if `start >= end`.
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Result<Self> {
        if start >= end {
            return Err(inverted(start, end));
        }
        Ok(Self { start, end })
    }
}

/// A fixed-duration candidate booking unit.
///
/// `end_time` wraps past midnight when the last slot of a late window
/// overhangs the end of the day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    pub is_available: bool,
    pub exceptions: Vec<ExceptionInterval>,
}

impl Slot {
    /// Length of the slot in minutes, measured forward from start to end.
    ///
    /// Measured modulo one day, which is exact for every slot size the
    /// generator accepts.
    pub fn duration_minutes(&self) -> i64 {
        let minutes = self
            .end_time
            .signed_duration_since(self.start_time)
            .num_minutes();
        minutes.rem_euclid(24 * 60)
    }
}

/// What a schedule's time is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotType {
    #[default]
    Appointment,
    Open,
    Closed,
}

/// A single weekday entry of a schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyAvailability {
    pub day_of_week: IsoWeekday,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
}

/// A named schedule as served by the scheduling API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleAvailability {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slot_type: SlotType,
    #[serde(default)]
    pub slot_size_in_minutes: Option<u32>,
    #[serde(default)]
    pub tokens_per_slot: Option<u32>,
    #[serde(default)]
    pub reason: Option<String>,
    pub availability: Vec<WeeklyAvailability>,
}

impl ScheduleAvailability {
    /// Whether any entry of this schedule is tagged with `weekday`.
    pub fn is_available_on(&self, weekday: IsoWeekday) -> bool {
        self.availability.iter().any(|a| a.day_of_week == weekday)
    }

    /// The slot-generation window of this schedule on `weekday`.
    ///
    /// `None` unless the schedule is an appointment schedule with a slot size
    /// and has an entry on that weekday. When several entries share the
    /// weekday, the first one wins. The window is not validated; degenerate
    /// windows simply generate no slots.
    pub fn appointment_window(&self, weekday: IsoWeekday) -> Option<AvailabilityWindow> {
        if self.slot_type != SlotType::Appointment {
            return None;
        }
        let slot_duration_minutes = self.slot_size_in_minutes?;
        let entry = self.availability.iter().find(|a| a.day_of_week == weekday)?;
        Some(AvailabilityWindow {
            start: entry.start_time,
            end: entry.end_time,
            slot_duration_minutes,
        })
    }
}

/// A dated exception blocking part of each day in `[valid_from, valid_to]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleException {
    #[serde(default)]
    pub reason: String,
    pub valid_from: NaiveDate,
    pub valid_to: NaiveDate,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
}

impl ScheduleException {
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        is_date_in_range(date, self.valid_from, self.valid_to)
    }

    pub fn interval(&self) -> ExceptionInterval {
        ExceptionInterval {
            start: self.start_time,
            end: self.end_time,
        }
    }
}

/// Whether `date` lies in `[start, end]`, inclusive of both boundary days.
///
/// An inverted range still matches its own boundary days.
pub fn is_date_in_range(date: NaiveDate, start: NaiveDate, end: NaiveDate) -> bool {
    (start <= date && date <= end) || date == start || date == end
}

/// Parse a `YYYY-MM-DD` calendar date.
///
/// # Errors
/// Returns `SlotError::InvalidDate` if `s` is not a valid date.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| SlotError::InvalidDate(s.to_string()))
}

fn inverted(start: TimeOfDay, end: TimeOfDay) -> SlotError {
    SlotError::InvertedInterval {
        start: start.to_string(),
        end: end.to_string(),
    }
}
