//! Generate bookable appointment slots from an availability window.
//!
//! The window is walked forward in fixed-size steps starting at its start. A
//! step is emitted as a slot unless it overlaps an exception; overlapping
//! steps are dropped outright, never split or marked unavailable.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use tracing::{debug, trace};

use crate::schedule::{
    AvailabilityWindow, ExceptionInterval, ScheduleAvailability, ScheduleException, Slot,
    MAX_SLOT_DURATION_MINUTES,
};
use crate::time::TimeOfDay;
use crate::weekday::IsoWeekday;

/// Generate the ordered slots of `availability` on `reference_date`.
///
/// All times are anchored on `reference_date` before comparison. The loop
/// condition is on the slot's start, so the last slot may overhang
/// `availability.end`.
///
/// A slot conflicts with an exception when
/// `exception.start < slot_end && exception.end > slot_start`; an exception
/// that only touches a slot boundary does not conflict. Exceptions may come in
/// any order and may overlap each other.
///
/// Degenerate windows (`start >= end`, a slot duration of zero or of a full
/// day or more) produce no slots. Near the end of the representable calendar
/// the walk stops at the last slot whose end can still be computed.
pub fn generate_slots(
    availability: &AvailabilityWindow,
    exceptions: &[ExceptionInterval],
    reference_date: NaiveDate,
) -> Vec<Slot> {
    if availability.slot_duration_minutes == 0
        || availability.slot_duration_minutes > MAX_SLOT_DURATION_MINUTES
        || availability.start >= availability.end
    {
        debug!(
            start = %availability.start,
            end = %availability.end,
            slot_duration_minutes = availability.slot_duration_minutes,
            "degenerate availability window, no slots generated"
        );
        return Vec::new();
    }

    let window_start = availability.start.on(reference_date);
    let window_end = availability.end.on(reference_date);
    let step = Duration::minutes(i64::from(availability.slot_duration_minutes));

    let blocked: Vec<(NaiveDateTime, NaiveDateTime)> = exceptions
        .iter()
        .map(|e| (e.start.on(reference_date), e.end.on(reference_date)))
        .collect();

    let mut slots = Vec::new();
    let mut current = window_start;

    while current < window_end {
        let Some(slot_end) = current.checked_add_signed(step) else {
            debug!(start = %current, "slot end past the last representable date, walk stopped");
            break;
        };

        let conflicting = blocked
            .iter()
            .any(|&(ex_start, ex_end)| ex_start < slot_end && ex_end > current);

        if conflicting {
            trace!(start = %current, end = %slot_end, "slot dropped by exception");
        } else {
            slots.push(Slot {
                start_time: TimeOfDay::from(current.time()),
                end_time: TimeOfDay::from(slot_end.time()),
                is_available: true,
                exceptions: Vec::new(),
            });
        }

        current = slot_end;
    }

    slots
}

/// Generate the slots of an appointment schedule on `date`.
///
/// Uses the schedule's entry for the ISO weekday of `date` and only the
/// exceptions whose validity range covers `date`. Schedules that are not
/// appointment schedules, lack a slot size, or have no entry on that weekday
/// produce no slots.
pub fn compute_appointment_slots(
    schedule: &ScheduleAvailability,
    exceptions: &[ScheduleException],
    date: NaiveDate,
) -> Vec<Slot> {
    let weekday = IsoWeekday::of(date);
    let Some(window) = schedule.appointment_window(weekday) else {
        debug!(schedule = %schedule.name, %weekday, "no appointment window on this weekday");
        return Vec::new();
    };

    let active: Vec<ExceptionInterval> = exceptions
        .iter()
        .filter(|e| e.is_active_on(date))
        .map(ScheduleException::interval)
        .collect();

    generate_slots(&window, &active, date)
}
