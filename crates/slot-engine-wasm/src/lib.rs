//! WASM bindings for slot-engine.
//!
//! Exposes slot generation and the scheduling helpers to the JavaScript
//! front-end via `wasm-bindgen`. All complex types are passed as JSON strings
//! using the scheduling API's field names, so responses can be handed over
//! without reshaping.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p slot-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir packages/slot-engine-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/slot_engine_wasm.wasm
//! ```
//!
//! Each export is a thin wrapper over a `*_json` function returning
//! `Result<_, String>`, which keeps the logic testable off the wasm target.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use slot_engine::{
    AvailabilityWindow, ExceptionInterval, ScheduleAvailability, ScheduleException, TimeOfDay,
};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

/// Slot as rendered by the appointment UI: `HH:MM` labels.
#[derive(Serialize)]
struct SlotDto {
    start_time: String,
    end_time: String,
    #[serde(rename = "isAvailable")]
    is_available: bool,
    exceptions: Vec<ExceptionInterval>,
}

impl From<&slot_engine::Slot> for SlotDto {
    fn from(s: &slot_engine::Slot) -> Self {
        Self {
            start_time: s.start_time.format_short(),
            end_time: s.end_time.format_short(),
            is_available: s.is_available,
            exceptions: s.exceptions.clone(),
        }
    }
}

/// Input format for exception intervals passed from JavaScript.
#[derive(Deserialize)]
struct IntervalInput {
    start_time: TimeOfDay,
    end_time: TimeOfDay,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    slot_engine::parse_date(s).map_err(|e| e.to_string())
}

fn parse_json<'a, T: Deserialize<'a>>(json: &'a str, what: &str) -> Result<T, String> {
    serde_json::from_str(json).map_err(|e| format!("Invalid {} JSON: {}", what, e))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Serialization error: {}", e))
}

fn slots_to_json(slots: &[slot_engine::Slot]) -> Result<String, String> {
    let dtos: Vec<SlotDto> = slots.iter().map(SlotDto::from).collect();
    to_json(&dtos)
}

// ---------------------------------------------------------------------------
// Native entry points
// ---------------------------------------------------------------------------

pub fn compute_appointment_slots_json(
    schedule_json: &str,
    exceptions_json: &str,
    date: &str,
) -> Result<String, String> {
    let schedule: ScheduleAvailability = parse_json(schedule_json, "schedule")?;
    let exceptions: Vec<ScheduleException> = parse_json(exceptions_json, "exceptions")?;
    let date = parse_date(date)?;

    slots_to_json(&slot_engine::compute_appointment_slots(
        &schedule,
        &exceptions,
        date,
    ))
}

pub fn generate_slots_json(
    start_time: &str,
    end_time: &str,
    slot_size_in_minutes: u32,
    exceptions_json: &str,
    date: &str,
) -> Result<String, String> {
    let window = AvailabilityWindow {
        start: start_time.parse().map_err(|e: slot_engine::SlotError| e.to_string())?,
        end: end_time.parse().map_err(|e: slot_engine::SlotError| e.to_string())?,
        slot_duration_minutes: slot_size_in_minutes,
    };
    let exceptions: Vec<ExceptionInterval> =
        parse_json::<Vec<IntervalInput>>(exceptions_json, "exceptions")?
            .into_iter()
            .map(|i| ExceptionInterval {
                start: i.start_time,
                end: i.end_time,
            })
            .collect();
    let date = parse_date(date)?;

    slots_to_json(&slot_engine::generate_slots(&window, &exceptions, date))
}

pub fn days_of_week_json(schedules_json: &str) -> Result<String, String> {
    let schedules: Vec<ScheduleAvailability> = parse_json(schedules_json, "schedules")?;
    to_json(&slot_engine::days_of_week_union(&schedules))
}

pub fn filter_by_weekday_json(schedules_json: &str, date: &str) -> Result<String, String> {
    let schedules: Vec<ScheduleAvailability> = parse_json(schedules_json, "schedules")?;
    let date = parse_date(date)?;
    to_json(&slot_engine::filter_by_weekday(&schedules, date))
}

pub fn is_date_in_range_str(date: &str, start: &str, end: &str) -> Result<bool, String> {
    Ok(slot_engine::is_date_in_range(
        parse_date(date)?,
        parse_date(start)?,
        parse_date(end)?,
    ))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Compute the bookable slots of an appointment schedule on `date` (`YYYY-MM-DD`).
///
/// `schedule_json` is a schedule object, `exceptions_json` an array of dated
/// exceptions. Returns a JSON array of `{start_time, end_time, isAvailable,
/// exceptions}` objects with `HH:MM` times.
#[wasm_bindgen(js_name = "computeAppointmentSlots")]
pub fn compute_appointment_slots(
    schedule_json: &str,
    exceptions_json: &str,
    date: &str,
) -> Result<String, JsValue> {
    compute_appointment_slots_json(schedule_json, exceptions_json, date)
        .map_err(|e| JsValue::from_str(&e))
}

/// Generate slots for a raw window. `exceptions_json` is an array of
/// `{start_time, end_time}` objects.
#[wasm_bindgen(js_name = "generateSlots")]
pub fn generate_slots(
    start_time: &str,
    end_time: &str,
    slot_size_in_minutes: u32,
    exceptions_json: &str,
    date: &str,
) -> Result<String, JsValue> {
    generate_slots_json(start_time, end_time, slot_size_in_minutes, exceptions_json, date)
        .map_err(|e| JsValue::from_str(&e))
}

/// Signed minutes between two time strings, or `undefined` if either is invalid.
#[wasm_bindgen(js_name = "getDurationInMinutes")]
pub fn get_duration_in_minutes(start_time: &str, end_time: &str) -> Option<f64> {
    slot_engine::duration_minutes(start_time, end_time)
}

#[wasm_bindgen(js_name = "getSlotsPerSession")]
pub fn get_slots_per_session(start_time: &str, end_time: &str, slot_size_in_minutes: u32) -> Option<u32> {
    slot_engine::slots_per_session(start_time, end_time, slot_size_in_minutes)
}

#[wasm_bindgen(js_name = "getTokenDuration")]
pub fn get_token_duration(slot_size_in_minutes: u32, tokens_per_slot: u32) -> Option<f64> {
    slot_engine::token_duration(slot_size_in_minutes, tokens_per_slot)
}

/// Sorted weekday numbers (Monday = 0) referenced by a JSON array of schedules.
#[wasm_bindgen(js_name = "getDaysOfWeekFromAvailabilities")]
pub fn get_days_of_week_from_availabilities(schedules_json: &str) -> Result<String, JsValue> {
    days_of_week_json(schedules_json).map_err(|e| JsValue::from_str(&e))
}

/// Schedules from a JSON array that have an entry on the weekday of `date`.
#[wasm_bindgen(js_name = "filterAvailabilitiesByDayOfWeek")]
pub fn filter_availabilities_by_day_of_week(
    schedules_json: &str,
    date: &str,
) -> Result<String, JsValue> {
    filter_by_weekday_json(schedules_json, date).map_err(|e| JsValue::from_str(&e))
}

#[wasm_bindgen(js_name = "isDateInRange")]
pub fn is_date_in_range(date: &str, start_date: &str, end_date: &str) -> Result<bool, JsValue> {
    is_date_in_range_str(date, start_date, end_date).map_err(|e| JsValue::from_str(&e))
}

#[wasm_bindgen(js_name = "getFakeTokenNumber")]
pub fn get_fake_token_number(appointment_id: &str) -> u32 {
    slot_engine::fake_token_number(appointment_id)
}
