//! Tests for schedule selection by weekday, dated exceptions and
//! schedule-level slot computation.

use chrono::NaiveDate;
use slot_engine::{
    compute_appointment_slots, days_of_week_union, filter_by_weekday, is_date_in_range,
    parse_date, IsoWeekday, ScheduleAvailability, ScheduleException, SlotType, TimeOfDay,
    WeeklyAvailability,
};

// ── Helpers ─────────────────────────────────────────────────────────────────

fn t(s: &str) -> TimeOfDay {
    s.parse().unwrap()
}

fn d(s: &str) -> NaiveDate {
    parse_date(s).unwrap()
}

fn entry(day: u8, start: &str, end: &str) -> WeeklyAvailability {
    WeeklyAvailability {
        day_of_week: IsoWeekday::new(day).unwrap(),
        start_time: t(start),
        end_time: t(end),
    }
}

fn schedule(name: &str, slot_size: Option<u32>, entries: Vec<WeeklyAvailability>) -> ScheduleAvailability {
    ScheduleAvailability {
        name: name.to_string(),
        slot_type: SlotType::Appointment,
        slot_size_in_minutes: slot_size,
        tokens_per_slot: None,
        reason: None,
        availability: entries,
    }
}

fn exception(from: &str, to: &str, start: &str, end: &str) -> ScheduleException {
    ScheduleException {
        reason: "blocked".to_string(),
        valid_from: d(from),
        valid_to: d(to),
        start_time: t(start),
        end_time: t(end),
    }
}

// 2026-03-16 is a Monday.
const MONDAY: &str = "2026-03-16";
const TUESDAY: &str = "2026-03-17";

// ── Weekday union and filtering ─────────────────────────────────────────────

#[test]
fn union_deduplicates_weekdays() {
    let schedules = vec![
        schedule("morning", Some(15), vec![entry(0, "09:00", "12:00"), entry(2, "09:00", "12:00")]),
        schedule("evening", Some(15), vec![entry(2, "17:00", "19:00"), entry(6, "17:00", "19:00")]),
    ];

    let days: Vec<u8> = days_of_week_union(&schedules).into_iter().map(u8::from).collect();
    assert_eq!(days, [0, 2, 6]);
}

#[test]
fn union_of_nothing_is_empty() {
    assert!(days_of_week_union(&[]).is_empty());
}

#[test]
fn monday_selects_iso_zero() {
    let schedules = vec![
        schedule("mon", Some(15), vec![entry(0, "09:00", "12:00")]),
        schedule("sun", Some(15), vec![entry(6, "09:00", "12:00")]),
        schedule("tue", Some(15), vec![entry(1, "09:00", "12:00")]),
    ];

    let selected = filter_by_weekday(&schedules, d(MONDAY));
    let names: Vec<&str> = selected.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["mon"]);
}

#[test]
fn sunday_selects_iso_six() {
    let schedules = vec![
        schedule("mon", Some(15), vec![entry(0, "09:00", "12:00")]),
        schedule("sun", Some(15), vec![entry(6, "09:00", "12:00")]),
    ];

    let selected = filter_by_weekday(&schedules, d("2026-03-22"));
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].name, "sun");
}

// ── Date ranges ─────────────────────────────────────────────────────────────

#[test]
fn date_range_is_inclusive() {
    assert!(is_date_in_range(d("2026-03-01"), d("2026-03-01"), d("2026-03-31")));
    assert!(is_date_in_range(d("2026-03-31"), d("2026-03-01"), d("2026-03-31")));
    assert!(is_date_in_range(d("2026-03-15"), d("2026-03-01"), d("2026-03-31")));
    assert!(!is_date_in_range(d("2026-04-01"), d("2026-03-01"), d("2026-03-31")));
}

#[test]
fn inverted_range_matches_only_bounds() {
    assert!(is_date_in_range(d("2026-03-31"), d("2026-03-31"), d("2026-03-01")));
    assert!(!is_date_in_range(d("2026-03-15"), d("2026-03-31"), d("2026-03-01")));
}

#[test]
fn parse_date_rejects_garbage() {
    assert!(parse_date("2026-02-30").is_err());
    assert!(parse_date("16/03/2026").is_err());
}

// ── compute_appointment_slots ───────────────────────────────────────────────

#[test]
fn uses_entry_for_the_dates_weekday() {
    let s = schedule(
        "clinic",
        Some(30),
        vec![entry(1, "14:00", "15:00"), entry(0, "09:00", "10:00")],
    );

    let monday = compute_appointment_slots(&s, &[], d(MONDAY));
    let tuesday = compute_appointment_slots(&s, &[], d(TUESDAY));

    assert_eq!(monday.len(), 2);
    assert_eq!(monday[0].start_time, t("09:00"));
    assert_eq!(tuesday.len(), 2);
    assert_eq!(tuesday[0].start_time, t("14:00"));
}

#[test]
fn only_exceptions_valid_on_the_date_apply() {
    let s = schedule("clinic", Some(20), vec![entry(0, "09:00", "10:00"), entry(1, "09:00", "10:00")]);
    let exceptions = vec![exception(MONDAY, MONDAY, "09:20", "09:40")];

    let monday = compute_appointment_slots(&s, &exceptions, d(MONDAY));
    let tuesday = compute_appointment_slots(&s, &exceptions, d(TUESDAY));

    assert_eq!(monday.len(), 2);
    assert_eq!(tuesday.len(), 3);
}

#[test]
fn non_appointment_schedule_has_no_slots() {
    let mut s = schedule("closed", Some(20), vec![entry(0, "09:00", "10:00")]);
    s.slot_type = SlotType::Closed;

    assert!(compute_appointment_slots(&s, &[], d(MONDAY)).is_empty());
}

#[test]
fn missing_slot_size_has_no_slots() {
    let s = schedule("open", None, vec![entry(0, "09:00", "10:00")]);
    assert!(compute_appointment_slots(&s, &[], d(MONDAY)).is_empty());
}

#[test]
fn no_entry_on_weekday_has_no_slots() {
    let s = schedule("tue-only", Some(20), vec![entry(1, "09:00", "10:00")]);
    assert!(compute_appointment_slots(&s, &[], d(MONDAY)).is_empty());
}

// ── Deserialization from API payloads ───────────────────────────────────────

#[test]
fn deserializes_api_schedule() {
    let json = r#"{
        "name": "OPD",
        "slot_type": "appointment",
        "slot_size_in_minutes": 15,
        "tokens_per_slot": 3,
        "reason": null,
        "availability": [
            {"day_of_week": 0, "start_time": "09:00:00", "end_time": "10:00:00"}
        ]
    }"#;

    let s: ScheduleAvailability = serde_json::from_str(json).unwrap();
    assert_eq!(s.slot_size_in_minutes, Some(15));
    assert_eq!(s.availability[0].day_of_week, IsoWeekday::MONDAY);
    assert_eq!(compute_appointment_slots(&s, &[], d(MONDAY)).len(), 4);
}

#[test]
fn rejects_malformed_time_in_payload() {
    let json = r#"{
        "availability": [
            {"day_of_week": 0, "start_time": "9am", "end_time": "10:00:00"}
        ]
    }"#;

    assert!(serde_json::from_str::<ScheduleAvailability>(json).is_err());
}

#[test]
fn deserializes_api_exception() {
    let json = r#"{
        "reason": "Staff meeting",
        "valid_from": "2026-03-16",
        "valid_to": "2026-03-20",
        "start_time": "12:00:00",
        "end_time": "13:00:00"
    }"#;

    let e: ScheduleException = serde_json::from_str(json).unwrap();
    assert!(e.is_active_on(d(TUESDAY)));
    assert!(!e.is_active_on(d("2026-03-21")));
}
