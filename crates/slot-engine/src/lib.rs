//! # slot-engine
//!
//! Deterministic appointment slot generation for facility scheduling.
//!
//! Turns a daily availability window plus a set of blocked exception intervals
//! into the ordered list of bookable slots for a date. Everything here is a pure,
//! synchronous computation over value inputs: no I/O, no shared state.
//!
//! ## Modules
//!
//! - [`slots`] — availability window + exceptions → bookable slots
//! - [`schedule`] — schedule, exception and slot data types
//! - [`time`] — explicit time-of-day value type
//! - [`weekday`] — Monday = 0 weekday numbering and weekday filtering
//! - [`session`] — duration and slots-per-session helpers
//! - [`token`] — placeholder token numbers
//! - [`error`] — Error types

pub mod error;
pub mod schedule;
pub mod session;
pub mod slots;
pub mod time;
pub mod token;
pub mod weekday;

pub use error::SlotError;
pub use schedule::{
    is_date_in_range, parse_date, AvailabilityWindow, ExceptionInterval, ScheduleAvailability,
    ScheduleException, Slot, SlotType, WeeklyAvailability, MAX_SLOT_DURATION_MINUTES,
};
pub use session::{duration_minutes, slots_per_session, token_duration};
pub use slots::{compute_appointment_slots, generate_slots};
pub use time::TimeOfDay;
pub use token::fake_token_number;
pub use weekday::{days_of_week_union, filter_by_weekday, IsoWeekday};
