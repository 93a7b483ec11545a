//! Error types for slot-engine operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlotError {
    #[error("Invalid time of day: {0}")]
    InvalidTime(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Interval end {end} is not after start {start}")]
    InvertedInterval { start: String, end: String },

    #[error("Slot size must be between 1 and 1439 minutes")]
    InvalidSlotSize,

    #[error("Invalid ISO weekday {0} (expected 0-6, Monday = 0)")]
    InvalidWeekday(u8),
}

pub type Result<T> = std::result::Result<T, SlotError>;
