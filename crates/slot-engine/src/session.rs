//! Duration arithmetic over raw time strings.
//!
//! These helpers back UI labels ("90 min", "4 slots per session"), so they
//! never fail loudly: anything unparsable or inverted yields `None` and the
//! caller simply omits the value.

use tracing::debug;

use crate::time::TimeOfDay;

/// Signed minutes from `start` to `end`, both `HH:MM[:SS]` strings on a common
/// date. Seconds carry through as fractional minutes.
///
/// Returns `None` if either string fails to parse.
pub fn duration_minutes(start: &str, end: &str) -> Option<f64> {
    let (start, end) = match (start.parse::<TimeOfDay>(), end.parse::<TimeOfDay>()) {
        (Ok(start), Ok(end)) => (start, end),
        (Err(e), _) | (_, Err(e)) => {
            debug!(error = %e, "unparsable session bound");
            return None;
        }
    };
    Some(end.signed_duration_since(start).num_seconds() as f64 / 60.0)
}

/// How many whole slots of `slot_size_minutes` fit between `start` and `end`.
///
/// Returns `None` if the duration is unparsable, zero, or negative, or if the
/// slot size is zero. A session shorter than one slot fits zero slots.
pub fn slots_per_session(start: &str, end: &str, slot_size_minutes: u32) -> Option<u32> {
    let duration = duration_minutes(start, end)?;
    if duration <= 0.0 || slot_size_minutes == 0 {
        return None;
    }
    // Bounded by a day's worth of minutes, so the cast is exact.
    Some((duration / f64::from(slot_size_minutes)).floor() as u32)
}

/// Minutes allotted to each token when a slot is split into `tokens_per_slot`.
///
/// Returns `None` when `tokens_per_slot` is zero.
pub fn token_duration(slot_size_minutes: u32, tokens_per_slot: u32) -> Option<f64> {
    if tokens_per_slot == 0 {
        return None;
    }
    Some(f64::from(slot_size_minutes) / f64::from(tokens_per_slot))
}
