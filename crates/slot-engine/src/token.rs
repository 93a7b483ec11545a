//! Placeholder appointment token numbers.
//!
//! Until tokens are issued by the backend, the scheduling UI shows a stable
//! two-digit number derived from the appointment id.

/// A token number in `10..=99` derived from the UTF-16 code units of `appointment_id`.
pub fn fake_token_number(appointment_id: &str) -> u32 {
    let hash: u64 = appointment_id.encode_utf16().map(u64::from).sum();
    (hash % 90) as u32 + 10
}
