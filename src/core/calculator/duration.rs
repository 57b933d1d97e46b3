use crate::models::Slot;
use crate::utils::time::minutes_since_midnight;

/// Worked minutes between two `HH:MM` times.
///
/// Returns 0 when either side is empty or does not parse, and when `end` is
/// earlier than `start` (spans past midnight are not wrapped).
pub fn slot_duration_minutes(start: &str, end: &str) -> i64 {
    if start.is_empty() || end.is_empty() {
        return 0;
    }

    match (minutes_since_midnight(start), minutes_since_midnight(end)) {
        (Some(s), Some(e)) => (e - s).max(0),
        _ => 0,
    }
}

pub fn total_minutes(slots: &[Slot]) -> i64 {
    slots
        .iter()
        .map(|s| slot_duration_minutes(&s.start, &s.end))
        .sum()
}

/// Slots with both start and end set.
pub fn filled_slot_count(slots: &[Slot]) -> usize {
    slots.iter().filter(|s| s.is_filled()).count()
}
