//! Time utilities: parsing HH:MM, minutes since midnight, slot ranges.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};
use regex::Regex;
use std::sync::LazyLock;

static SLOT_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d{1,2}:\d{2})\s*-\s*(\d{1,2}:\d{2})\s*$").expect("valid slot range regex")
});

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

/// Minutes elapsed since 00:00 for a `HH:MM` string, `None` if it does not parse.
pub fn minutes_since_midnight(t: &str) -> Option<i64> {
    parse_time(t).map(|nt| i64::from(nt.hour()) * 60 + i64::from(nt.minute()))
}

/// Validate a time entered by the user. Empty input means "unset" and is
/// returned as an empty string; anything else is normalized to `HH:MM`.
pub fn normalize_time_input(input: &str) -> AppResult<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() || trimmed == "-" || trimmed == "--:--" {
        return Ok(String::new());
    }
    parse_time(trimmed)
        .map(|nt| nt.format("%H:%M").to_string())
        .ok_or_else(|| AppError::InvalidTime(trimmed.to_string()))
}

/// Parse `HH:MM-HH:MM` into its (start, end) pair, both normalized.
pub fn parse_slot_range(s: &str) -> AppResult<(String, String)> {
    let caps = SLOT_RANGE
        .captures(s)
        .ok_or_else(|| AppError::InvalidSlot(s.to_string()))?;

    let start = normalize_time_input(&caps[1]).map_err(|_| AppError::InvalidSlot(s.to_string()))?;
    let end = normalize_time_input(&caps[2]).map_err(|_| AppError::InvalidSlot(s.to_string()))?;

    Ok((start, end))
}
