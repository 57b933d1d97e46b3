use crate::models::locale::{DurationUnits, EN_UNITS};

/// Human-readable duration with English units:
/// `—`, `45 min`, `2 h`, `2 h 5 min`.
pub fn format_duration(minutes: i64) -> String {
    format_duration_with(minutes, &EN_UNITS)
}

pub fn format_duration_with(minutes: i64, units: &DurationUnits) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;

    if hours == 0 && mins == 0 {
        return units.empty.to_string();
    }
    if hours == 0 {
        return format!("{} {}", mins, units.minutes);
    }
    if mins == 0 {
        return format!("{} {}", hours, units.hours);
    }
    format!("{} {} {} {}", hours, units.hours, mins, units.minutes)
}
