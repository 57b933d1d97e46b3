pub fn total_hours(total_minutes: i64) -> f64 {
    total_minutes as f64 / 60.0
}

/// Unrounded; rounding to cents happens only when formatting.
pub fn total_cost(total_hours: f64, hourly_rate: f64) -> f64 {
    total_hours * hourly_rate
}
