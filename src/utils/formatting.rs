//! Formatting utilities used for CLI output.

use unicode_width::UnicodeWidthStr;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Pad on the right to `width` terminal columns (currency symbols and
/// Cyrillic labels are not one byte wide).
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}

/// `<currency><amount>` with exactly two decimals.
pub fn format_money(currency: &str, amount: f64) -> String {
    // -0.0 (zero minutes at a negative rate) must not print as "-0.00"
    format!("{}{:.2}", currency, amount + 0.0)
}

/// Rate as typed by the user: `15` stays `15`, `15.5` stays `15.5`.
pub fn format_rate(currency: &str, rate: f64, hour_unit: &str) -> String {
    format!("{}{} / {}", currency, rate + 0.0, hour_unit)
}

/// Parse a rate typed by the user. Anything that is not a finite number
/// (empty input, text, NaN, infinities) becomes 0.
pub fn parse_rate(input: &str) -> f64 {
    match input.trim().replace(',', ".").parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}
