/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";
pub const RED: &str = "\x1b[31m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

/// Wrap `value` in `color` when colors are enabled.
pub fn paint(value: &str, color: &str, enabled: bool) -> String {
    if enabled {
        format!("{color}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Empty markers ("—", "--:--", blank) are greyed out, filled durations green.
pub fn colorize_duration(value: &str, filled: bool, enabled: bool) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed == "—" || trimmed == "--:--" {
        paint(value, GREY, enabled)
    } else if filled {
        paint(value, GREEN, enabled)
    } else {
        value.to_string()
    }
}

pub fn colorize_optional(value: &str, enabled: bool) -> String {
    if value.trim().is_empty() || value.trim() == "--:--" {
        paint(value, GREY, enabled)
    } else {
        value.to_string()
    }
}
