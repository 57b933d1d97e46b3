//! Status lines printed around the rendered summary.

use crate::utils::colors::{BLUE, GREEN, RED, YELLOW, paint};
use std::fmt;

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

/// Prints icon-prefixed messages, colored only when `colors` is set.
#[derive(Debug, Clone, Copy)]
pub struct Messenger {
    pub colors: bool,
}

impl Messenger {
    pub fn new(colors: bool) -> Self {
        Self { colors }
    }

    /// Icon plus message, as printed by the other methods.
    pub fn line<T: fmt::Display>(&self, icon: &str, color: &str, msg: T) -> String {
        format!("{} {}", paint(icon, color, self.colors), msg)
    }

    pub fn info<T: fmt::Display>(&self, msg: T) {
        println!("{}", self.line(ICON_INFO, BLUE, msg));
    }

    pub fn success<T: fmt::Display>(&self, msg: T) {
        println!("{}", self.line(ICON_OK, GREEN, msg));
    }

    pub fn warning<T: fmt::Display>(&self, msg: T) {
        println!("{}", self.line(ICON_WARN, YELLOW, msg));
    }

    pub fn error<T: fmt::Display>(&self, msg: T) {
        eprintln!("{}", self.line(ICON_ERR, RED, msg));
    }

    /// Section header
    pub fn header<T: fmt::Display>(&self, msg: T) {
        println!("{}", paint(&format!("== {}", msg), BLUE, self.colors));
    }
}
