//! Pure computations over the session state. Nothing here fails: missing or
//! malformed times simply contribute zero minutes.

pub mod cost;
pub mod duration;
pub mod format;

pub use cost::{total_cost, total_hours};
pub use duration::{filled_slot_count, slot_duration_minutes, total_minutes};
pub use format::{format_duration, format_duration_with};
