use serde::Serialize;
use std::fmt;

/// Identifier of a slot, unique among the slots of one store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct SlotId(pub u64);

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One worked interval. Times are kept as entered (`HH:MM`, or empty when
/// unset) and only interpreted by the calculator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub id: SlotId,
    pub start: String,
    pub end: String,
}

impl Slot {
    pub fn new(id: SlotId) -> Self {
        Self {
            id,
            start: String::new(),
            end: String::new(),
        }
    }

    /// Both start and end are set.
    pub fn is_filled(&self) -> bool {
        !self.start.is_empty() && !self.end.is_empty()
    }
}
