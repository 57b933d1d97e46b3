use crate::errors::AppError;
use std::str::FromStr;

/// Editable time field of a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotField {
    Start,
    End,
}

impl SlotField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SlotField::Start => "start",
            SlotField::End => "end",
        }
    }
}

impl FromStr for SlotField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "start" | "in" | "s" => Ok(SlotField::Start),
            "end" | "out" | "e" => Ok(SlotField::End),
            other => Err(AppError::InvalidField(other.to_string())),
        }
    }
}
