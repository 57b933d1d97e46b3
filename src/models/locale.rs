use serde::{Deserialize, Serialize};

/// Language used for duration units in rendered output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ru,
}

/// Unit labels used by `format_duration`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationUnits {
    pub hours: &'static str,
    pub minutes: &'static str,
    pub empty: &'static str,
}

pub const EN_UNITS: DurationUnits = DurationUnits {
    hours: "h",
    minutes: "min",
    empty: "—",
};

pub const RU_UNITS: DurationUnits = DurationUnits {
    hours: "ч",
    minutes: "мин",
    empty: "—",
};

impl Locale {
    pub fn units(&self) -> DurationUnits {
        match self {
            Locale::En => EN_UNITS,
            Locale::Ru => RU_UNITS,
        }
    }
}
