//! Derived values for rendering, recomputed from scratch after every mutation.

use crate::core::calculator::{
    filled_slot_count, format_duration_with, slot_duration_minutes, total_cost, total_hours,
    total_minutes,
};
use crate::core::store::SlotStore;
use crate::models::SlotId;
use crate::models::locale::DurationUnits;
use crate::utils::formatting::{format_money, format_rate};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotRow {
    /// 1-based display position.
    pub position: usize,
    pub id: SlotId,
    pub start: String,
    pub end: String,
    pub minutes: i64,
    pub duration: String,
    pub filled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub currency: String,
    pub hourly_rate: f64,
    pub rate: String,
    pub slots: Vec<SlotRow>,
    pub filled_slots: usize,
    pub total_slots: usize,
    pub total_minutes: i64,
    pub total_hours: f64,
    pub total_cost: f64,
    pub total_duration: String,
    pub cost: String,
}

impl Summary {
    pub fn compute(store: &SlotStore, units: &DurationUnits) -> Self {
        let slots = store.slots();

        let rows = slots
            .iter()
            .enumerate()
            .map(|(i, s)| {
                let minutes = slot_duration_minutes(&s.start, &s.end);
                SlotRow {
                    position: i + 1,
                    id: s.id,
                    start: s.start.clone(),
                    end: s.end.clone(),
                    minutes,
                    duration: format_duration_with(minutes, units),
                    filled: s.is_filled(),
                }
            })
            .collect();

        let minutes = total_minutes(slots);
        let hours = total_hours(minutes);
        let cost = total_cost(hours, store.hourly_rate());

        Self {
            currency: store.currency().to_string(),
            hourly_rate: store.hourly_rate(),
            rate: format_rate(store.currency(), store.hourly_rate(), units.hours),
            slots: rows,
            filled_slots: filled_slot_count(slots),
            total_slots: slots.len(),
            total_minutes: minutes,
            total_hours: hours,
            total_cost: cost,
            total_duration: format_duration_with(minutes, units),
            cost: format_money(store.currency(), cost),
        }
    }
}
