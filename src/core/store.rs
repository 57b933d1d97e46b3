//! Session state: the ordered slot list, hourly rate and currency symbol.

use crate::models::currency::DEFAULT_SYMBOL;
use crate::models::{Slot, SlotField, SlotId};
use tracing::debug;

pub const DEFAULT_HOURLY_RATE: f64 = 15.0;

/// In-memory store for one running session.
///
/// The slot list is never empty: a new store starts with one empty slot and
/// removing the last remaining slot is ignored.
#[derive(Debug, Clone)]
pub struct SlotStore {
    hourly_rate: f64,
    currency: String,
    slots: Vec<Slot>,
    next_id: u64,
}

impl Default for SlotStore {
    fn default() -> Self {
        Self::new(DEFAULT_HOURLY_RATE, DEFAULT_SYMBOL)
    }
}

impl SlotStore {
    pub fn new(hourly_rate: f64, currency: &str) -> Self {
        Self {
            hourly_rate,
            currency: currency.to_string(),
            slots: vec![Slot::new(SlotId(1))],
            next_id: 2,
        }
    }

    pub fn hourly_rate(&self) -> f64 {
        self.hourly_rate
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Slots in insertion order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Never true for a live store.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, id: SlotId) -> Option<&Slot> {
        self.slots.iter().find(|s| s.id == id)
    }

    /// Append an empty slot and return its id.
    pub fn add_slot(&mut self) -> SlotId {
        let id = SlotId(self.next_id);
        self.next_id += 1;
        self.slots.push(Slot::new(id));
        debug!(slot = %id, count = self.slots.len(), "slot added");
        id
    }

    /// Remove the slot with `id`. Returns false when nothing was removed:
    /// unknown id, or `id` is the only slot left.
    pub fn remove_slot(&mut self, id: SlotId) -> bool {
        if self.slots.len() <= 1 {
            debug!(slot = %id, "refusing to remove the last slot");
            return false;
        }

        let before = self.slots.len();
        self.slots.retain(|s| s.id != id);
        let removed = self.slots.len() != before;
        debug!(slot = %id, removed, count = self.slots.len(), "remove slot");
        removed
    }

    /// Replace one field of the slot with `id`. Returns false for an unknown id.
    pub fn update_slot(&mut self, id: SlotId, field: SlotField, value: &str) -> bool {
        let Some(slot) = self.slots.iter_mut().find(|s| s.id == id) else {
            debug!(slot = %id, field = field.as_str(), "update ignored: unknown slot");
            return false;
        };

        match field {
            SlotField::Start => slot.start = value.to_string(),
            SlotField::End => slot.end = value.to_string(),
        }
        debug!(slot = %id, field = field.as_str(), value, "slot updated");
        true
    }

    pub fn set_hourly_rate(&mut self, value: f64) {
        debug!(rate = value, "hourly rate set");
        self.hourly_rate = value;
    }

    pub fn set_currency(&mut self, symbol: &str) {
        debug!(currency = symbol, "currency set");
        self.currency = symbol.to_string();
    }
}
