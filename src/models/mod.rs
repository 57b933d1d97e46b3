pub mod currency;
pub mod field;
pub mod locale;
pub mod slot;

pub use field::SlotField;
pub use slot::{Slot, SlotId};
