pub mod calculator;
pub mod store;
pub mod summary;

pub use store::SlotStore;
pub use summary::Summary;
