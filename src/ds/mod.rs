pub mod slot_pool;

pub use slot_pool::{SlotId, SlotPool};
