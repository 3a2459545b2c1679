pub mod aggregate;

pub use aggregate::{DealerSlot, DealerSlotDto, DealerSlotStats};
