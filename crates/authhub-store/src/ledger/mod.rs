//! Live-token bookkeeping.

pub mod memory;
pub mod store;

pub use memory::MemorySessionLedger;
pub use store::SessionLedger;
