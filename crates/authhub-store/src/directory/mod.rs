//! Identity storage.

pub mod memory;
pub mod store;

pub use memory::MemoryUserDirectory;
pub use store::UserDirectory;
