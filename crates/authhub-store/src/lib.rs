//! # authhub-store
//!
//! Volatile, process-local stores backing AuthHub:
//!
//! - `directory`: registered identities keyed by login email and by id
//! - `ledger`: the set of tokens currently considered logged in
//!
//! Both stores are exposed through async traits so the workflow layer can be
//! wired against other backends. The in-memory implementations guard every
//! read and write, so they can be shared freely across request tasks.

pub mod directory;
pub mod ledger;

pub use directory::{MemoryUserDirectory, UserDirectory};
pub use ledger::{MemorySessionLedger, SessionLedger};
