//! Token-derived value objects.

pub mod claim;

pub use claim::{Claim, ClaimValue};
