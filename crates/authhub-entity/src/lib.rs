//! # authhub-entity
//!
//! Domain entity models for AuthHub. Every struct in this crate is either a
//! stored record (an [`Identity`](identity::Identity)) or a transient value
//! object (credentials, token claims). All derive `Debug`, `Clone`,
//! `Serialize`, and `Deserialize`.

pub mod identity;
pub mod token;
