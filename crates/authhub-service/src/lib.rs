//! # authhub-service
//!
//! Business workflows for AuthHub. [`AuthService`] orchestrates the
//! tokenizer, user directory, and session ledger; every dependency is
//! injected at construction time as an `Arc`.

pub mod auth;

pub use auth::{AuthService, IntrospectionReport};
