//! Core type definitions used across the AuthHub workspace.

pub mod id;

pub use id::*;
