//! Identity domain entities.

pub mod credentials;
pub mod model;

pub use credentials::{Credentials, StoredCredentials};
pub use model::Identity;
