//! RSA key chain loading.

pub mod chain;
pub mod provider;

pub use chain::{KeyChain, SIGNING_ALGORITHM};
pub use provider::FileKeyChainProvider;
