//! Register, login, logout, introspect, and refresh workflows.

pub mod introspection;
pub mod service;

pub use introspection::IntrospectionReport;
pub use service::AuthService;
