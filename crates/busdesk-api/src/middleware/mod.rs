//! HTTP middleware.

pub mod cors;
pub mod rbac;

pub use rbac::require_admin;
