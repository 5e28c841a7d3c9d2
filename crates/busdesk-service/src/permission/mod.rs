//! Module permission administration.

pub mod admin;

pub use admin::PermissionAdminService;
