//! # busdesk-service
//!
//! Business services for the Rivera BusDesk back office.
//!
//! ## Modules
//!
//! - `context` — per-request context carrying the authenticated staff
//!   member and role
//! - `permission` — admin-facing matrix view and single-flag updates

pub mod context;
pub mod permission;

pub use context::RequestContext;
pub use permission::PermissionAdminService;
