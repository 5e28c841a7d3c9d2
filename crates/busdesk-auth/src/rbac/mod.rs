//! Role-based access control.
//!
//! Two layers: a static route-prefix table deciding which screens a role
//! may open, and a cached checker resolving the persisted per-module
//! capability matrix.

pub mod checker;
pub mod routes;

pub use checker::PermissionChecker;
pub use routes::{allowed_routes, has_route_access};
