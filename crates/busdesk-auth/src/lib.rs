//! # busdesk-auth
//!
//! Role transport and access control for the Rivera BusDesk back office.
//!
//! ## Modules
//!
//! - `jwt` — JWT access-token creation and validation
//! - `rbac` — route-prefix access table and the cached module
//!   permission checker

pub mod jwt;
pub mod rbac;

pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use rbac::{PermissionChecker, allowed_routes, has_route_access};
