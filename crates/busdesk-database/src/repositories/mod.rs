//! Concrete repository implementations backed by PostgreSQL.

pub mod permission;

pub use permission::PermissionRepository;
