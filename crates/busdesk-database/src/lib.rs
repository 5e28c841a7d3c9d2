//! # busdesk-database
//!
//! PostgreSQL connection management and permission store implementations
//! for Rivera BusDesk. The [`store::PermissionStore`] trait is the
//! external-storage boundary of the RBAC subsystem; the Postgres
//! implementation backs production and the in-memory implementation backs
//! tests.

pub mod connection;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use store::{MemoryPermissionStore, PermissionStore};
