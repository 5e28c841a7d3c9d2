//! # busdesk-entity
//!
//! Domain entity models and closed enumerations for Rivera BusDesk:
//! staff roles, business modules, and the persisted module permission
//! matrix rows.

pub mod module;
pub mod permission;
pub mod role;

pub use module::AppModule;
pub use permission::{Capabilities, CapabilityField, ModulePermission};
pub use role::Role;
