//! Module permission domain entities.

pub mod capabilities;
pub mod model;

pub use capabilities::{Capabilities, CapabilityField};
pub use model::ModulePermission;
