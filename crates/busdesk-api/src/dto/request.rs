//! Request DTOs.

use serde::{Deserialize, Serialize};

use busdesk_entity::permission::CapabilityField;

/// Body of `PUT /api/permissions/{id}` — toggles one capability flag.
///
/// Each checkbox toggle is an independent request; there is no bulk
/// update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePermissionRequest {
    /// Which of the four flags to change.
    pub field: CapabilityField,
    /// The new value.
    pub value: bool,
}
