//! Capability tuple and flag field definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The four independent booleans governing what a role may do within a
/// module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    /// May view the module's screens and data.
    pub can_view: bool,
    /// May create new records.
    pub can_create: bool,
    /// May edit existing records.
    pub can_edit: bool,
    /// May delete records.
    pub can_delete: bool,
}

impl Capabilities {
    /// The all-false tuple, returned whenever no record exists for a
    /// (role, module) pair. Guarantees the permission checker is total.
    pub const NONE: Capabilities = Capabilities {
        can_view: false,
        can_create: false,
        can_edit: false,
        can_delete: false,
    };

    /// The all-true tuple. The administrator role always resolves to this
    /// regardless of stored values.
    pub const FULL: Capabilities = Capabilities {
        can_view: true,
        can_create: true,
        can_edit: true,
        can_delete: true,
    };

    /// Read a single flag by field.
    pub fn get(&self, field: CapabilityField) -> bool {
        match field {
            CapabilityField::View => self.can_view,
            CapabilityField::Create => self.can_create,
            CapabilityField::Edit => self.can_edit,
            CapabilityField::Delete => self.can_delete,
        }
    }

    /// Write a single flag by field, leaving the other three untouched.
    pub fn set(&mut self, field: CapabilityField, value: bool) {
        match field {
            CapabilityField::View => self.can_view = value,
            CapabilityField::Create => self.can_create = value,
            CapabilityField::Edit => self.can_edit = value,
            CapabilityField::Delete => self.can_delete = value,
        }
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::NONE
    }
}

/// Names one of the four capability flags.
///
/// Updates target one flag at a time by field name; the wire and column
/// names are the `can_*` strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapabilityField {
    /// The `can_view` flag.
    #[serde(rename = "can_view")]
    View,
    /// The `can_create` flag.
    #[serde(rename = "can_create")]
    Create,
    /// The `can_edit` flag.
    #[serde(rename = "can_edit")]
    Edit,
    /// The `can_delete` flag.
    #[serde(rename = "can_delete")]
    Delete,
}

impl CapabilityField {
    /// Return the storage column name for this field.
    pub fn column_name(&self) -> &'static str {
        match self {
            Self::View => "can_view",
            Self::Create => "can_create",
            Self::Edit => "can_edit",
            Self::Delete => "can_delete",
        }
    }
}

impl fmt::Display for CapabilityField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.column_name())
    }
}

impl FromStr for CapabilityField {
    type Err = busdesk_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "can_view" | "view" => Ok(Self::View),
            "can_create" | "create" => Ok(Self::Create),
            "can_edit" | "edit" => Ok(Self::Edit),
            "can_delete" | "delete" => Ok(Self::Delete),
            _ => Err(busdesk_core::AppError::validation(format!(
                "Invalid capability field: '{s}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_all_false() {
        let caps = Capabilities::default();
        assert!(!caps.can_view && !caps.can_create && !caps.can_edit && !caps.can_delete);
    }

    #[test]
    fn test_set_targets_one_flag() {
        let mut caps = Capabilities::NONE;
        caps.set(CapabilityField::Create, true);
        assert!(caps.can_create);
        assert!(!caps.can_view && !caps.can_edit && !caps.can_delete);
    }

    #[test]
    fn test_field_parsing() {
        assert_eq!(
            "can_view".parse::<CapabilityField>().unwrap(),
            CapabilityField::View
        );
        assert_eq!(
            "delete".parse::<CapabilityField>().unwrap(),
            CapabilityField::Delete
        );
        assert!("can_export".parse::<CapabilityField>().is_err());
    }
}
