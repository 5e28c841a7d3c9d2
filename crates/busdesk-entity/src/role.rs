//! Staff role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles available in the BusDesk back office.
///
/// `Admin` is the highest-privilege role: it is always treated as fully
/// permitted by the permission checker and its matrix rows are not
/// editable. A user's role is assigned upstream and is immutable for
/// the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "staff_role", rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    /// Full system administrator.
    Admin,
    /// Oversees trips, vehicles, fuel, maintenance, and staff.
    OperationsManager,
    /// Point-of-sale operator: ticketing, shipments, counter sessions.
    PosOperator,
    /// Finance operator: expenses, payroll, accounting.
    FinanceOperator,
    /// Technical operator: vehicles, fuel, maintenance.
    TechnicalOperator,
}

impl Role {
    /// All roles, in privilege order (highest first). Drives the fixed
    /// row universe of the permission matrix.
    pub const ALL: [Role; 5] = [
        Role::Admin,
        Role::OperationsManager,
        Role::PosOperator,
        Role::FinanceOperator,
        Role::TechnicalOperator,
    ];

    /// Check if this role is the administrator.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Return the role as a kebab-case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::OperationsManager => "operations-manager",
            Self::PosOperator => "pos-operator",
            Self::FinanceOperator => "finance-operator",
            Self::TechnicalOperator => "technical-operator",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = busdesk_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "operations-manager" => Ok(Self::OperationsManager),
            "pos-operator" => Ok(Self::PosOperator),
            "finance-operator" => Ok(Self::FinanceOperator),
            "technical-operator" => Ok(Self::TechnicalOperator),
            _ => Err(busdesk_core::AppError::validation(format!(
                "Invalid role: '{s}'. Expected one of: admin, operations-manager, \
                 pos-operator, finance-operator, technical-operator"
            ))),
        }
    }
}
