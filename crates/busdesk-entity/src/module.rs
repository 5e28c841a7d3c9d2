//! Business module enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Business areas that module permissions are scoped to.
///
/// Fixed enumeration, known at compile time. Together with [`crate::Role`]
/// it forms the row universe of the permission matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "app_module", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum AppModule {
    /// Passenger ticket sales.
    Ticketing,
    /// Parcel and shipment handling.
    Shipments,
    /// Trip planning and dispatch.
    Trips,
    /// Operating expenses.
    Expenses,
    /// Fuel purchases and consumption.
    Fuel,
    /// Vehicle maintenance records.
    Maintenance,
    /// Staff administration.
    Staff,
    /// Payroll runs.
    Payroll,
    /// Counter sessions and cash drawers.
    Counters,
    /// Reporting and exports.
    Reports,
    /// Accounting ledgers.
    Accounting,
}

impl AppModule {
    /// All modules, in the matrix display order.
    pub const ALL: [AppModule; 11] = [
        AppModule::Ticketing,
        AppModule::Shipments,
        AppModule::Trips,
        AppModule::Expenses,
        AppModule::Fuel,
        AppModule::Maintenance,
        AppModule::Staff,
        AppModule::Payroll,
        AppModule::Counters,
        AppModule::Reports,
        AppModule::Accounting,
    ];

    /// Return the module as a snake_case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ticketing => "ticketing",
            Self::Shipments => "shipments",
            Self::Trips => "trips",
            Self::Expenses => "expenses",
            Self::Fuel => "fuel",
            Self::Maintenance => "maintenance",
            Self::Staff => "staff",
            Self::Payroll => "payroll",
            Self::Counters => "counters",
            Self::Reports => "reports",
            Self::Accounting => "accounting",
        }
    }
}

impl fmt::Display for AppModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AppModule {
    type Err = busdesk_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AppModule::ALL
            .iter()
            .find(|m| m.as_str() == s.to_lowercase())
            .copied()
            .ok_or_else(|| {
                busdesk_core::AppError::validation(format!("Invalid module: '{s}'"))
            })
    }
}
