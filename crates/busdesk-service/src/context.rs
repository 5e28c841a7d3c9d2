//! Request context carrying the authenticated staff member and role.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use busdesk_entity::Role;

/// Context for the current authenticated request.
///
/// Extracted from the access token and passed into service methods so
/// that every operation knows *who* is acting. No module-level mutable
/// state anywhere; the context is constructed per request and dropped
/// with it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated staff member's ID.
    pub user_id: Uuid,
    /// The role at the time the JWT was issued.
    pub role: Role,
    /// Display name (convenience field from JWT claims).
    pub name: String,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: Uuid, role: Role, name: String) -> Self {
        Self {
            user_id,
            role,
            name,
            request_time: Utc::now(),
        }
    }

    /// Returns whether the current staff member is an administrator.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
