//! Cache key builders for all BusDesk cache entries.
//!
//! Centralising key construction prevents typos and makes it easy
//! to find every key the application uses.

use busdesk_entity::Role;

/// Prefix applied to all BusDesk cache keys.
const PREFIX: &str = "busdesk";

/// Cache key for the per-role module capability map.
pub fn role_permissions(role: Role) -> String {
    format!("{PREFIX}:perm:role:{role}")
}
