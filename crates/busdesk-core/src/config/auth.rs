//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// JWT token configuration.
///
/// Authentication itself happens upstream; BusDesk only validates the
/// signed role claim attached to incoming requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// HMAC secret for signing and verifying access tokens.
    pub jwt_secret: String,
    /// Access token TTL in minutes.
    #[serde(default = "default_access_ttl")]
    pub jwt_access_ttl_minutes: u64,
}

fn default_access_ttl() -> u64 {
    60
}
