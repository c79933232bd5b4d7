//! Request-scoped view of a matched platform

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::platform::Platform;

/// What downstream handlers see of the platform that matched a request.
///
/// Lives for exactly one request and is never written back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedPlatform {
    pub id: i32,
    pub name: String,
    pub owner_id: String,
    pub config: Value,
    pub logo_url: Option<String>,
    pub is_custom_domain: bool,
    /// Hostname that produced the match.
    pub domain: String,
}

impl ResolvedPlatform {
    pub fn from_platform(platform: &Platform, domain: &str, is_custom_domain: bool) -> Self {
        Self {
            id: platform.id,
            name: platform.name.clone(),
            owner_id: platform.user_id.to_string(),
            config: platform.config.clone(),
            logo_url: platform.logo_url.clone(),
            is_custom_domain,
            domain: domain.to_string(),
        }
    }
}
