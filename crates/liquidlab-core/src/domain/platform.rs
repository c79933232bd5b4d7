// ============================================================================
// LiquidLab Core - Platform Entity
// File: crates/liquidlab-core/src/domain/platform.rs
// Description: Stored white-label trading platform (tenant) record
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Platform entity, one branded trading site.
///
/// `subdomain` and `custom_domain` are unique in storage; this crate only
/// ever reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub id: i32,
    pub user_id: i32,
    pub name: String,

    // Routing keys
    pub subdomain: String,
    pub custom_domain: Option<String>,

    // Presentation
    pub config: Value,
    pub logo_url: Option<String>,

    // Audit fields
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}
