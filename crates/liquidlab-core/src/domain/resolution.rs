//! Per-request resolution outcome

use super::resolved_platform::ResolvedPlatform;

/// Result of running the domain resolver against one request.
///
/// Every request starts unresolved. A guard turns anything other than
/// `Resolved` into "Platform not found".
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// Host or path is exempt; no lookup was made.
    Exempt,
    Resolved(ResolvedPlatform),
    /// Lookup ran (or could not run) and produced nothing.
    Unresolved,
}

impl Resolution {
    pub fn platform(&self) -> Option<&ResolvedPlatform> {
        match self {
            Resolution::Resolved(platform) => Some(platform),
            _ => None,
        }
    }

    pub fn into_platform(self) -> Option<ResolvedPlatform> {
        match self {
            Resolution::Resolved(platform) => Some(platform),
            _ => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Resolved(_))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Resolution::Exempt => "exempt",
            Resolution::Resolved(_) => "resolved",
            Resolution::Unresolved => "unresolved",
        }
    }
}
