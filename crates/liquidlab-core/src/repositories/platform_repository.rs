//! Platform repository trait (port)

use async_trait::async_trait;

use crate::domain::Platform;
use crate::error::DomainError;

/// Read-only lookups against the platform store.
///
/// Both finders are exact matches expected to return at most one row.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlatformRepository: Send + Sync {
    async fn find_by_subdomain(&self, subdomain: &str) -> Result<Option<Platform>, DomainError>;
    async fn find_by_custom_domain(&self, domain: &str) -> Result<Option<Platform>, DomainError>;
    /// Round-trip to the store, used by readiness checks.
    async fn ping(&self) -> Result<(), DomainError>;
}
