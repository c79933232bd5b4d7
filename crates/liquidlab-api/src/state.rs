use std::sync::Arc;

use liquidlab_core::domain::ResolutionRules;
use liquidlab_core::repositories::PlatformRepository;
use liquidlab_core::services::DomainResolver;
use liquidlab_shared::config::AppConfig;

/// Shared handler state, built once at startup and cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<DomainResolver>,
    pub platforms: Arc<dyn PlatformRepository>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(platforms: Arc<dyn PlatformRepository>, config: AppConfig) -> Self {
        let resolver = DomainResolver::new(
            platforms.clone(),
            ResolutionRules::from(&config.tenancy),
            config.tenancy.failure_policy,
        );

        Self {
            resolver: Arc::new(resolver),
            platforms,
            config: Arc::new(config),
        }
    }
}
