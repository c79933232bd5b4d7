// ============================================================================
// LiquidLab Infrastructure - PostgreSQL Platform Repository
// File: crates/liquidlab-infrastructure/src/database/postgres/platform_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::{types::Json, FromRow, PgPool};
use tracing::error;

use liquidlab_core::domain::Platform;
use liquidlab_core::error::DomainError;
use liquidlab_core::repositories::PlatformRepository;

pub struct PgPlatformRepository {
    pool: PgPool,
}

impl PgPlatformRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct PlatformRow {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub subdomain: String,
    pub custom_domain: Option<String>,
    pub config: Json<Value>,
    pub logo_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<PlatformRow> for Platform {
    fn from(row: PlatformRow) -> Self {
        Platform {
            id: row.id,
            user_id: row.user_id,
            name: row.name,
            subdomain: row.subdomain,
            custom_domain: row.custom_domain,
            config: row.config.0,
            logo_url: row.logo_url,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl PlatformRepository for PgPlatformRepository {
    async fn find_by_subdomain(&self, subdomain: &str) -> Result<Option<Platform>, DomainError> {
        let row: Option<PlatformRow> = sqlx::query_as(
            r#"
            SELECT
                id, user_id, name, subdomain, custom_domain,
                config, logo_url, created_at, updated_at
            FROM platforms
            WHERE subdomain = $1
            LIMIT 1
            "#
        )
        .bind(subdomain)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding platform by subdomain: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(|r| r.into()))
    }

    async fn find_by_custom_domain(&self, domain: &str) -> Result<Option<Platform>, DomainError> {
        let row: Option<PlatformRow> = sqlx::query_as(
            r#"
            SELECT
                id, user_id, name, subdomain, custom_domain,
                config, logo_url, created_at, updated_at
            FROM platforms
            WHERE custom_domain = $1
            LIMIT 1
            "#
        )
        .bind(domain)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding platform by custom domain: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(|r| r.into()))
    }

    async fn ping(&self) -> Result<(), DomainError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;
        Ok(())
    }
}
