//! PostgreSQL repository implementations

pub mod platform_repo_impl;

pub use platform_repo_impl::PgPlatformRepository;
