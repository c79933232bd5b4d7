//! # LiquidLab Core
//!
//! Platform entities, hostname classification, the platform repository port,
//! and the domain resolver service.

pub mod domain;
pub mod services;
pub mod repositories;
pub mod error;

// Re-export domain entities
pub use domain::*;
pub use error::DomainError;
