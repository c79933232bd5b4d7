//! # LiquidLab Shared
//!
//! Configuration, telemetry, and constants shared by every LiquidLab crate.

pub mod constants;
pub mod telemetry;
pub mod config;
pub mod error;

pub use config::{AppConfig, FailurePolicy, TenancySettings};
pub use error::AppError;
