//! # LiquidLab Core - Domain Module
//!
//! Platform entities and hostname rules.

pub mod platform;
pub mod resolved_platform;
pub mod resolution;
pub mod host;

pub use platform::Platform;
pub use resolved_platform::ResolvedPlatform;
pub use resolution::Resolution;
pub use host::{normalize_host, HostClass, ResolutionRules};
