//! # LiquidLab API
//!
//! HTTP layer: platform resolution middleware, the platform guard,
//! extractors, handlers, and the router.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;

#[cfg(test)]
mod test_support;
