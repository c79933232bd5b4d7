//! Request middleware
//!
//! `resolve_platform` runs on every site route and attaches a
//! [`Resolution`](liquidlab_core::Resolution) to the request;
//! `require_platform` is layered on routes that only make sense for a tenant.

pub mod platform_guard;
pub mod platform_resolver;

pub use platform_guard::require_platform;
pub use platform_resolver::resolve_platform;
