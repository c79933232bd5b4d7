//! Application-wide constants

/// Root marketing domain. Requests for it never resolve a platform.
pub const DEFAULT_MAIN_DOMAIN: &str = "liquidlab.trade";

/// Hostname used for local development; always exempt from resolution.
pub const LOCALHOST: &str = "localhost";

/// Suffixes that mark a hostname as `<subdomain>.<platform domain>`.
pub const DEFAULT_SUBDOMAIN_SUFFIXES: [&str; 2] = [".liquidlab.trade", ".liquidlab.app"];

pub const DEFAULT_API_PREFIX: &str = "/api";
pub const DEFAULT_ADMIN_PREFIX: &str = "/admin";

pub const PLATFORM_NOT_FOUND_MESSAGE: &str = "Platform not found";

pub const ENV_PREFIX: &str = "LIQUIDLAB";
pub const DEFAULT_LOG_FILTER: &str = "info,liquidlab=debug";
