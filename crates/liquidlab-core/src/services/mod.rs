//! Domain services (business logic)

pub mod domain_resolver;

pub use domain_resolver::DomainResolver;
