//! Repository traits (ports)

pub mod platform_repository;

pub use platform_repository::PlatformRepository;

#[cfg(test)]
pub use platform_repository::MockPlatformRepository;
