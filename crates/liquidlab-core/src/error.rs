//! Domain errors

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Missing host")]
    MissingHost,

    #[error("Malformed host: {0}")]
    MalformedHost(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
