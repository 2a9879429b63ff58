use thiserror::Error;

/// Errors that can occur while fetching a user record.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("User service returned status {0}")]
    Status(u16),
    #[error("Could not decode user record: {0}")]
    Decode(String),
    #[error("Invalid user service URL: {0}")]
    InvalidUrl(String),
}
