use thiserror::Error;
use crate::fetcher::FetchError;
use crate::form::FormError;
use super::config::ConfigError;

/// Errors that stop the application.
#[derive(Debug, Error)]
pub enum SystemError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Form(#[from] FormError),
    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Actor task failed: {0}")]
    Join(String),
}
