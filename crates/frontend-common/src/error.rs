//! Application-level error type

use crate::router::NavigationError;
use crate::storage::StorageError;
use petcare_http::ClientError;
use thiserror::Error;

/// Errors raised while assembling or driving the application shell
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Navigation(#[from] NavigationError),
}

pub type Result<T> = std::result::Result<T, AppError>;
