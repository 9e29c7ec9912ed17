//! Error types for talangin_app

use talangin_content::ContentError;
use talangin_platform::PlatformError;
use thiserror::Error;

/// Errors that can occur while starting or driving the page
#[derive(Error, Debug)]
pub enum AppError {
    /// Bundled content or translations failed to load
    #[error("Content error: {0}")]
    Content(#[from] ContentError),

    /// Host environment error
    #[error("Platform error: {0}")]
    Platform(#[from] PlatformError),

    /// Site configuration could not be read
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Other(format!("{err:#}"))
    }
}

/// Result type for talangin_app operations
pub type Result<T> = std::result::Result<T, AppError>;
