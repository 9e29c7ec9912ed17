//! Platform error types

use thiserror::Error;

/// Platform-related errors
#[derive(Error, Debug)]
pub enum PlatformError {
    /// Host environment could not be reached (no window, no document)
    #[error("Platform not available: {0}")]
    Unavailable(String),

    /// Preference storage rejected a read or write
    #[error("Preference storage failed: {0}")]
    Storage(String),

    /// A DOM operation failed on the host
    #[error("DOM operation failed: {0}")]
    Dom(String),

    /// Generic platform error
    #[error("Platform error: {0}")]
    Other(String),
}

/// Result type for platform operations
pub type Result<T> = std::result::Result<T, PlatformError>;
