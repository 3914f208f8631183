//! Common error types for chairscope

use thiserror::Error;

/// Common result type for chairscope operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the chairscope crates
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Review-platform lookup error (wraps PlatformError)
    #[error("Platform error: {0}")]
    Platform(#[from] crate::platform::PlatformError),
}
