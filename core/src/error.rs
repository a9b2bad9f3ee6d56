//! Error types for the portwatch-core library.

use thiserror::Error;

/// Result type alias for portwatch operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while collecting port information.
///
/// Only failures of the status command itself surface here. Malformed
/// output lines and failed process-name lookups never become errors.
#[derive(Error, Debug)]
pub enum Error {
    /// A system command could not be spawned or exited non-zero.
    #[error("Command execution failed: {0}")]
    CommandFailed(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Platform not supported.
    #[error("Platform not supported: {0}")]
    UnsupportedPlatform(String),
}
