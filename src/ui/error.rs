//! UI error types

use thiserror::Error;

/// Errors that can occur in UI operations
#[derive(Debug, Error)]
pub enum UiError {
    /// IO error during terminal operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Writing the print document failed
    #[error("Print failed: {0}")]
    PrintError(#[from] crate::print::PrintError),
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
