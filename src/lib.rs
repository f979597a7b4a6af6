//! qrdash - a terminal dashboard for house-manual QR codes
//!
//! This library holds the whole dashboard core as plain, testable state:
//! the record model, the use-case catalog, form validation, selection
//! bookkeeping, the dashboard mode machine, toast notifications, and
//! print-layout composition. The `ui` module renders that state with
//! ratatui; the binary wires it to a JSON-backed house manual file.

use thiserror::Error;

pub mod catalog;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod manual;
pub mod print;
pub mod qr;
pub mod ui;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum QrDashError {
    /// House manual load/save error
    #[error("Manual error: {0}")]
    Manual(#[from] manual::ManualError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// Print composition error
    #[error("Print error: {0}")]
    Print(#[from] print::PrintError),
    /// QR encoding error
    #[error("QR encoding error: {0}")]
    Qr(#[from] qr::QrImageError),
    /// Terminal UI error
    #[error("UI error: {0}")]
    Ui(#[from] ui::error::UiError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
