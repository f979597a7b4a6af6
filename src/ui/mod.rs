//! Terminal UI for the dashboard
//!
//! The ratatui rendering layer. All dashboard semantics live in
//! [`crate::dashboard`]; this module owns the terminal lifecycle, key
//! handling, and the widgets that draw the session state.

pub mod app;
pub mod error;
pub mod theme;
pub mod widgets;

pub use app::DashboardApp;
pub use theme::Theme;
