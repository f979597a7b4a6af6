//! Widgets for the dashboard TUI

mod card_grid;
mod confirm_dialog;
mod form_view;
mod help_bar;
mod preview_pane;
mod status_bar;

pub use card_grid::{CardGrid, GRID_COLUMNS};
pub use confirm_dialog::{ConfirmDelete, ConfirmDialog};
pub use form_view::FormView;
pub use help_bar::{HelpBar, KeyHint};
pub use preview_pane::PreviewPane;
pub use status_bar::StatusBar;
