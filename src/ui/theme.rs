//! Color theme definitions for the dashboard TUI
//!
//! Defines colors and styles used throughout the application.

use crate::dashboard::Severity;
use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Background color for the card under the cursor
    pub cursor_bg: Color,
    /// Foreground color for the card under the cursor
    pub cursor_fg: Color,
    /// Color for selection markers
    pub selected: Color,
    /// Color for success messages
    pub success: Color,
    /// Color for error messages
    pub error: Color,
    /// Color for warning messages
    pub warning: Color,
    /// Color for info messages
    pub info: Color,
    /// Color for borders
    pub border: Color,
    /// Color for dimmed/secondary text
    pub dimmed: Color,
    /// Color for use-case captions
    pub caption: Color,
    /// Color for the focused form field
    pub focus: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Create a dark theme (default)
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            cursor_bg: Color::Blue,
            cursor_fg: Color::White,
            selected: Color::Green,
            success: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,
            info: Color::Cyan,
            border: Color::DarkGray,
            dimmed: Color::DarkGray,
            caption: Color::Magenta,
            focus: Color::Cyan,
        }
    }

    /// Style for the card or row under the cursor
    #[must_use]
    pub fn cursor_style(&self) -> Style {
        Style::default()
            .bg(self.cursor_bg)
            .fg(self.cursor_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for unhighlighted text
    #[must_use]
    pub fn normal_style(&self) -> Style {
        Style::default()
    }

    /// Style for selection markers
    #[must_use]
    pub fn selected_style(&self) -> Style {
        Style::default()
            .fg(self.selected)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for borders
    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Style for the border of the focused pane or field
    #[must_use]
    pub fn focused_border_style(&self) -> Style {
        Style::default().fg(self.focus).add_modifier(Modifier::BOLD)
    }

    /// Style for dimmed text
    #[must_use]
    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.dimmed)
    }

    /// Style for use-case captions
    #[must_use]
    pub fn caption_style(&self) -> Style {
        Style::default().fg(self.caption)
    }

    /// Style for validation error lines
    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Style for a toast of the given severity
    #[must_use]
    pub fn severity_style(&self, severity: Severity) -> Style {
        let color = match severity {
            Severity::Success => self.success,
            Severity::Error => self.error,
            Severity::Warning => self.warning,
            Severity::Info => self.info,
        };
        Style::default().fg(color)
    }

    /// Prefix glyph for a toast of the given severity
    #[must_use]
    pub const fn severity_prefix(severity: Severity) -> &'static str {
        match severity {
            Severity::Success => "✓ ",
            Severity::Error => "✗ ",
            Severity::Warning => "⚠ ",
            Severity::Info => "ℹ ",
        }
    }
}
