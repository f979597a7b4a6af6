//! Confirmation dialog for record deletion
//!
//! A modal overlay that asks the user to confirm before a QR code is
//! removed from the manual. Deletion never happens without this step.

use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// State for a pending delete confirmation
#[derive(Debug, Clone)]
pub struct ConfirmDelete {
    /// Id of the record to delete on confirmation
    pub id: String,
    /// Title shown in the dialog message
    pub title: String,
}

impl ConfirmDelete {
    /// Create a pending confirmation for the given record
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

/// Confirmation dialog overlay widget
pub struct ConfirmDialog<'a> {
    state: &'a ConfirmDelete,
    theme: &'a Theme,
}

impl<'a> ConfirmDialog<'a> {
    /// Create a new confirmation dialog widget
    #[must_use]
    pub const fn new(state: &'a ConfirmDelete, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    /// Calculate centered area for the modal
    fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;
        Rect::new(x, y, width.min(area.width), height.min(area.height))
    }
}

impl Widget for ConfirmDialog<'_> {
    #[allow(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        let message = format!("Delete \"{}\"?", self.state.title);
        let width = (message.chars().count() as u16 + 4)
            .clamp(40, 70)
            .min(area.width.saturating_sub(4));
        let height = 7;

        let modal_area = Self::centered_rect(width, height, area);

        // Clear background
        Clear.render(modal_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .title(" Delete QR Code ")
            .title_alignment(Alignment::Center);

        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let chunks = Layout::vertical([
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // Message
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // Buttons
            Constraint::Length(1), // Help
        ])
        .split(inner);

        let message_para = Paragraph::new(message)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::White));
        message_para.render(chunks[1], buf);

        let buttons = Line::from(vec![
            Span::styled(
                " [Y] Yes ",
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled(
                " [N] No ",
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        Paragraph::new(buttons)
            .alignment(Alignment::Center)
            .render(chunks[3], buf);

        let help = Paragraph::new("Y/Enter: confirm | N/ESC: cancel")
            .style(self.theme.dimmed_style())
            .alignment(Alignment::Center);
        help.render(chunks[4], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_delete_state_creation() {
        let state = ConfirmDelete::new("qr-001", "WiFi Access");
        assert_eq!(state.id, "qr-001");
        assert_eq!(state.title, "WiFi Access");
    }
}
