//! Status bar widget for displaying toast notifications

use crate::dashboard::Toast;
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Status bar widget that displays live toasts, newest at the bottom
pub struct StatusBar<'a> {
    /// Active toasts in creation order
    toasts: &'a [&'a Toast],
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    /// Create a new status bar widget
    #[must_use]
    pub const fn new(toasts: &'a [&'a Toast], theme: &'a Theme) -> Self {
        Self { toasts, theme }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(" Notifications ");

        let inner = block.inner(area);
        block.render(area, buf);

        if self.toasts.is_empty() || inner.height == 0 {
            return;
        }

        // Keep the most recent toasts that fit the inner area
        let visible = inner.height as usize;
        let start = self.toasts.len().saturating_sub(visible);

        let lines: Vec<Line> = self.toasts[start..]
            .iter()
            .map(|toast| {
                let style = self.theme.severity_style(toast.severity);
                Line::from(vec![
                    Span::styled(Theme::severity_prefix(toast.severity), style),
                    Span::styled(toast.message.as_str(), style),
                ])
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}
