//! Print preview widget
//!
//! Renders the preview snapshot the way the printed document will look:
//! one block per record with its QR symbol and title, in collection order.
//! The pane scrolls by whole lines; the snapshot itself never changes
//! while preview mode is open.

use crate::manual::QrRecord;
use crate::qr::{self, Palette};
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Scrollable print preview of a selection snapshot
pub struct PreviewPane<'a> {
    records: &'a [QrRecord],
    manual_name: &'a str,
    scroll: u16,
    theme: &'a Theme,
}

impl<'a> PreviewPane<'a> {
    /// Create a new preview pane
    #[must_use]
    pub const fn new(
        records: &'a [QrRecord],
        manual_name: &'a str,
        scroll: u16,
        theme: &'a Theme,
    ) -> Self {
        Self {
            records,
            manual_name,
            scroll,
            theme,
        }
    }

    /// Total number of composed lines, for scroll clamping
    #[must_use]
    pub fn line_count(records: &[QrRecord]) -> usize {
        records
            .iter()
            .map(|record| {
                // Title + caption + blank + symbol + trailing blank
                4 + qr::render_lines(&record.content, Palette::Terminal)
                    .map_or(1, |lines| lines.len())
            })
            .sum()
    }
}

impl Widget for PreviewPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(format!(" Print Preview - {} ", self.manual_name));

        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 {
            return;
        }

        let mut lines: Vec<Line> = Vec::new();
        for record in self.records {
            lines.push(Line::styled(
                record.title.clone(),
                self.theme.cursor_style(),
            ));
            lines.push(Line::styled(
                record.use_case_name.clone(),
                self.theme.caption_style(),
            ));
            lines.push(Line::raw(""));
            match qr::render_lines(&record.content, Palette::Terminal) {
                Ok(qr_lines) => lines.extend(qr_lines.into_iter().map(Line::raw)),
                Err(_) => lines.push(Line::styled(
                    "(content not encodable)",
                    self.theme.error_style(),
                )),
            }
            lines.push(Line::raw(""));
        }

        Paragraph::new(lines)
            .scroll((self.scroll, 0))
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_line_count_covers_all_records() {
        let now = Utc::now();
        let records: Vec<QrRecord> = (0..2)
            .map(|i| QrRecord {
                id: format!("qr-{i}"),
                title: format!("Record {i}"),
                content: "https://example.com".to_string(),
                use_case_id: "uc-002".to_string(),
                use_case_name: "House Rules".to_string(),
                manual_id: "hm-001".to_string(),
                created_at: now,
                updated_at: now,
            })
            .collect();

        let total = PreviewPane::line_count(&records);
        let single = PreviewPane::line_count(&records[..1]);
        assert_eq!(total, single * 2);
        assert!(single > 4);
    }
}
