//! Card grid widget for the record collection
//!
//! Renders one card per record (QR symbol, title, use-case caption, and a
//! selection marker) plus a trailing "add new" card. An empty collection
//! gets a dedicated empty state whose only call to action is add-new. The
//! cursor can sit on any card including the add card; the grid itself never
//! mutates anything.

use crate::dashboard::SelectionSet;
use crate::manual::QrRecord;
use crate::qr::{self, Palette};
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Cards per grid row
pub const GRID_COLUMNS: usize = 3;

/// Height of one card row in terminal cells
const CARD_HEIGHT: u16 = 14;

/// Grid of QR code cards with a trailing add-new card
pub struct CardGrid<'a> {
    records: &'a [QrRecord],
    selection: &'a SelectionSet,
    /// Cursor cell: record index, or `records.len()` for the add card
    cursor: usize,
    theme: &'a Theme,
}

impl<'a> CardGrid<'a> {
    /// Create a new card grid widget
    #[must_use]
    pub const fn new(
        records: &'a [QrRecord],
        selection: &'a SelectionSet,
        cursor: usize,
        theme: &'a Theme,
    ) -> Self {
        Self {
            records,
            selection,
            cursor,
            theme,
        }
    }

    fn render_empty_state(&self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::raw(""),
            Line::styled("No QR codes added...", self.theme.normal_style()),
            Line::styled(
                "Create your first QR code for this house manual",
                self.theme.dimmed_style(),
            ),
            Line::raw(""),
            Line::styled(" + Add QR Code ", self.theme.cursor_style()),
            Line::raw(""),
            Line::styled("press Enter or 'a' to begin", self.theme.dimmed_style()),
        ];

        let para = Paragraph::new(lines).alignment(Alignment::Center);
        let y = area.y + area.height.saturating_sub(7) / 2;
        let centered = Rect::new(area.x, y, area.width, 7.min(area.height));
        para.render(centered, buf);
    }

    fn render_record_card(&self, record: &QrRecord, is_cursor: bool, area: Rect, buf: &mut Buffer) {
        let selected = self.selection.contains(&record.id);

        let border_style = if is_cursor {
            self.theme.focused_border_style()
        } else if selected {
            self.theme.selected_style()
        } else {
            self.theme.border_style()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" {} ", record.title));

        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 {
            return;
        }

        let marker = if selected {
            Span::styled("[✓] selected", self.theme.selected_style())
        } else {
            Span::styled("[ ]", self.theme.dimmed_style())
        };

        let mut lines = vec![
            Line::from(marker),
            Line::styled(record.use_case_name.clone(), self.theme.caption_style()),
        ];

        match qr::render_lines(&record.content, Palette::Terminal) {
            Ok(qr_lines) => {
                // Clipped to the card; scanning happens from the preview
                lines.extend(qr_lines.into_iter().map(Line::raw));
            }
            Err(_) => lines.push(Line::styled(
                "(content not encodable)",
                self.theme.error_style(),
            )),
        }

        Paragraph::new(lines).render(inner, buf);
    }

    fn render_add_card(&self, is_cursor: bool, area: Rect, buf: &mut Buffer) {
        let border_style = if is_cursor {
            self.theme.focused_border_style()
        } else {
            self.theme.border_style()
        };

        let block = Block::default().borders(Borders::ALL).border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = vec![
            Line::raw(""),
            Line::styled("+", self.theme.dimmed_style()),
            Line::raw(""),
            Line::styled(
                "Add QR Code",
                if is_cursor {
                    self.theme.cursor_style()
                } else {
                    self.theme.normal_style()
                },
            ),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}

impl Widget for CardGrid<'_> {
    #[allow(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.records.is_empty() {
            self.render_empty_state(area, buf);
            return;
        }
        if area.width < 10 || area.height < 3 {
            return;
        }

        let cell_count = self.records.len() + 1;
        let card_width = area.width / GRID_COLUMNS as u16;
        let visible_rows = (area.height / CARD_HEIGHT).max(1) as usize;

        // Keep the cursor row on screen
        let cursor_row = self.cursor / GRID_COLUMNS;
        let first_row = cursor_row.saturating_sub(visible_rows - 1);

        for cell in 0..cell_count {
            let row = cell / GRID_COLUMNS;
            if row < first_row || row >= first_row + visible_rows {
                continue;
            }
            let col = cell % GRID_COLUMNS;

            let cell_area = Rect::new(
                area.x + col as u16 * card_width,
                area.y + (row - first_row) as u16 * CARD_HEIGHT,
                card_width,
                CARD_HEIGHT.min(area.height.saturating_sub((row - first_row) as u16 * CARD_HEIGHT)),
            );
            if cell_area.height == 0 {
                continue;
            }

            let is_cursor = cell == self.cursor;
            if let Some(record) = self.records.get(cell) {
                self.render_record_card(record, is_cursor, cell_area, buf);
            } else {
                self.render_add_card(is_cursor, cell_area, buf);
            }
        }
    }
}
