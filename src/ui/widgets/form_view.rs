//! Create/edit form widget
//!
//! Draws the form fields with their validation errors and a live QR
//! preview of the current content. The preview re-renders on every frame
//! from the untrimmed input, with a placeholder while the content is
//! empty; it is a pure function of the form state.

use crate::dashboard::{FormField, FormState};
use crate::manual::MAX_CONTENT_CHARS;
use crate::qr::{self, Palette};
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Form widget for creating or editing a record
pub struct FormView<'a> {
    form: &'a FormState,
    theme: &'a Theme,
}

impl<'a> FormView<'a> {
    /// Create a new form widget
    #[must_use]
    pub const fn new(form: &'a FormState, theme: &'a Theme) -> Self {
        Self { form, theme }
    }

    fn field_border(&self, field: FormField) -> ratatui::style::Style {
        if self.form.focus == field {
            self.theme.focused_border_style()
        } else {
            self.theme.border_style()
        }
    }

    /// Input line with a block cursor appended while focused
    fn input_line(&self, value: &str, field: FormField) -> Line<'static> {
        let mut spans = vec![Span::raw(value.to_string())];
        if self.form.focus == field {
            spans.push(Span::styled("█", self.theme.dimmed_style()));
        }
        Line::from(spans)
    }

    fn error_line(message: Option<&String>, theme: &Theme) -> Line<'static> {
        message.map_or_else(
            || Line::raw(""),
            |msg| Line::styled(msg.clone(), theme.error_style()),
        )
    }

    fn render_fields(&self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::vertical([
            Constraint::Length(2), // Header
            Constraint::Length(3), // Title input
            Constraint::Length(1), // Title error
            Constraint::Length(3), // Use-case selector
            Constraint::Length(2), // Use-case description / error
            Constraint::Length(3), // Content input
            Constraint::Length(1), // Char count / content error
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // Submit
            Constraint::Min(0),
        ])
        .split(area);

        // Header
        let (title, subtitle) = if self.form.is_edit() {
            ("Edit QR Code", "Update the details below to regenerate your QR code")
        } else {
            ("Create a New QR Code", "Fill in the details below to generate your QR code")
        };
        let header = Paragraph::new(vec![
            Line::styled(title, self.theme.cursor_style()),
            Line::styled(subtitle, self.theme.dimmed_style()),
        ]);
        header.render(chunks[0], buf);

        // Title
        let title_block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.field_border(FormField::Title))
            .title(" Title ");
        let title_inner = title_block.inner(chunks[1]);
        title_block.render(chunks[1], buf);
        Paragraph::new(self.input_line(&self.form.title, FormField::Title))
            .render(title_inner, buf);
        Paragraph::new(Self::error_line(self.form.errors.title.as_ref(), self.theme))
            .render(chunks[2], buf);

        // Use case selector
        let use_case_block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.field_border(FormField::UseCase))
            .title(" Use case ");
        let use_case_inner = use_case_block.inner(chunks[3]);
        use_case_block.render(chunks[3], buf);
        let selector = self.form.selected_use_case().map_or_else(
            || Line::styled("Choose a use case...", self.theme.dimmed_style()),
            |uc| {
                Line::from(vec![
                    Span::styled("◂ ", self.theme.dimmed_style()),
                    Span::raw(uc.name),
                    Span::styled(" ▸", self.theme.dimmed_style()),
                ])
            },
        );
        Paragraph::new(selector).render(use_case_inner, buf);

        // Description of the current choice, or the validation error
        let caption = if let Some(msg) = &self.form.errors.use_case {
            Line::styled(msg.clone(), self.theme.error_style())
        } else if let Some(uc) = self.form.selected_use_case() {
            Line::styled(uc.description, self.theme.dimmed_style())
        } else {
            Line::raw("")
        };
        Paragraph::new(caption).render(chunks[4], buf);

        // Content
        let content_block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.field_border(FormField::Content))
            .title(" Content ");
        let content_inner = content_block.inner(chunks[5]);
        content_block.render(chunks[5], buf);
        Paragraph::new(self.input_line(&self.form.content, FormField::Content))
            .render(content_inner, buf);

        let mut footer = vec![Span::styled(
            format!("{}/{MAX_CONTENT_CHARS} characters", self.form.content_chars()),
            self.theme.dimmed_style(),
        )];
        if let Some(msg) = &self.form.errors.content {
            footer.push(Span::raw("  "));
            footer.push(Span::styled(msg.clone(), self.theme.error_style()));
        }
        Paragraph::new(Line::from(footer)).render(chunks[6], buf);

        // Submit control
        let submit_label = if self.form.is_edit() {
            " Save Changes "
        } else {
            " Create QR Code "
        };
        let submit_style = if self.form.focus == FormField::Submit {
            self.theme.cursor_style()
        } else {
            self.theme.dimmed_style()
        };
        Paragraph::new(Line::styled(submit_label, submit_style)).render(chunks[8], buf);
    }

    fn render_preview(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(" Preview ");
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 {
            return;
        }

        let lines: Vec<Line> = if self.form.content.is_empty() {
            let mut lines: Vec<Line> = qr::PLACEHOLDER
                .lines()
                .map(|l| Line::styled(l.to_string(), self.theme.dimmed_style()))
                .collect();
            lines.push(Line::raw(""));
            lines.push(Line::styled(
                "Enter content to preview",
                self.theme.dimmed_style(),
            ));
            lines
        } else {
            match qr::render_lines(&self.form.content, Palette::Terminal) {
                Ok(qr_lines) => qr_lines.into_iter().map(Line::raw).collect(),
                Err(_) => vec![Line::styled(
                    "Content too long to encode",
                    self.theme.error_style(),
                )],
            }
        };

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}

impl Widget for FormView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(area);

        self.render_fields(chunks[0], buf);
        self.render_preview(chunks[1], buf);
    }
}
