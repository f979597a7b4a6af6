//! Interactive dashboard application
//!
//! Owns the terminal lifecycle and the event loop, translating key events
//! into [`DashboardSession`] operations and drawing exactly one of the
//! grid, the form, or the print preview depending on the session mode.
//! The delete confirmation dialog is a UI overlay; the session only hears
//! about a delete once the user has confirmed it.

use crate::dashboard::{BackAction, DashboardMode, DashboardSession, FormField};
use crate::manual::HouseManual;
use crate::ui::error::Result;
use crate::ui::theme::Theme;
use crate::ui::widgets::{
    CardGrid, ConfirmDelete, ConfirmDialog, FormView, GRID_COLUMNS, HelpBar, KeyHint, PreviewPane,
    StatusBar,
};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::Paragraph,
};
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

/// Poll interval; also drives toast expiry between key events
const TICK: Duration = Duration::from_millis(100);

/// Interactive dashboard over a house manual
pub struct DashboardApp {
    session: DashboardSession,
    /// Grid cursor: record index, or the trailing add card
    cursor: usize,
    preview_scroll: u16,
    confirm: Option<ConfirmDelete>,
    theme: Theme,
    print_dir: PathBuf,
    should_exit: bool,
}

impl DashboardApp {
    /// Create a dashboard writing print documents under `print_dir`
    #[must_use]
    pub fn new(print_dir: PathBuf) -> Self {
        Self {
            session: DashboardSession::new(),
            cursor: 0,
            preview_scroll: 0,
            confirm: None,
            theme: Theme::default(),
            print_dir,
            should_exit: false,
        }
    }

    /// Run the dashboard until the user closes it
    ///
    /// The manual is mutated in memory through its upsert/remove
    /// operations; persisting it afterwards is the caller's concern.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be set up or drawn to.
    pub fn run(&mut self, manual: &mut HouseManual) -> Result<()> {
        let mut terminal = Self::setup_terminal()?;
        let result = self.run_loop(&mut terminal, manual);
        Self::cleanup_terminal()?;
        result
    }

    /// Setup terminal for TUI
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend).map_err(Into::into)
    }

    /// Cleanup terminal after TUI
    fn cleanup_terminal() -> Result<()> {
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        Ok(())
    }

    fn run_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        manual: &mut HouseManual,
    ) -> Result<()> {
        loop {
            self.session.tick();

            terminal.draw(|frame| self.render(frame, manual))?;

            if event::poll(TICK)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_key(key, manual);
                    }
                    _ => {}
                }
            }

            if self.should_exit {
                return Ok(());
            }
        }
    }

    // ------------------------------------------------------------------
    // Event handling
    // ------------------------------------------------------------------

    fn handle_key(&mut self, key: KeyEvent, manual: &mut HouseManual) {
        if self.confirm.is_some() {
            self.handle_confirm_key(key, manual);
            return;
        }

        // Close/back works everywhere: preview drops back to the grid,
        // any other mode hands control back to the host.
        if key.code == KeyCode::Char('q') && key.modifiers == KeyModifiers::CONTROL {
            match self.session.back() {
                BackAction::Exit => self.should_exit = true,
                BackAction::ReturnToView => self.preview_scroll = 0,
            }
            return;
        }

        match self.session.mode().clone() {
            DashboardMode::View => self.handle_view_key(key, manual),
            DashboardMode::Create | DashboardMode::Edit { .. } => {
                self.handle_form_key(key, manual);
            }
            DashboardMode::Preview => self.handle_preview_key(key, manual),
        }
    }

    fn handle_view_key(&mut self, key: KeyEvent, manual: &mut HouseManual) {
        let add_card = manual.len();
        match (key.code, key.modifiers) {
            (KeyCode::Esc | KeyCode::Char('q'), _) => {
                // Close delegates to the host
                self.should_exit = true;
            }
            (KeyCode::Left, _) => self.cursor = self.cursor.saturating_sub(1),
            (KeyCode::Right, _) => self.cursor = (self.cursor + 1).min(add_card),
            (KeyCode::Up, _) => self.cursor = self.cursor.saturating_sub(GRID_COLUMNS),
            (KeyCode::Down, _) => self.cursor = (self.cursor + GRID_COLUMNS).min(add_card),
            (KeyCode::Enter | KeyCode::Char(' '), _) => {
                if self.cursor == add_card {
                    self.session.begin_create(manual);
                } else if let Some(record) = manual.records.get(self.cursor) {
                    let id = record.id.clone();
                    self.session.toggle_select(&id);
                }
            }
            (KeyCode::Char('a'), _) => self.session.begin_create(manual),
            (KeyCode::Char('e'), _) => {
                if let Some(record) = manual.records.get(self.cursor) {
                    self.session.begin_edit(record.clone());
                }
            }
            (KeyCode::Char('d'), _) => {
                if let Some(record) = manual.records.get(self.cursor) {
                    self.confirm = Some(ConfirmDelete::new(&record.id, &record.title));
                }
            }
            (KeyCode::Char('s'), _) => self.session.toggle_select_all(manual),
            (KeyCode::Char('p'), _) => {
                if self.session.request_preview(manual) {
                    self.preview_scroll = 0;
                }
            }
            (KeyCode::Char('P'), _) => self.write_print_document(manual),
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent, manual: &mut HouseManual) {
        match (key.code, key.modifiers) {
            (KeyCode::Esc, _) => self.session.cancel_form(),
            (KeyCode::Char('s'), KeyModifiers::CONTROL) => {
                if self.session.submit_form(manual) {
                    self.clamp_cursor(manual);
                }
            }
            (KeyCode::Tab, _) => {
                if let Some(form) = self.session.form_mut() {
                    form.focus_next();
                }
            }
            (KeyCode::BackTab, _) => {
                if let Some(form) = self.session.form_mut() {
                    form.focus_prev();
                }
            }
            (KeyCode::Enter, _) => {
                let on_submit = self
                    .session
                    .form()
                    .is_some_and(|form| form.focus == FormField::Submit);
                if on_submit {
                    if self.session.submit_form(manual) {
                        self.clamp_cursor(manual);
                    }
                } else if let Some(form) = self.session.form_mut() {
                    form.focus_next();
                }
            }
            (KeyCode::Up | KeyCode::Left, _) => {
                if let Some(form) = self.session.form_mut()
                    && form.focus == FormField::UseCase
                {
                    form.cycle_use_case(-1);
                }
            }
            (KeyCode::Down | KeyCode::Right, _) => {
                if let Some(form) = self.session.form_mut()
                    && form.focus == FormField::UseCase
                {
                    form.cycle_use_case(1);
                }
            }
            (KeyCode::Backspace, _) => {
                if let Some(form) = self.session.form_mut() {
                    form.backspace();
                }
            }
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                if let Some(form) = self.session.form_mut() {
                    form.input_char(c);
                }
            }
            _ => {}
        }
    }

    fn handle_preview_key(&mut self, key: KeyEvent, manual: &mut HouseManual) {
        let max_scroll = PreviewPane::line_count(self.session.preview_records());
        match key.code {
            KeyCode::Esc | KeyCode::Char('b') | KeyCode::Backspace => {
                // Back from preview returns to the grid without exiting
                if self.session.back() == BackAction::ReturnToView {
                    self.preview_scroll = 0;
                }
            }
            KeyCode::Up => self.preview_scroll = self.preview_scroll.saturating_sub(1),
            KeyCode::Down => {
                self.preview_scroll = self
                    .preview_scroll
                    .saturating_add(1)
                    .min(max_scroll.try_into().unwrap_or(u16::MAX));
            }
            KeyCode::PageUp => self.preview_scroll = self.preview_scroll.saturating_sub(10),
            KeyCode::PageDown => {
                self.preview_scroll = self
                    .preview_scroll
                    .saturating_add(10)
                    .min(max_scroll.try_into().unwrap_or(u16::MAX));
            }
            KeyCode::Char('p') | KeyCode::Char('P') => self.write_print_document(manual),
            _ => {}
        }
    }

    fn handle_confirm_key(&mut self, key: KeyEvent, manual: &mut HouseManual) {
        match key.code {
            KeyCode::Char('y' | 'Y') | KeyCode::Enter => {
                if let Some(confirm) = self.confirm.take() {
                    self.session.delete_record(manual, &confirm.id);
                    self.clamp_cursor(manual);
                }
            }
            KeyCode::Char('n' | 'N') | KeyCode::Esc => self.confirm = None,
            _ => {}
        }
    }

    /// Compose the print document for the selection and write it out
    fn write_print_document(&mut self, manual: &HouseManual) {
        let Some(job) = self.session.request_print(manual) else {
            return;
        };
        match job.write_to(&self.print_dir) {
            Ok(path) => {
                info!(path = %path.display(), "print document written");
                self.session
                    .toasts
                    .success(format!("Print document written to {}", path.display()));
            }
            Err(e) => self.session.toasts.error(format!("Print failed: {e}")),
        }
    }

    fn clamp_cursor(&mut self, manual: &HouseManual) {
        self.cursor = self.cursor.min(manual.len());
    }

    // ------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------

    fn render(&self, frame: &mut Frame, manual: &HouseManual) {
        let main_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Header
                Constraint::Min(5),    // Content
                Constraint::Length(4), // Notifications
                Constraint::Length(1), // Help bar
            ])
            .split(frame.area());

        self.render_header(frame, manual, main_layout[0]);

        match self.session.mode() {
            DashboardMode::View => {
                let grid = CardGrid::new(
                    &manual.records,
                    &self.session.selection,
                    self.cursor,
                    &self.theme,
                );
                frame.render_widget(grid, main_layout[1]);
            }
            DashboardMode::Create | DashboardMode::Edit { .. } => {
                if let Some(form) = self.session.form() {
                    frame.render_widget(FormView::new(form, &self.theme), main_layout[1]);
                }
            }
            DashboardMode::Preview => {
                let pane = PreviewPane::new(
                    self.session.preview_records(),
                    &manual.name,
                    self.preview_scroll,
                    &self.theme,
                );
                frame.render_widget(pane, main_layout[1]);
            }
        }

        let toasts = self.session.toasts.active();
        frame.render_widget(StatusBar::new(&toasts, &self.theme), main_layout[2]);

        let hints = self.hints();
        frame.render_widget(HelpBar::new(&hints, &self.theme), main_layout[3]);

        if let Some(confirm) = &self.confirm {
            frame.render_widget(ConfirmDialog::new(confirm, &self.theme), frame.area());
        }
    }

    fn render_header(&self, frame: &mut Frame, manual: &HouseManual, area: ratatui::layout::Rect) {
        let mut spans = vec![
            Span::styled(" QR Codes ", self.theme.cursor_style()),
            Span::raw(" "),
            Span::raw(manual.name.clone()),
            Span::styled(format!("  {} codes", manual.len()), self.theme.dimmed_style()),
        ];
        if !self.session.selection.is_empty() {
            spans.push(Span::styled(
                format!("  {} selected", self.session.selection.len()),
                self.theme.selected_style(),
            ));
        }

        let header = Paragraph::new(vec![
            Line::from(spans),
            Line::styled(
                format!(" {}", manual.property_address),
                self.theme.dimmed_style(),
            ),
        ]);
        frame.render_widget(header, area);
    }

    fn hints(&self) -> Vec<KeyHint> {
        if self.confirm.is_some() {
            return vec![KeyHint::new("Y", "confirm"), KeyHint::new("N", "cancel")];
        }
        match self.session.mode() {
            DashboardMode::View => vec![
                KeyHint::new("↑↓←→", "navigate"),
                KeyHint::new("Space", "select"),
                KeyHint::new("a", "add"),
                KeyHint::new("e", "edit"),
                KeyHint::new("d", "delete"),
                KeyHint::new("s", "select all"),
                KeyHint::new("p", "preview"),
                KeyHint::new("P", "print"),
                KeyHint::new("q", "close"),
            ],
            DashboardMode::Create | DashboardMode::Edit { .. } => vec![
                KeyHint::new("Tab", "next field"),
                KeyHint::new("◂▸", "choose use case"),
                KeyHint::new("Enter", "submit"),
                KeyHint::new("ctrl+s", "save"),
                KeyHint::new("ESC", "cancel"),
                KeyHint::new("ctrl+q", "close"),
            ],
            DashboardMode::Preview => vec![
                KeyHint::new("↑↓", "scroll"),
                KeyHint::new("p", "print"),
                KeyHint::new("ESC", "back"),
            ],
        }
    }
}
