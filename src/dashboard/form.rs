//! Form state and validation for creating or editing a QR code record.
//!
//! Validation runs only on submit, never per keystroke, and all failing
//! fields surface their messages at once. On success the form builds a
//! complete record and hands it to the session; it never mutates the house
//! manual or the dashboard mode itself.

use crate::catalog::{self, UseCase};
use crate::manual::{MAX_CONTENT_CHARS, QrRecord};
use chrono::Utc;

/// Which form field currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    /// Record title
    #[default]
    Title,
    /// Use-case selector
    UseCase,
    /// QR payload content
    Content,
    /// Submit control
    Submit,
}

impl FormField {
    /// Next field in tab order
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Title => Self::UseCase,
            Self::UseCase => Self::Content,
            Self::Content => Self::Submit,
            Self::Submit => Self::Title,
        }
    }

    /// Previous field in tab order
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Title => Self::Submit,
            Self::UseCase => Self::Title,
            Self::Content => Self::UseCase,
            Self::Submit => Self::Content,
        }
    }
}

/// Field-level validation errors, all surfaced together on submit
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    /// Title error, if any
    pub title: Option<String>,
    /// Content error, if any
    pub content: Option<String>,
    /// Use-case error, if any
    pub use_case: Option<String>,
}

impl FieldErrors {
    /// Whether no field has an error
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.use_case.is_none()
    }
}

/// State of the create/edit form
#[derive(Debug, Clone)]
pub struct FormState {
    manual_id: String,
    existing: Option<QrRecord>,
    /// Title input
    pub title: String,
    /// Payload input; length is only checked on submit
    pub content: String,
    /// Cursor into [`catalog::USE_CASES`], `None` until a choice is made
    pub use_case_index: Option<usize>,
    /// Errors from the last submit attempt
    pub errors: FieldErrors,
    /// Focused field
    pub focus: FormField,
}

impl FormState {
    /// Blank form for creating a record under `manual_id`
    #[must_use]
    pub fn new(manual_id: impl Into<String>) -> Self {
        Self {
            manual_id: manual_id.into(),
            existing: None,
            title: String::new(),
            content: String::new(),
            use_case_index: None,
            errors: FieldErrors::default(),
            focus: FormField::default(),
        }
    }

    /// Form pre-filled from an existing record
    #[must_use]
    pub fn edit(record: QrRecord) -> Self {
        Self {
            manual_id: record.manual_id.clone(),
            title: record.title.clone(),
            content: record.content.clone(),
            use_case_index: catalog::position(&record.use_case_id),
            errors: FieldErrors::default(),
            focus: FormField::default(),
            existing: Some(record),
        }
    }

    /// Whether the form edits an existing record
    #[must_use]
    pub const fn is_edit(&self) -> bool {
        self.existing.is_some()
    }

    /// Move focus to the next field
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// Move focus to the previous field
    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Type a character into the focused text field
    pub fn input_char(&mut self, c: char) {
        match self.focus {
            FormField::Title => self.title.push(c),
            FormField::Content => self.content.push(c),
            FormField::UseCase | FormField::Submit => {}
        }
    }

    /// Delete the last character of the focused text field
    pub fn backspace(&mut self) {
        match self.focus {
            FormField::Title => {
                self.title.pop();
            }
            FormField::Content => {
                self.content.pop();
            }
            FormField::UseCase | FormField::Submit => {}
        }
    }

    /// Step the use-case selector forward or backward through the catalog
    pub fn cycle_use_case(&mut self, step: isize) {
        let count = catalog::USE_CASES.len() as isize;
        let next = match self.use_case_index {
            None => {
                if step >= 0 {
                    0
                } else {
                    count - 1
                }
            }
            Some(idx) => (idx as isize + step).rem_euclid(count),
        };
        self.use_case_index = Some(next as usize);
    }

    /// The currently selected catalog entry
    #[must_use]
    pub fn selected_use_case(&self) -> Option<&'static UseCase> {
        self.use_case_index.and_then(|idx| catalog::USE_CASES.get(idx))
    }

    /// Character count of the content field, for the `n/2000` footer
    #[must_use]
    pub fn content_chars(&self) -> usize {
        self.content.chars().count()
    }

    /// Validate all fields, recording every failure at once
    ///
    /// Returns `true` when the form may be submitted.
    pub fn validate(&mut self) -> bool {
        let mut errors = FieldErrors::default();

        if self.title.trim().is_empty() {
            errors.title = Some("Title is required".to_string());
        }

        if self.content.trim().is_empty() {
            errors.content = Some("QR code content is required".to_string());
        } else if self.content_chars() > MAX_CONTENT_CHARS {
            errors.content = Some(format!(
                "Content must be at most {MAX_CONTENT_CHARS} characters"
            ));
        }

        if self.use_case_index.is_none() {
            errors.use_case = Some("Please select a use case".to_string());
        }

        let ok = errors.is_clean();
        self.errors = errors;
        ok
    }

    /// Build the record described by the current input
    ///
    /// Expects [`validate`](Self::validate) to have passed. Editing reuses
    /// the original id and creation timestamp; creating synthesizes a fresh
    /// id. The update timestamp is always stamped with the current time.
    /// An unresolved use case degrades to empty strings; the selector only
    /// offers catalog entries, so that path is defensive.
    #[must_use]
    pub fn build_record(&self) -> QrRecord {
        let use_case = self.selected_use_case();
        debug_assert!(use_case.is_some(), "record built without a use case");
        let now = Utc::now();

        QrRecord {
            id: self
                .existing
                .as_ref()
                .map_or_else(QrRecord::new_id, |r| r.id.clone()),
            title: self.title.trim().to_string(),
            content: self.content.trim().to_string(),
            use_case_id: use_case.map(|uc| uc.id.to_string()).unwrap_or_default(),
            use_case_name: use_case.map(|uc| uc.name.to_string()).unwrap_or_default(),
            manual_id: self.manual_id.clone(),
            created_at: self.existing.as_ref().map_or(now, |r| r.created_at),
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn existing_record() -> QrRecord {
        let created = Utc::now() - chrono::Duration::days(30);
        QrRecord {
            id: "qr-001".to_string(),
            title: "WiFi Access".to_string(),
            content: "WIFI:T:WPA;S:BeachHouse;P:Welcome123;;".to_string(),
            use_case_id: "uc-001".to_string(),
            use_case_name: "WiFi Connection".to_string(),
            manual_id: "hm-001".to_string(),
            created_at: created,
            updated_at: created,
        }
    }

    #[test]
    fn test_empty_title_fails_with_title_error() {
        let mut form = FormState::new("hm-001");
        form.title = "   ".to_string();
        form.content = "https://example.com".to_string();
        form.use_case_index = Some(0);

        assert!(!form.validate());
        assert!(form.errors.title.is_some());
        assert!(form.errors.content.is_none());
        assert!(form.errors.use_case.is_none());
    }

    #[test]
    fn test_over_limit_content_fails_with_length_error() {
        let mut form = FormState::new("hm-001");
        form.title = "Long".to_string();
        form.content = "x".repeat(MAX_CONTENT_CHARS + 1);
        form.use_case_index = Some(0);

        assert!(!form.validate());
        assert!(form.errors.content.is_some());

        // Exactly at the limit is fine
        form.content = "x".repeat(MAX_CONTENT_CHARS);
        assert!(form.validate());
    }

    #[test]
    fn test_all_errors_surface_simultaneously() {
        let mut form = FormState::new("hm-001");
        assert!(!form.validate());
        assert!(form.errors.title.is_some());
        assert!(form.errors.content.is_some());
        assert!(form.errors.use_case.is_some());
    }

    #[test]
    fn test_valid_submit_snapshots_use_case_name() {
        let mut form = FormState::new("hm-001");
        form.title = "  Pool Gate  ".to_string();
        form.content = " https://x/pool ".to_string();
        form.use_case_index = crate::catalog::position("uc-007");

        assert!(form.validate());
        let record = form.build_record();

        assert!(record.id.starts_with("qr-"));
        assert_eq!(record.title, "Pool Gate");
        assert_eq!(record.content, "https://x/pool");
        assert_eq!(record.use_case_id, "uc-007");
        assert_eq!(record.use_case_name, "Parking Instructions");
        assert_eq!(record.manual_id, "hm-001");
        assert_eq!(record.created_at, record.updated_at);
    }

    #[test]
    fn test_edit_preserves_id_and_created_at() {
        let original = existing_record();
        let mut form = FormState::edit(original.clone());
        assert!(form.is_edit());
        assert_eq!(form.title, original.title);

        form.title = "WiFi (updated)".to_string();
        assert!(form.validate());
        let record = form.build_record();

        assert_eq!(record.id, original.id);
        assert_eq!(record.created_at, original.created_at);
        assert!(record.updated_at > original.updated_at);
        assert_eq!(record.title, "WiFi (updated)");
    }

    #[test]
    fn test_cycle_use_case_wraps() {
        let mut form = FormState::new("hm-001");
        assert!(form.selected_use_case().is_none());

        form.cycle_use_case(1);
        assert_eq!(form.selected_use_case().unwrap().id, "uc-001");

        form.cycle_use_case(-1);
        assert_eq!(form.selected_use_case().unwrap().id, "uc-008");

        form.cycle_use_case(1);
        assert_eq!(form.selected_use_case().unwrap().id, "uc-001");
    }

    #[test]
    fn test_focus_cycle_is_closed() {
        let mut form = FormState::new("hm-001");
        let start = form.focus;
        for _ in 0..4 {
            form.focus_next();
        }
        assert_eq!(form.focus, start);
        form.focus_prev();
        assert_eq!(form.focus, FormField::Submit);
    }

    #[test]
    fn test_input_routes_to_focused_field() {
        let mut form = FormState::new("hm-001");
        form.input_char('h');
        form.input_char('i');
        assert_eq!(form.title, "hi");

        form.focus = FormField::Content;
        form.input_char('x');
        assert_eq!(form.content, "x");

        form.backspace();
        assert!(form.content.is_empty());

        // Selector ignores typed characters
        form.focus = FormField::UseCase;
        form.input_char('z');
        assert_eq!(form.title, "hi");
        assert!(form.content.is_empty());
    }
}
