//! Dashboard session state and mode transitions.
//!
//! [`DashboardSession`] owns everything that lives only as long as the
//! dashboard is open: the current mode, the selection set, live toasts, and
//! the in-progress form. The house manual belongs to the host and is only
//! mutated through its `upsert`/`remove` operations.
//!
//! # Mode machine
//!
//! ```text
//! View ──add-new──▶ Create ──save/cancel──▶ View
//! View ──edit────▶ Edit    ──save/cancel──▶ View
//! View ──preview─▶ Preview ──back────────▶ View   (only with a selection)
//! ```
//!
//! There is no transition between `Create`/`Edit` and `Preview`; a close
//! request anywhere outside `Preview` exits the dashboard and hands control
//! back to the host.

pub mod form;
pub mod selection;
pub mod toast;

pub use form::{FieldErrors, FormField, FormState};
pub use selection::SelectionSet;
pub use toast::{Severity, Toast, ToastQueue};

use crate::manual::{HouseManual, QrRecord};
use crate::print::PrintJob;
use std::time::Duration;
use tracing::{debug, info};

/// Current mode of the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DashboardMode {
    /// Browsing the grid; the initial state
    #[default]
    View,
    /// Creating a new record in the form
    Create,
    /// Editing an existing record in the form
    Edit {
        /// Id of the record being edited
        target: String,
    },
    /// Showing the print preview of the selection snapshot
    Preview,
}

/// What the caller should do after a back/close request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackAction {
    /// Stay in the dashboard, now back in view mode
    ReturnToView,
    /// Leave the dashboard; the host takes over
    Exit,
}

/// Session-scoped dashboard state
#[derive(Debug)]
pub struct DashboardSession {
    mode: DashboardMode,
    /// Selected record ids; survives create/edit round trips
    pub selection: SelectionSet,
    /// Live notifications
    pub toasts: ToastQueue,
    form: Option<FormState>,
    preview: Vec<QrRecord>,
}

impl DashboardSession {
    /// Create a session in view mode with nothing selected
    #[must_use]
    pub fn new() -> Self {
        Self {
            mode: DashboardMode::View,
            selection: SelectionSet::new(),
            toasts: ToastQueue::new(),
            form: None,
            preview: Vec::new(),
        }
    }

    /// Create a session whose toasts expire after `ttl`
    #[must_use]
    pub fn with_toast_ttl(ttl: Duration) -> Self {
        Self {
            toasts: ToastQueue::with_ttl(ttl),
            ..Self::new()
        }
    }

    /// Current mode
    #[must_use]
    pub const fn mode(&self) -> &DashboardMode {
        &self.mode
    }

    /// The in-progress form, present in create/edit mode
    #[must_use]
    pub const fn form(&self) -> Option<&FormState> {
        self.form.as_ref()
    }

    /// Mutable access to the in-progress form
    #[must_use]
    pub const fn form_mut(&mut self) -> Option<&mut FormState> {
        self.form.as_mut()
    }

    /// The selection snapshot taken when preview was entered
    #[must_use]
    pub fn preview_records(&self) -> &[QrRecord] {
        &self.preview
    }

    /// Periodic housekeeping; expires toasts
    pub fn tick(&mut self) {
        self.toasts.sweep();
    }

    /// Enter create mode with a blank form
    pub fn begin_create(&mut self, manual: &HouseManual) {
        debug!(manual = %manual.id, "entering create mode");
        self.form = Some(FormState::new(manual.id.clone()));
        self.mode = DashboardMode::Create;
    }

    /// Enter edit mode with a form pre-filled from `record`
    pub fn begin_edit(&mut self, record: QrRecord) {
        debug!(record = %record.id, "entering edit mode");
        self.mode = DashboardMode::Edit {
            target: record.id.clone(),
        };
        self.form = Some(FormState::edit(record));
    }

    /// Abandon the form and return to view mode
    pub fn cancel_form(&mut self) {
        self.form = None;
        self.mode = DashboardMode::View;
    }

    /// Validate and submit the form
    ///
    /// On validation failure the field errors are left on the form and the
    /// mode does not change. On success the record is upserted into the
    /// manual, a success toast is queued (worded by the mode at submit
    /// time), and the session returns to view mode.
    ///
    /// Returns `true` when a record was saved.
    pub fn submit_form(&mut self, manual: &mut HouseManual) -> bool {
        let Some(form) = self.form.as_mut() else {
            return false;
        };
        if !form.validate() {
            return false;
        }

        let record = form.build_record();
        let created = matches!(self.mode, DashboardMode::Create);
        info!(record = %record.id, created, "saving record");
        manual.upsert(record);

        self.toasts.success(if created {
            "QR code created successfully"
        } else {
            "QR code updated successfully"
        });
        self.form = None;
        self.mode = DashboardMode::View;
        true
    }

    /// Remove a record after the user confirmed the delete dialog
    ///
    /// Prunes the id from the selection set; deleting an id that is not
    /// selected leaves the selection unchanged.
    pub fn delete_record(&mut self, manual: &mut HouseManual, id: &str) {
        if manual.remove(id).is_some() {
            info!(record = %id, "record deleted");
            self.toasts.success("QR code deleted successfully");
        }
        self.selection.remove(id);
    }

    /// Toggle selection of a single record
    pub fn toggle_select(&mut self, id: &str) {
        self.selection.toggle(id);
    }

    /// Select every record, or clear the selection if all are selected
    pub fn toggle_select_all(&mut self, manual: &HouseManual) {
        if self.selection.len() == manual.len() {
            self.selection.clear();
        } else {
            for record in &manual.records {
                self.selection.insert(record.id.clone());
            }
        }
    }

    /// Selected records in collection order
    #[must_use]
    pub fn selected_records(&self, manual: &HouseManual) -> Vec<QrRecord> {
        manual
            .records
            .iter()
            .filter(|r| self.selection.contains(&r.id))
            .cloned()
            .collect()
    }

    /// Enter preview mode over the current selection
    ///
    /// Only available from view mode. With an empty selection a warning
    /// toast is queued and the mode does not change. The previewed list is
    /// a snapshot: later selection changes do not affect it.
    pub fn request_preview(&mut self, manual: &HouseManual) -> bool {
        if self.mode != DashboardMode::View {
            return false;
        }
        if self.selection.is_empty() {
            self.toasts
                .warning("Please select at least one QR code to preview");
            return false;
        }
        self.preview = self.selected_records(manual);
        self.mode = DashboardMode::Preview;
        true
    }

    /// Build a print job over the current selection
    ///
    /// With an empty selection a warning toast is queued and no job is
    /// produced; the mode never changes either way.
    pub fn request_print(&mut self, manual: &HouseManual) -> Option<PrintJob> {
        if self.selection.is_empty() {
            self.toasts
                .warning("Please select at least one QR code to print");
            return None;
        }
        Some(PrintJob::new(&manual.name, self.selected_records(manual)))
    }

    /// Handle a back/close request
    ///
    /// From preview this returns to view mode; from anywhere else it asks
    /// the host to close the dashboard.
    pub fn back(&mut self) -> BackAction {
        if self.mode == DashboardMode::Preview {
            self.preview.clear();
            self.mode = DashboardMode::View;
            BackAction::ReturnToView
        } else {
            BackAction::Exit
        }
    }
}

impl Default for DashboardSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn manual_with(titles: &[&str]) -> HouseManual {
        let mut manual = HouseManual::new("Beach House Manual", "123 Ocean Drive, Miami, FL");
        for (i, title) in titles.iter().enumerate() {
            let now = Utc::now();
            manual.upsert(QrRecord {
                id: format!("qr-{i}"),
                title: (*title).to_string(),
                content: format!("https://example.com/{i}"),
                use_case_id: "uc-002".to_string(),
                use_case_name: "House Rules".to_string(),
                manual_id: manual.id.clone(),
                created_at: now,
                updated_at: now,
            });
        }
        manual
    }

    fn fill_form(session: &mut DashboardSession, title: &str, content: &str) {
        let form = session.form_mut().unwrap();
        form.title = title.to_string();
        form.content = content.to_string();
        form.use_case_index = crate::catalog::position("uc-007");
    }

    #[test]
    fn test_create_flow_end_to_end() {
        let mut manual = manual_with(&[]);
        let mut session = DashboardSession::new();
        assert_eq!(session.mode(), &DashboardMode::View);

        session.begin_create(&manual);
        assert_eq!(session.mode(), &DashboardMode::Create);

        fill_form(&mut session, "Pool Gate", "https://x/pool");
        assert!(session.submit_form(&mut manual));

        assert_eq!(manual.len(), 1);
        assert_eq!(session.mode(), &DashboardMode::View);
        assert!(session.form().is_none());

        let active = session.toasts.active();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].severity, Severity::Success);
        assert!(active[0].message.contains("created"));
    }

    #[test]
    fn test_toast_expires_after_lifetime() {
        let mut manual = manual_with(&[]);
        let mut session = DashboardSession::with_toast_ttl(Duration::from_millis(50));

        session.begin_create(&manual);
        fill_form(&mut session, "Pool Gate", "https://x/pool");
        assert!(session.submit_form(&mut manual));
        assert_eq!(session.toasts.active_count(), 1);

        std::thread::sleep(Duration::from_millis(100));
        session.tick();
        assert_eq!(session.toasts.active_count(), 0);
    }

    #[test]
    fn test_invalid_submit_stays_in_form() {
        let mut manual = manual_with(&[]);
        let mut session = DashboardSession::new();
        session.begin_create(&manual);

        // Nothing filled in: submission is blocked, no record produced
        assert!(!session.submit_form(&mut manual));
        assert_eq!(manual.len(), 0);
        assert_eq!(session.mode(), &DashboardMode::Create);
        assert!(session.form().unwrap().errors.title.is_some());
    }

    #[test]
    fn test_edit_flow_updates_in_place() {
        let mut manual = manual_with(&["WiFi", "Rules"]);
        let mut session = DashboardSession::new();

        let target = manual.find("qr-0").unwrap().clone();
        session.begin_edit(target);
        assert!(matches!(
            session.mode(),
            DashboardMode::Edit { target } if target == "qr-0"
        ));

        session.form_mut().unwrap().title = "WiFi v2".to_string();
        assert!(session.submit_form(&mut manual));

        assert_eq!(manual.len(), 2);
        assert_eq!(manual.records[0].title, "WiFi v2");
        assert!(session.toasts.active()[0].message.contains("updated"));
    }

    #[test]
    fn test_cancel_produces_no_record() {
        let mut manual = manual_with(&[]);
        let mut session = DashboardSession::new();

        session.begin_create(&manual);
        fill_form(&mut session, "Never saved", "https://x");
        session.cancel_form();

        assert_eq!(manual.len(), 0);
        assert_eq!(session.mode(), &DashboardMode::View);
        assert!(session.toasts.active().is_empty());
    }

    #[test]
    fn test_selection_survives_create_round_trip() {
        let mut manual = manual_with(&["A", "B"]);
        let mut session = DashboardSession::new();

        session.toggle_select("qr-0");
        session.begin_create(&manual);
        session.cancel_form();

        assert!(session.selection.contains("qr-0"));

        session.begin_create(&manual);
        fill_form(&mut session, "C", "https://x/c");
        assert!(session.submit_form(&mut manual));
        assert!(session.selection.contains("qr-0"));
    }

    #[test]
    fn test_delete_prunes_selection() {
        let mut manual = manual_with(&["A", "B"]);
        let mut session = DashboardSession::new();

        session.toggle_select("qr-0");
        session.toggle_select("qr-1");
        session.delete_record(&mut manual, "qr-0");

        assert_eq!(manual.len(), 1);
        assert!(!session.selection.contains("qr-0"));
        assert!(session.selection.contains("qr-1"));

        // Deleting an unselected id leaves the selection unchanged
        let mut manual2 = manual_with(&["A", "B"]);
        let mut session2 = DashboardSession::new();
        session2.toggle_select("qr-1");
        session2.delete_record(&mut manual2, "qr-0");
        assert_eq!(session2.selection.len(), 1);
        assert!(session2.selection.contains("qr-1"));
    }

    #[test]
    fn test_select_all_toggles() {
        let manual = manual_with(&["A", "B", "C"]);
        let mut session = DashboardSession::new();

        session.toggle_select_all(&manual);
        assert_eq!(session.selection.len(), 3);

        session.toggle_select_all(&manual);
        assert!(session.selection.is_empty());

        session.toggle_select_all(&manual);
        assert_eq!(session.selection.len(), 3);
    }

    #[test]
    fn test_partial_selection_selects_all() {
        let manual = manual_with(&["A", "B", "C"]);
        let mut session = DashboardSession::new();

        session.toggle_select("qr-1");
        session.toggle_select_all(&manual);
        assert_eq!(session.selection.len(), 3);
    }

    #[test]
    fn test_preview_snapshots_selection_in_order() {
        let manual = manual_with(&["A", "B", "C"]);
        let mut session = DashboardSession::new();

        // Select out of order; preview still follows collection order
        session.toggle_select("qr-2");
        session.toggle_select("qr-0");

        assert!(session.request_preview(&manual));
        assert_eq!(session.mode(), &DashboardMode::Preview);

        let titles: Vec<_> = session
            .preview_records()
            .iter()
            .map(|r| r.title.as_str())
            .collect();
        assert_eq!(titles, vec!["A", "C"]);

        // Snapshot is not reactive to later selection changes
        session.toggle_select("qr-1");
        assert_eq!(session.preview_records().len(), 2);
    }

    #[test]
    fn test_preview_with_empty_selection_warns() {
        let manual = manual_with(&["A"]);
        let mut session = DashboardSession::new();

        assert!(!session.request_preview(&manual));
        assert_eq!(session.mode(), &DashboardMode::View);

        let active = session.toasts.active();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].severity, Severity::Warning);
    }

    #[test]
    fn test_preview_unreachable_from_form_modes() {
        let manual = manual_with(&["A"]);
        let mut session = DashboardSession::new();
        session.toggle_select("qr-0");

        session.begin_create(&manual);
        assert!(!session.request_preview(&manual));
        assert_eq!(session.mode(), &DashboardMode::Create);
    }

    #[test]
    fn test_print_with_empty_selection_warns_and_keeps_mode() {
        let manual = manual_with(&["A"]);
        let mut session = DashboardSession::new();

        assert!(session.request_print(&manual).is_none());
        assert_eq!(session.mode(), &DashboardMode::View);
        assert_eq!(session.toasts.active()[0].severity, Severity::Warning);
    }

    #[test]
    fn test_print_job_covers_selected_records() {
        let manual = manual_with(&["A", "B"]);
        let mut session = DashboardSession::new();
        session.toggle_select("qr-1");

        let job = session.request_print(&manual).unwrap();
        assert_eq!(job.document_title, "QR Codes - Beach House Manual");
        assert_eq!(job.records.len(), 1);
        assert_eq!(job.records[0].title, "B");
    }

    #[test]
    fn test_back_from_preview_returns_to_view() {
        let manual = manual_with(&["A"]);
        let mut session = DashboardSession::new();
        session.toggle_select("qr-0");
        assert!(session.request_preview(&manual));

        assert_eq!(session.back(), BackAction::ReturnToView);
        assert_eq!(session.mode(), &DashboardMode::View);
        assert!(session.preview_records().is_empty());

        // From view, back means leaving the dashboard
        assert_eq!(session.back(), BackAction::Exit);
    }
}
