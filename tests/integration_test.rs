//! Integration tests for qrdash
//!
//! These tests verify end-to-end functionality by driving a dashboard
//! session over a JSON-backed house manual, the same way the binary wires
//! the pieces together.

use qrdash::dashboard::{DashboardMode, DashboardSession, Severity};
use qrdash::manual::{HouseManual, ManualFile, QrRecord};
use std::path::PathBuf;
use std::time::Duration;

/// Build a manual file with `titles` pre-seeded, returning the file handle
fn setup_manual(dir: &tempfile::TempDir, titles: &[&str]) -> ManualFile {
    let mut manual = HouseManual::new("Beach House Manual", "123 Ocean Drive, Miami, FL");
    for (i, title) in titles.iter().enumerate() {
        let now = chrono::Utc::now();
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
    ManualFile::create(dir.path().join("manual.json"), manual).unwrap()
}

fn fill_form(session: &mut DashboardSession, title: &str, content: &str, use_case: &str) {
    let form = session.form_mut().expect("form should be open");
    form.title = title.to_string();
    form.content = content.to_string();
    form.use_case_index = qrdash::catalog::position(use_case);
}

#[test]
fn test_create_record_and_persist() {
    let dir = tempfile::tempdir().unwrap();
    let mut file = setup_manual(&dir, &[]);
    let mut session = DashboardSession::with_toast_ttl(Duration::from_millis(60));

    // Empty collection, view mode, add-new opens the form
    assert_eq!(session.mode(), &DashboardMode::View);
    session.begin_create(&file.manual);
    assert_eq!(session.mode(), &DashboardMode::Create);

    fill_form(&mut session, "Pool Gate", "https://x/pool", "uc-007");
    assert!(session.submit_form(&mut file.manual));

    // Exactly one record, back in view mode, success toast queued
    assert_eq!(file.manual.len(), 1);
    assert_eq!(session.mode(), &DashboardMode::View);
    let toasts = session.toasts.active();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].severity, Severity::Success);

    // The toast is gone after its lifetime
    std::thread::sleep(Duration::from_millis(120));
    session.tick();
    assert!(session.toasts.active().is_empty());

    // The host persists the collection and it survives a reload
    file.save().unwrap();
    let reloaded = ManualFile::load(file.path()).unwrap();
    assert_eq!(reloaded.manual.len(), 1);
    let record = &reloaded.manual.records[0];
    assert_eq!(record.title, "Pool Gate");
    assert_eq!(record.use_case_name, "Parking Instructions");
    assert_eq!(record.manual_id, reloaded.manual.id);
}

#[test]
fn test_edit_keeps_position_and_created_at() {
    let dir = tempfile::tempdir().unwrap();
    let mut file = setup_manual(&dir, &["WiFi", "Rules", "Parking"]);
    let mut session = DashboardSession::new();

    let original = file.manual.find("qr-1").unwrap().clone();
    session.begin_edit(original.clone());
    session.form_mut().unwrap().title = "Rules (updated)".to_string();
    assert!(session.submit_form(&mut file.manual));

    file.save().unwrap();
    let reloaded = ManualFile::load(file.path()).unwrap();

    assert_eq!(reloaded.manual.len(), 3);
    let record = &reloaded.manual.records[1];
    assert_eq!(record.id, "qr-1");
    assert_eq!(record.title, "Rules (updated)");
    assert_eq!(record.created_at, original.created_at);
    assert!(record.updated_at > original.updated_at);
}

#[test]
fn test_preview_two_selected_records_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let file = setup_manual(&dir, &["WiFi", "Rules", "Parking"]);
    let mut session = DashboardSession::new();

    session.toggle_select("qr-2");
    session.toggle_select("qr-0");
    assert!(session.request_preview(&file.manual));

    assert_eq!(session.mode(), &DashboardMode::Preview);
    let titles: Vec<_> = session
        .preview_records()
        .iter()
        .map(|r| r.title.as_str())
        .collect();
    assert_eq!(titles, vec!["WiFi", "Parking"]);
}

#[test]
fn test_print_with_empty_selection_is_advisory_only() {
    let dir = tempfile::tempdir().unwrap();
    let file = setup_manual(&dir, &["WiFi"]);
    let mut session = DashboardSession::new();

    assert!(session.request_print(&file.manual).is_none());
    assert_eq!(session.mode(), &DashboardMode::View);

    let toasts = session.toasts.active();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].severity, Severity::Warning);
    assert!(dir
        .path()
        .read_dir()
        .unwrap()
        .all(|e| e.unwrap().path().extension().is_none_or(|ext| ext != "txt")));
}

#[test]
fn test_print_selected_records_writes_document() {
    let dir = tempfile::tempdir().unwrap();
    let file = setup_manual(&dir, &["WiFi", "Rules"]);
    let mut session = DashboardSession::new();

    session.toggle_select("qr-0");
    session.toggle_select("qr-1");
    let job = session.request_print(&file.manual).unwrap();
    assert_eq!(job.document_title, "QR Codes - Beach House Manual");

    let out_dir = dir.path().join("prints");
    let path = job.write_to(&out_dir).unwrap();
    let doc = std::fs::read_to_string(&path).unwrap();
    assert!(doc.starts_with("QR Codes - Beach House Manual"));
    assert!(doc.contains("WiFi"));
    assert!(doc.contains("Rules"));
}

#[test]
fn test_delete_prunes_selection_and_persists() {
    let dir = tempfile::tempdir().unwrap();
    let mut file = setup_manual(&dir, &["WiFi", "Rules"]);
    let mut session = DashboardSession::new();

    session.toggle_select("qr-0");
    session.toggle_select("qr-1");
    session.delete_record(&mut file.manual, "qr-0");

    assert_eq!(session.selection.len(), 1);
    assert!(!session.selection.contains("qr-0"));

    file.save().unwrap();
    let reloaded = ManualFile::load(file.path()).unwrap();
    assert_eq!(reloaded.manual.len(), 1);
    assert_eq!(reloaded.manual.records[0].id, "qr-1");
}

#[test]
fn test_manual_path_is_stable_across_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let file = setup_manual(&dir, &["WiFi"]);
    let path = PathBuf::from(file.path());
    drop(file);

    let reloaded = ManualFile::load(&path).unwrap();
    assert_eq!(reloaded.manual.name, "Beach House Manual");
}
