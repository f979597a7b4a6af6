//! House manual data model and the host-side record collection.
//!
//! The dashboard itself never persists anything: it mutates an in-memory
//! [`HouseManual`] through exactly two operations, [`HouseManual::upsert`]
//! and [`HouseManual::remove`]. Durable storage belongs to the hosting
//! binary, which wraps the manual in a [`ManualFile`] and writes it back as
//! JSON when the session ends.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use uuid::Uuid;

/// Maximum payload length accepted for a QR code, in characters
pub const MAX_CONTENT_CHARS: usize = 2000;

/// Errors raised while loading or saving a house manual
#[derive(Debug, Error)]
pub enum ManualError {
    /// I/O failure reading or writing the manual file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The manual file is not valid JSON for a house manual
    #[error("Malformed manual file: {0}")]
    Parse(#[from] serde_json::Error),

    /// A record id that should exist does not
    #[error("No QR code with id '{0}'")]
    UnknownRecord(String),

    /// The manual file does not exist yet
    #[error("No house manual at {0}; run 'qrdash init' first")]
    Missing(PathBuf),
}

/// A single QR code record owned by a house manual
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrRecord {
    /// Unique identifier within the owning manual
    pub id: String,
    /// Display title, trimmed and non-empty
    pub title: String,
    /// Payload encoded into the QR symbol, trimmed, at most
    /// [`MAX_CONTENT_CHARS`] characters
    pub content: String,
    /// Catalog id selected when the record was saved
    pub use_case_id: String,
    /// Catalog name snapshotted at save time, not live-joined
    pub use_case_name: String,
    /// Id of the owning house manual
    pub manual_id: String,
    /// Set once at creation, never changed afterwards
    pub created_at: DateTime<Utc>,
    /// Refreshed on every save
    pub updated_at: DateTime<Utc>,
}

impl QrRecord {
    /// Synthesize a fresh record id
    #[must_use]
    pub fn new_id() -> String {
        format!("qr-{}", Uuid::new_v4())
    }
}

/// A property's guest-facing manual with its ordered QR code collection
///
/// Record order is insertion/update order: [`upsert`](Self::upsert) replaces
/// an existing entry in place so the grid never reshuffles on edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HouseManual {
    /// Unique manual identifier
    pub id: String,
    /// Display name, also used for print document titles
    pub name: String,
    /// Street address of the property
    pub property_address: String,
    /// Ordered QR code records
    #[serde(default)]
    pub records: Vec<QrRecord>,
}

impl HouseManual {
    /// Create an empty manual with a fresh id
    #[must_use]
    pub fn new(name: impl Into<String>, property_address: impl Into<String>) -> Self {
        Self {
            id: format!("hm-{}", Uuid::new_v4()),
            name: name.into(),
            property_address: property_address.into(),
            records: Vec::new(),
        }
    }

    /// Look up a record by id
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&QrRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Insert a record, or replace the entry with the same id in place
    pub fn upsert(&mut self, record: QrRecord) {
        if let Some(existing) = self.records.iter_mut().find(|r| r.id == record.id) {
            *existing = record;
        } else {
            self.records.push(record);
        }
    }

    /// Remove a record by id, returning it if present
    pub fn remove(&mut self, id: &str) -> Option<QrRecord> {
        self.records
            .iter()
            .position(|r| r.id == id)
            .map(|idx| self.records.remove(idx))
    }

    /// Number of records in the manual
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the manual has no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// A house manual bound to its backing JSON file
///
/// The file is the hosting application's storage; the dashboard only ever
/// sees the in-memory [`HouseManual`].
#[derive(Debug)]
pub struct ManualFile {
    path: PathBuf,
    /// The loaded manual, mutated in memory during a session
    pub manual: HouseManual,
}

impl ManualFile {
    /// Load a manual from `path`
    ///
    /// # Errors
    ///
    /// Returns [`ManualError::Missing`] if the file does not exist, or a
    /// parse/I/O error if it cannot be read.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ManualError> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Err(ManualError::Missing(path));
        }
        let raw = fs::read_to_string(&path)?;
        let manual = serde_json::from_str(&raw)?;
        Ok(Self { path, manual })
    }

    /// Create a new manual file, writing it immediately
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created or the
    /// file cannot be written.
    pub fn create(path: impl AsRef<Path>, manual: HouseManual) -> Result<Self, ManualError> {
        let file = Self {
            path: path.as_ref().to_path_buf(),
            manual,
        };
        file.save()?;
        Ok(file)
    }

    /// Write the manual back to its file as pretty JSON
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save(&self) -> Result<(), ManualError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(&self.manual)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}
