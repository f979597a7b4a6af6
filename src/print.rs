//! Print-layout composition for selected QR codes.
//!
//! A [`PrintJob`] is a fixed snapshot of records plus a document title
//! derived from the manual name. Composition produces a plain-text document
//! with one sheet per record, separated by form feeds so line printers and
//! `lp` paginate naturally. The on-screen preview renders the same blocks
//! through the terminal palette instead.

use crate::manual::QrRecord;
use crate::qr::{self, Palette, QrImageError};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while composing or writing a print document
#[derive(Debug, Error)]
pub enum PrintError {
    /// The job contains no records
    #[error("Nothing to print")]
    Empty,

    /// A record's payload could not be encoded
    #[error("QR encoding failed: {0}")]
    Image(#[from] QrImageError),

    /// Writing the document failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A snapshot of records to print with the derived document title
#[derive(Debug, Clone)]
pub struct PrintJob {
    /// Document title, `QR Codes - <manual name>`
    pub document_title: String,
    /// Records in collection order; not reactive to later selection changes
    pub records: Vec<QrRecord>,
}

impl PrintJob {
    /// Build a job for `records` belonging to the named manual
    #[must_use]
    pub fn new(manual_name: &str, records: Vec<QrRecord>) -> Self {
        Self {
            document_title: format!("QR Codes - {manual_name}"),
            records,
        }
    }

    /// Compose the paginated print document
    ///
    /// # Errors
    ///
    /// Returns [`PrintError::Empty`] for a job without records, or an
    /// encoding error if a payload exceeds the symbol capacity.
    pub fn compose(&self) -> Result<String, PrintError> {
        if self.records.is_empty() {
            return Err(PrintError::Empty);
        }

        let mut doc = String::new();
        doc.push_str(&self.document_title);
        doc.push('\n');
        doc.push_str(&"=".repeat(self.document_title.chars().count()));
        doc.push_str("\n\n");

        for (idx, record) in self.records.iter().enumerate() {
            if idx > 0 {
                // Form feed starts a fresh sheet per record
                doc.push('\u{c}');
            }
            doc.push_str(&record.title);
            doc.push('\n');
            doc.push_str(&record.use_case_name);
            doc.push_str("\n\n");
            doc.push_str(&qr::render(&record.content, Palette::Print)?);
            doc.push('\n');
        }

        Ok(doc)
    }

    /// Compose the document and write it under `dir`
    ///
    /// The file name is a slug of the document title. Returns the path of
    /// the written file.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`compose`](Self::compose), plus I/O errors
    /// creating the directory or writing the file.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf, PrintError> {
        let doc = self.compose()?;
        fs::create_dir_all(dir)?;
        let path = dir.join(format!("{}.txt", slug(&self.document_title)));
        fs::write(&path, doc)?;
        Ok(path)
    }
}

/// Lowercase, hyphen-separated file name stem
fn slug(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut last_dash = true;
    for c in s.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
            last_dash = false;
        } else if !last_dash {
            out.push('-');
            last_dash = true;
        }
    }
    out.trim_end_matches('-').to_string()
}
