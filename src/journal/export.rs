// SPDX-License-Identifier: MPL-2.0
//! Export functionality for the dispatch journal.
//!
//! Entries are serialized as a JSON array and written atomically so a
//! crash mid-export never leaves a truncated file behind.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Local;

use super::events::JournalEntry;

// =============================================================================
// Export Error
// =============================================================================

/// Errors that can occur during journal export.
#[derive(Debug)]
pub enum ExportError {
    /// I/O error during file operations.
    Io(io::Error),
    /// JSON serialization error.
    Serialization(serde_json::Error),
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "I/O error: {err}"),
            Self::Serialization(err) => write!(f, "serialization error: {err}"),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Serialization(err) => Some(err),
        }
    }
}

impl From<io::Error> for ExportError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err)
    }
}

// =============================================================================
// Filename Generation
// =============================================================================

/// Generates a default filename for journal exports.
///
/// Format: `toastq_journal_YYYYMMDD_HHMMSS.json`
///
/// Uses local time for user-friendly filenames.
#[must_use]
pub fn generate_default_filename() -> String {
    let now = Local::now();
    format!("toastq_journal_{}.json", now.format("%Y%m%d_%H%M%S"))
}

/// Returns the default directory for saving journal exports.
///
/// Uses the user's Documents folder if available, otherwise falls back
/// to the current directory.
#[must_use]
pub fn default_export_directory() -> PathBuf {
    dirs::document_dir().unwrap_or_else(|| std::env::current_dir().unwrap_or_default())
}

// =============================================================================
// Atomic File Write
// =============================================================================

/// Serializes the given entries and writes them to `path` atomically.
///
/// # Errors
///
/// Returns an error if serialization, writing, or renaming fails.
pub fn export_entries(path: &Path, entries: &[JournalEntry]) -> Result<(), ExportError> {
    let content = serde_json::to_string_pretty(entries)?;
    write_atomic(path, &content)?;
    Ok(())
}

/// Writes content to a file atomically.
///
/// Uses a temporary file with `.tmp` extension, then renames to the final path.
/// This prevents partial writes from corrupting the target file.
///
/// # Errors
///
/// Returns an error if writing or renaming fails.
pub fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
    let temp_path = path.with_extension("json.tmp");

    // Write to temp file
    fs::write(&temp_path, content)?;

    // Atomic rename
    if let Err(e) = fs::rename(&temp_path, path) {
        // Clean up temp file on failure
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    Ok(())
}
