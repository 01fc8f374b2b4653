//! File-to-text extraction for uploaded inputs, dispatched on filename extension.
//!
//! Supports `.pdf` (via `pdf-extract`) and `.txt`. Other extensions yield empty
//! text with a warning rather than an error, matching the pipeline's
//! degrade-don't-abort posture.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to extract text from {path}: {source}")]
    Pdf {
        path: PathBuf,
        #[source]
        source: pdf_extract::OutputError,
    },
}

/// Extracts plain text from a PDF or TXT file, trimmed of surrounding whitespace.
pub fn extract_text(path: &Path) -> Result<String, IngestError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    let text = match extension.as_str() {
        "pdf" => pdf_extract::extract_text(path).map_err(|source| IngestError::Pdf {
            path: path.to_path_buf(),
            source,
        })?,
        "txt" => fs::read_to_string(path).map_err(|source| IngestError::Read {
            path: path.to_path_buf(),
            source,
        })?,
        other => {
            warn!("unsupported input extension {other:?}, yielding empty text");
            String::new()
        }
    };

    Ok(text.trim().to_string())
}
