//! Output rendering — plain-text table and optional paginated PDF.

pub mod layout;
#[cfg(feature = "pdf")]
pub mod pdf;
pub mod table;

use std::path::PathBuf;

use tracing::warn;

use crate::models::RoadmapDocument;

/// Writes the roadmap PDF to a fresh temp file and returns its path.
///
/// PDF output is strictly optional: an absent backend or any rendering failure
/// degrades to `None` and never fails the run.
#[cfg(feature = "pdf")]
pub fn render_pdf_to_temp(document: &RoadmapDocument) -> Option<PathBuf> {
    let named = match tempfile::Builder::new()
        .prefix("roadmap-")
        .suffix(".pdf")
        .tempfile()
    {
        Ok(named) => named,
        Err(err) => {
            warn!("could not create temp file for PDF output: {err}");
            return None;
        }
    };
    let (file, path) = match named.keep() {
        Ok(kept) => kept,
        Err(err) => {
            warn!("could not persist temp file for PDF output: {err}");
            return None;
        }
    };
    match pdf::write_pdf(document, file) {
        Ok(()) => Some(path),
        Err(err) => {
            warn!("PDF generation failed: {err}");
            None
        }
    }
}

#[cfg(not(feature = "pdf"))]
pub fn render_pdf_to_temp(_document: &RoadmapDocument) -> Option<PathBuf> {
    warn!("PDF backend not compiled in (enable the `pdf` feature); skipping PDF output");
    None
}
