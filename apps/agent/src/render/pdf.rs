//! PDF rendering via the `printpdf` backend (behind the `pdf` feature).
//!
//! Lays the roadmap onto US-letter pages with the Helvetica builtin family,
//! wrapping long lines at the layout's column budget and starting a new page
//! when the cursor drops below the page-break threshold.

use std::fs::File;
use std::io::BufWriter;

use printpdf::{
    BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference,
};
use thiserror::Error;

use super::layout::{default_page_layout, wrap_text, PageLayout};
use crate::models::RoadmapDocument;

const PT_TO_MM: f32 = 25.4 / 72.0;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("pdf write failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("pdf backend error: {0}")]
    Backend(String),
}

fn backend<E: std::fmt::Display>(err: E) -> RenderError {
    RenderError::Backend(err.to_string())
}

/// Tracks the current layer and vertical position while text is laid down.
struct PdfCursor<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    layout: &'a PageLayout,
    y_pt: f32,
}

impl PdfCursor<'_> {
    fn break_page_if_needed(&mut self) {
        if self.y_pt < self.layout.page_break_threshold_pt {
            let (page, layer) = self.doc.add_page(
                Mm((self.layout.page_width_pt * PT_TO_MM) as f32),
                Mm((self.layout.page_height_pt * PT_TO_MM) as f32),
                "content",
            );
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y_pt = self.layout.page_height_pt - self.layout.margin_pt;
        }
    }

    /// Draws `text` word-wrapped at `indent_pt` right of the margin, breaking
    /// pages between lines as needed.
    fn draw_wrapped(&mut self, text: &str, indent_pt: f32, size_pt: f32, font: &IndirectFontRef) {
        for line in wrap_text(text, self.layout.wrap_cols(indent_pt)) {
            self.break_page_if_needed();
            self.layer.use_text(
                line,
                size_pt as f32,
                Mm(((self.layout.margin_pt + indent_pt) * PT_TO_MM) as f32),
                Mm((self.y_pt * PT_TO_MM) as f32),
                font,
            );
            self.y_pt -= self.layout.line_height_pt;
        }
    }

    fn space(&mut self, pts: f32) {
        self.y_pt -= pts;
    }
}

/// Writes the roadmap document as a paginated PDF into `file`.
pub fn write_pdf(document: &RoadmapDocument, file: File) -> Result<(), RenderError> {
    let layout = default_page_layout();
    let roadmap = &document.roadmap;

    let (doc, page, layer) = PdfDocument::new(
        roadmap.title.as_str(),
        Mm((layout.page_width_pt * PT_TO_MM) as f32),
        Mm((layout.page_height_pt * PT_TO_MM) as f32),
        "content",
    );
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(backend)?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(backend)?;
    let oblique = doc
        .add_builtin_font(BuiltinFont::HelveticaOblique)
        .map_err(backend)?;

    {
        let mut cursor = PdfCursor {
            doc: &doc,
            layer: doc.get_page(page).get_layer(layer),
            layout: &layout,
            y_pt: layout.page_height_pt - layout.margin_pt,
        };

        cursor.draw_wrapped(&roadmap.title, 0.0, 16.0, &bold);
        cursor.space(8.0);
        cursor.draw_wrapped(
            &format!(
                "Duration: {} days | Total Hours: {}",
                roadmap.duration_days.as_days(),
                roadmap.total_estimated_hours
            ),
            0.0,
            12.0,
            &regular,
        );
        cursor.space(12.0);

        for level in &roadmap.levels {
            cursor.draw_wrapped(
                &format!(
                    "Level {}: {} (Est. {} hrs)",
                    level.level, level.title, level.estimated_hours
                ),
                0.0,
                13.0,
                &bold,
            );
            cursor.space(4.0);
            for topic in &level.topics {
                cursor.draw_wrapped(&format!("- Topic: {}", topic.topic), 10.0, 11.0, &bold);
                cursor.draw_wrapped(&format!("Activity: {}", topic.activity), 30.0, 11.0, &regular);
                cursor.draw_wrapped(
                    &format!("Est. Hours: {}", topic.estimated_hours),
                    30.0,
                    11.0,
                    &regular,
                );
                cursor.draw_wrapped(
                    &format!("Justification: {}", topic.justification),
                    30.0,
                    11.0,
                    &oblique,
                );
                cursor.space(8.0);
            }
            cursor.space(8.0);
        }
    }

    doc.save(&mut BufWriter::new(file)).map_err(backend)?;
    Ok(())
}
