//! PDF layout for the analysis report.

use crate::error::{ReportError, ReportResult};
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference};
use rhetorica_core::TextDirection;
use std::fs::File;
use std::path::PathBuf;
use tracing::{debug, warn};
use unicode_bidi::BidiInfo;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 15.0;
const TITLE_SIZE_PT: f32 = 18.0;
const BODY_SIZE_PT: f32 = 12.0;
const LINE_HEIGHT_MM: f32 = 7.0;
const MM_PER_PT: f32 = 0.3528;
/// Average glyph advance as a fraction of the font size. Good enough
/// for wrapping; the layout never needs exact metrics.
const AVG_GLYPH_EM: f32 = 0.5;

/// Text content of one report.
#[derive(Debug, Clone)]
pub struct ReportContent {
    pub title: String,
    pub score_line: String,
    pub context_line: String,
    pub feedback: String,
    /// Footer line, e.g. a generation date.
    pub footer: Option<String>,
}

/// Rendering options.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub direction: TextDirection,
    /// TTF to embed; when absent or missing on disk the built-in
    /// Helvetica is used, losing non-Latin glyph support.
    pub font_path: Option<PathBuf>,
}

/// Render the report to PDF bytes.
pub fn render_report(content: &ReportContent, options: &ReportOptions) -> ReportResult<Vec<u8>> {
    let (doc, page, layer) = PdfDocument::new(
        &content.title,
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "report",
    );

    let font = load_font(&doc, &options.font_path)?;

    // Explicit content width; a zero-width column would wrap every
    // glyph onto its own line.
    let content_width = PAGE_WIDTH_MM - 2.0 * MARGIN_MM;

    {
        let mut writer = PageWriter {
            doc: &doc,
            layer: doc.get_page(page).get_layer(layer),
            font: &font,
            direction: options.direction,
            content_width,
            y: PAGE_HEIGHT_MM - MARGIN_MM - LINE_HEIGHT_MM,
        };

        writer.write_centered(&content.title, TITLE_SIZE_PT);
        writer.advance(LINE_HEIGHT_MM);

        writer.write_wrapped(&content.score_line, BODY_SIZE_PT);
        writer.write_wrapped(&content.context_line, BODY_SIZE_PT);
        writer.advance(LINE_HEIGHT_MM);

        writer.write_wrapped(&content.feedback, BODY_SIZE_PT);

        if let Some(footer) = &content.footer {
            writer.advance(LINE_HEIGHT_MM);
            writer.write_wrapped(footer, BODY_SIZE_PT);
        }
    }

    let bytes = doc
        .save_to_bytes()
        .map_err(|e| ReportError::Pdf(e.to_string()))?;
    debug!("Rendered report ({} bytes)", bytes.len());
    Ok(bytes)
}

/// Load the configured TTF, falling back to the built-in Helvetica.
fn load_font(
    doc: &PdfDocumentReference,
    font_path: &Option<PathBuf>,
) -> ReportResult<IndirectFontRef> {
    if let Some(path) = font_path {
        if path.exists() {
            let file = File::open(path)?;
            return doc
                .add_external_font(file)
                .map_err(|e| ReportError::Font(format!("{}: {}", path.display(), e)));
        }
        warn!(
            "Font {} not found, falling back to Helvetica (no non-Latin glyphs)",
            path.display()
        );
    }

    doc.add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ReportError::Font(e.to_string()))
}

struct PageWriter<'a> {
    doc: &'a PdfDocumentReference,
    layer: printpdf::PdfLayerReference,
    font: &'a IndirectFontRef,
    direction: TextDirection,
    content_width: f32,
    y: f32,
}

impl PageWriter<'_> {
    fn write_centered(&mut self, text: &str, size_pt: f32) {
        let line = shape_line(text, self.direction);
        let x = ((PAGE_WIDTH_MM - estimate_width_mm(&line, size_pt)) / 2.0).max(MARGIN_MM);
        self.place(&line, size_pt, x);
    }

    /// Wrap a block of text to the content width and place each line,
    /// honoring the reading direction.
    fn write_wrapped(&mut self, text: &str, size_pt: f32) {
        let max_chars = max_chars_per_line(self.content_width, size_pt);
        for line in wrap_text(text, max_chars) {
            let shaped = shape_line(&line, self.direction);
            let x = match self.direction {
                TextDirection::LeftToRight => MARGIN_MM,
                TextDirection::RightToLeft => {
                    (PAGE_WIDTH_MM - MARGIN_MM - estimate_width_mm(&shaped, size_pt))
                        .max(MARGIN_MM)
                }
            };
            self.place(&shaped, size_pt, x);
        }
    }

    fn place(&mut self, line: &str, size_pt: f32, x: f32) {
        if self.y < MARGIN_MM {
            let (page, layer) = self
                .doc
                .add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "report");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = PAGE_HEIGHT_MM - MARGIN_MM - LINE_HEIGHT_MM;
        }

        self.layer
            .use_text(line, size_pt, Mm(x), Mm(self.y), self.font);
        self.y -= LINE_HEIGHT_MM;
    }

    fn advance(&mut self, mm: f32) {
        self.y -= mm;
    }
}

/// Reorder one visual line so a right-to-left script reads correctly
/// in a layout engine that assumes left-to-right flow.
fn shape_line(line: &str, direction: TextDirection) -> String {
    if !direction.is_rtl() || line.is_empty() {
        return line.to_string();
    }

    let bidi = BidiInfo::new(line, None);
    match bidi.paragraphs.first() {
        Some(para) => bidi.reorder_line(para, para.range.clone()).into_owned(),
        None => line.to_string(),
    }
}

/// Greedy word wrap. Existing newlines are respected; words longer
/// than a line are hard-split.
fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut lines = Vec::new();

    for raw_line in text.lines() {
        if raw_line.trim().is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current = String::new();
        for word in raw_line.split_whitespace() {
            let word_len = word.chars().count();

            if !current.is_empty() && current.chars().count() + 1 + word_len > max_chars {
                lines.push(std::mem::take(&mut current));
            }

            if word_len > max_chars {
                // Hard-split an oversized word across lines.
                let mut chunk = String::new();
                for ch in word.chars() {
                    if chunk.chars().count() == max_chars {
                        lines.push(std::mem::take(&mut chunk));
                    }
                    chunk.push(ch);
                }
                current = chunk;
            } else {
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(word);
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }

    lines
}

fn max_chars_per_line(content_width_mm: f32, size_pt: f32) -> usize {
    let char_width_mm = size_pt * AVG_GLYPH_EM * MM_PER_PT;
    (content_width_mm / char_width_mm).floor() as usize
}

fn estimate_width_mm(line: &str, size_pt: f32) -> f32 {
    line.chars().count() as f32 * size_pt * AVG_GLYPH_EM * MM_PER_PT
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content() -> ReportContent {
        ReportContent {
            title: "Rhetorica Analysis Report".to_string(),
            score_line: "Performance Score: 92/100".to_string(),
            context_line: "Goal: General".to_string(),
            feedback: "Good posture.".to_string(),
            footer: Some("Generated: 2026-08-29".to_string()),
        }
    }

    #[test]
    fn test_render_with_builtin_font() {
        let options = ReportOptions {
            direction: TextDirection::LeftToRight,
            font_path: None,
        };
        let bytes = render_report(&content(), &options).unwrap();
        assert!(!bytes.is_empty());
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_missing_font_file_falls_back() {
        let options = ReportOptions {
            direction: TextDirection::LeftToRight,
            font_path: Some(PathBuf::from("/nonexistent/Assistant-Regular.ttf")),
        };
        let bytes = render_report(&content(), &options).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    /// Built-in font text lands in the content stream hex-encoded
    /// (`<hex> Tj`), so the assertion has to compare hex.
    fn hex_encode_upper(s: &str) -> String {
        s.bytes().map(|b| format!("{:02X}", b)).collect()
    }

    #[test]
    fn test_feedback_text_present_in_content_stream() {
        let options = ReportOptions {
            direction: TextDirection::LeftToRight,
            font_path: None,
        };
        let bytes = render_report(&content(), &options).unwrap();
        let pdf_text = String::from_utf8_lossy(&bytes);

        assert!(pdf_text.contains(&hex_encode_upper("Good posture.")));
        assert!(pdf_text.contains(&hex_encode_upper("Performance Score: 92/100")));
    }

    #[test]
    fn test_render_rtl_direction() {
        let options = ReportOptions {
            direction: TextDirection::RightToLeft,
            font_path: None,
        };
        let bytes = render_report(&content(), &options).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_long_feedback_spans_pages() {
        let mut long = content();
        long.feedback = "word ".repeat(5000);
        let options = ReportOptions {
            direction: TextDirection::LeftToRight,
            font_path: None,
        };
        let bytes = render_report(&long, &options).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_shape_line_ltr_untouched() {
        let line = "left to right stays put";
        assert_eq!(shape_line(line, TextDirection::LeftToRight), line);
    }

    #[test]
    fn test_shape_line_reorders_hebrew() {
        let line = "שלום עולם";
        let shaped = shape_line(line, TextDirection::RightToLeft);
        // Visual order is the reverse of logical order for pure RTL text.
        let reversed: String = line.chars().rev().collect();
        assert_eq!(shaped, reversed);
    }

    #[test]
    fn test_shape_line_empty() {
        assert_eq!(shape_line("", TextDirection::RightToLeft), "");
    }

    #[test]
    fn test_wrap_text_respects_width() {
        let lines = wrap_text("one two three four five six seven", 10);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(line.chars().count() <= 10);
        }
    }

    #[test]
    fn test_wrap_text_keeps_newlines() {
        let lines = wrap_text("first\n\nsecond", 80);
        assert_eq!(lines, vec!["first", "", "second"]);
    }

    #[test]
    fn test_wrap_text_hard_splits_long_word() {
        let lines = wrap_text("abcdefghij", 4);
        assert_eq!(lines, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_content_width_never_zero() {
        assert!(PAGE_WIDTH_MM - 2.0 * MARGIN_MM > 0.0);
        assert!(max_chars_per_line(PAGE_WIDTH_MM - 2.0 * MARGIN_MM, BODY_SIZE_PT) > 0);
    }
}
