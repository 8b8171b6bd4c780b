//! PDF rendering of the cover page story
//!
//! Places the flow blocks of [`cover_story`] top to bottom on letter-size
//! pages with the builtin Helvetica face. Paragraphs are wrapped to the
//! content width with approximate glyph metrics and centered; a block that
//! does not fit above the bottom margin starts a new page.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use printpdf::image_crate::codecs::png::PngDecoder;
use printpdf::{
    BuiltinFont, Image, ImageTransform, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference,
};

use super::story::{cover_story, Block, ParagraphStyle};
use super::types::{RenderError, ReportRequest};

const PT_TO_MM: f32 = 25.4 / 72.0;

// US letter with the template's fixed margins, all in millimeters.
const PAGE_WIDTH: f32 = 215.9;
const PAGE_HEIGHT: f32 = 279.4;
const MARGIN_LEFT: f32 = 38.1;
const MARGIN_RIGHT: f32 = 38.1;
const MARGIN_TOP: f32 = 12.7;
const MARGIN_BOTTOM: f32 = 13.97;

const CONTENT_WIDTH: f32 = PAGE_WIDTH - MARGIN_LEFT - MARGIN_RIGHT;

// Logo footprint: 2 in x 1.2 in.
const LOGO_WIDTH: f32 = 50.8;
const LOGO_HEIGHT: f32 = 30.48;
const LOGO_DPI: f32 = 300.0;

/// Renders [`ReportRequest`] records into PDF byte buffers.
///
/// Holds no per-request state; a single instance can serve any number of
/// concurrent requests. The only external dependency is the logo asset,
/// which is read fresh on every render.
#[derive(Debug, Clone)]
pub struct ReportRenderer {
    logo_path: PathBuf,
}

impl ReportRenderer {
    /// Creates a renderer that loads its logo from the given path.
    pub fn new(logo_path: impl Into<PathBuf>) -> Self {
        Self {
            logo_path: logo_path.into(),
        }
    }

    /// Path of the bundled logo asset.
    pub fn default_logo_path() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets/ets_logo.png")
    }

    /// Path the renderer reads the logo from.
    pub fn logo_path(&self) -> &Path {
        &self.logo_path
    }

    /// Renders the cover page dated with the current local date.
    pub fn render(&self, request: &ReportRequest) -> Result<Vec<u8>, RenderError> {
        self.render_at(request, Local::now().date_naive())
    }

    /// Renders the cover page with an explicit date.
    pub fn render_at(
        &self,
        request: &ReportRequest,
        date: NaiveDate,
    ) -> Result<Vec<u8>, RenderError> {
        let story = cover_story(request, date);

        let (doc, page, layer) = PdfDocument::new(
            "Rapport de laboratoire",
            Mm(PAGE_WIDTH),
            Mm(PAGE_HEIGHT),
            "Page 1",
        );
        let font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| RenderError::Pdf(e.to_string()))?;

        let mut layer = doc.get_page(page).get_layer(layer);
        let mut cursor = MARGIN_TOP;
        let mut page_count = 1usize;

        for block in story {
            match block {
                Block::Logo => {
                    if overflows(cursor, LOGO_HEIGHT) {
                        layer = break_page(&doc, &mut page_count);
                        cursor = MARGIN_TOP;
                    }
                    self.draw_logo(&layer, cursor)?;
                    cursor += LOGO_HEIGHT;
                }
                Block::Paragraph { text, style } => {
                    draw_paragraph(
                        &doc,
                        &mut layer,
                        &font,
                        &mut cursor,
                        &mut page_count,
                        &text,
                        style,
                    );
                }
                Block::Spacer { height } => {
                    cursor += height * PT_TO_MM;
                }
            }
        }

        doc.save_to_bytes()
            .map_err(|e| RenderError::Pdf(e.to_string()))
    }

    fn draw_logo(&self, layer: &PdfLayerReference, cursor: f32) -> Result<(), RenderError> {
        let file = File::open(&self.logo_path).map_err(|source| RenderError::LogoNotFound {
            path: self.logo_path.clone(),
            source,
        })?;
        let decoder = PngDecoder::new(BufReader::new(file))
            .map_err(|e| RenderError::LogoDecode(e.to_string()))?;
        let image = Image::try_from(decoder).map_err(|e| RenderError::LogoDecode(e.to_string()))?;

        // Scale the bitmap so it covers exactly the fixed logo footprint.
        let natural_width = image.image.width.0 as f32 * 25.4 / LOGO_DPI;
        let natural_height = image.image.height.0 as f32 * 25.4 / LOGO_DPI;

        image.add_to_layer(
            layer.clone(),
            ImageTransform {
                translate_x: Some(Mm((PAGE_WIDTH - LOGO_WIDTH) / 2.0)),
                translate_y: Some(Mm(PAGE_HEIGHT - cursor - LOGO_HEIGHT)),
                scale_x: Some(LOGO_WIDTH / natural_width),
                scale_y: Some(LOGO_HEIGHT / natural_height),
                dpi: Some(LOGO_DPI),
                ..Default::default()
            },
        );

        Ok(())
    }
}

impl Default for ReportRenderer {
    fn default() -> Self {
        Self::new(Self::default_logo_path())
    }
}

fn overflows(cursor: f32, needed: f32) -> bool {
    cursor + needed > PAGE_HEIGHT - MARGIN_BOTTOM
}

fn break_page(doc: &PdfDocumentReference, page_count: &mut usize) -> PdfLayerReference {
    *page_count += 1;
    let (page, layer) = doc.add_page(
        Mm(PAGE_WIDTH),
        Mm(PAGE_HEIGHT),
        format!("Page {}", page_count),
    );
    doc.get_page(page).get_layer(layer)
}

#[allow(clippy::too_many_arguments)]
fn draw_paragraph(
    doc: &PdfDocumentReference,
    layer: &mut PdfLayerReference,
    font: &IndirectFontRef,
    cursor: &mut f32,
    page_count: &mut usize,
    text: &str,
    style: ParagraphStyle,
) {
    let leading = style.leading * PT_TO_MM;

    for line in wrap_text(text, style.font_size, CONTENT_WIDTH) {
        if overflows(*cursor, leading) {
            *layer = break_page(doc, page_count);
            *cursor = MARGIN_TOP;
        }
        *cursor += leading;

        if line.is_empty() {
            continue;
        }
        let x = MARGIN_LEFT + (CONTENT_WIDTH - text_width(&line, style.font_size)) / 2.0;
        layer.use_text(
            line,
            style.font_size,
            Mm(x.max(MARGIN_LEFT)),
            Mm(PAGE_HEIGHT - *cursor),
            font,
        );
    }

    *cursor += style.space_after * PT_TO_MM;
}

/// Greedy word wrap against the estimated line width.
///
/// An empty paragraph still produces one (empty) line so it occupies its
/// leading, and a single word wider than the limit is emitted unbroken.
fn wrap_text(text: &str, font_size: f32, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current, word)
        };

        if current.is_empty() || text_width(&candidate, font_size) <= max_width {
            current = candidate;
        } else {
            lines.push(current);
            current = word.to_string();
        }
    }

    lines.push(current);
    lines
}

/// Estimated width of a line in millimeters.
fn text_width(text: &str, font_size: f32) -> f32 {
    let ems: f32 = text.chars().map(char_width_em).sum();
    ems * font_size * PT_TO_MM
}

// Approximate Helvetica advance widths, in em, bucketed by glyph class.
fn char_width_em(c: char) -> f32 {
    match c {
        'i' | 'j' | 'l' | '.' | ',' | '\'' | '|' | '!' | ':' | ';' => 0.28,
        'f' | 't' | 'r' | 'I' | '-' | ' ' | '(' | ')' | '[' | ']' => 0.33,
        'm' | 'M' | 'W' | 'w' | '@' => 0.89,
        c if c.is_uppercase() => 0.72,
        c if c.is_ascii_digit() => 0.56,
        _ => 0.55,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::types::Student;

    fn sample_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 5).unwrap()
    }

    #[test]
    fn test_render_produces_pdf_signature() {
        let renderer = ReportRenderer::default();
        let bytes = renderer
            .render_at(&ReportRequest::default(), sample_date())
            .unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
        assert!(bytes.len() > 500);
    }

    #[test]
    fn test_render_with_all_fields() {
        let renderer = ReportRenderer::default();
        let request = ReportRequest {
            teacher: Some("M. Tremblay".into()),
            project_name: Some("Analyse d'un circuit RC".into()),
            course_code: Some("ELE100".into()),
            course_name: Some("Circuits électriques".into()),
            group_number: Some("02".into()),
            students: vec![
                Student {
                    name: Some("Alice".into()),
                    code: Some("A1".into()),
                },
                Student {
                    name: Some("Bob".into()),
                    code: Some("B2".into()),
                },
            ],
        };

        let bytes = renderer.render_at(&request, sample_date()).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
    }

    #[test]
    fn test_render_overflow_starts_new_page() {
        // Enough author lines to overflow the first page.
        let students = (0..80)
            .map(|i| Student {
                name: Some(format!("Étudiant {}", i)),
                code: Some(format!("CODE{:02}", i)),
            })
            .collect();
        let request = ReportRequest {
            students,
            ..Default::default()
        };

        let bytes = ReportRenderer::default()
            .render_at(&request, sample_date())
            .unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
    }

    #[test]
    fn test_missing_logo_is_an_error() {
        let renderer = ReportRenderer::new("/nonexistent/logo.png");
        let err = renderer
            .render_at(&ReportRequest::default(), sample_date())
            .unwrap_err();
        assert!(matches!(err, RenderError::LogoNotFound { .. }));
        assert!(err.to_string().contains("logo"));
    }

    #[test]
    fn test_undecodable_logo_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let bogus = dir.path().join("logo.png");
        std::fs::write(&bogus, b"not a png at all").unwrap();

        let err = ReportRenderer::new(&bogus)
            .render_at(&ReportRequest::default(), sample_date())
            .unwrap_err();
        assert!(matches!(err, RenderError::LogoDecode(_)));
    }

    #[test]
    fn test_wrap_keeps_short_lines_whole() {
        let lines = wrap_text("RAPPORT DE LABORATOIRE", 12.0, CONTENT_WIDTH);
        assert_eq!(lines, vec!["RAPPORT DE LABORATOIRE"]);
    }

    #[test]
    fn test_wrap_splits_long_paragraphs() {
        let text = "UN TITRE DE PROJET PARTICULIÈREMENT LONG QUI NE TIENT PAS \
                    SUR UNE SEULE LIGNE DE LA PAGE COUVERTURE";
        let lines = wrap_text(text, 16.0, CONTENT_WIDTH);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(text_width(line, 16.0) <= CONTENT_WIDTH);
        }
    }

    #[test]
    fn test_wrap_empty_text_yields_one_blank_line() {
        assert_eq!(wrap_text("", 16.0, CONTENT_WIDTH), vec![String::new()]);
    }

    #[test]
    fn test_wrap_never_breaks_single_words() {
        let lines = wrap_text("Anticonstitutionnellement", 80.0, 10.0);
        assert_eq!(lines, vec!["Anticonstitutionnellement"]);
    }
}
