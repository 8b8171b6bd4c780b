//! Cover page template
//!
//! Expresses the fixed cover layout as a sequence of flow blocks that the
//! renderer places top to bottom. All dimensions are in points, matching the
//! two paragraph styles the template is built from.

use chrono::{Datelike, NaiveDate};

use super::types::ReportRequest;

/// Presentation parameters for a centered paragraph
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParagraphStyle {
    /// Font size in points
    pub font_size: f32,
    /// Line height in points
    pub leading: f32,
    /// Vertical gap after the paragraph in points
    pub space_after: f32,
}

impl ParagraphStyle {
    /// Title style: large font, extra spacing after
    pub const TITLE: ParagraphStyle = ParagraphStyle {
        font_size: 16.0,
        leading: 20.0,
        space_after: 30.0,
    };

    /// Normal style: body font, moderate spacing
    pub const NORMAL: ParagraphStyle = ParagraphStyle {
        font_size: 12.0,
        leading: 16.0,
        space_after: 12.0,
    };
}

/// One layout primitive of the cover page
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// Institution logo at a fixed size
    Logo,
    /// A centered paragraph; wraps when wider than the content area
    Paragraph { text: String, style: ParagraphStyle },
    /// Fixed vertical gap in points
    Spacer { height: f32 },
}

impl Block {
    fn title(text: impl Into<String>) -> Self {
        Block::Paragraph {
            text: text.into(),
            style: ParagraphStyle::TITLE,
        }
    }

    fn normal(text: impl Into<String>) -> Self {
        Block::Paragraph {
            text: text.into(),
            style: ParagraphStyle::NORMAL,
        }
    }

    fn spacer(height: f32) -> Self {
        Block::Spacer { height }
    }
}

const FRENCH_MONTHS: [&str; 12] = [
    "JANVIER",
    "FÉVRIER",
    "MARS",
    "AVRIL",
    "MAI",
    "JUIN",
    "JUILLET",
    "AOÛT",
    "SEPTEMBRE",
    "OCTOBRE",
    "NOVEMBRE",
    "DÉCEMBRE",
];

/// Formats a date as an upper-cased French long date, e.g. `05 MARS 2026`.
pub fn french_date(date: NaiveDate) -> String {
    let month = FRENCH_MONTHS[date.month0() as usize];
    format!("{:02} {} {}", date.day(), month, date.year())
}

/// Builds the fixed block sequence of the cover page for one request.
///
/// Absent fields substitute as empty strings; no field is validated. The
/// date is the render date, never supplied by the caller.
pub fn cover_story(request: &ReportRequest, date: NaiveDate) -> Vec<Block> {
    let teacher = request.teacher.as_deref().unwrap_or("");
    let course_code = request.course_code.as_deref().unwrap_or("");
    let course_name = request.course_name.as_deref().unwrap_or("");
    let group_number = request.group_number.as_deref().unwrap_or("");
    let project_name = request.project_name.as_deref().unwrap_or("");

    let mut story = vec![
        Block::Logo,
        Block::spacer(50.0),
        Block::title("ÉCOLE DE TECHNOLOGIE SUPÉRIEURE"),
        Block::spacer(30.0),
        Block::normal("RAPPORT DE LABORATOIRE"),
        Block::normal(format!("PRÉSENTÉ À {}", teacher)),
        Block::spacer(30.0),
        Block::normal("DANS LE CADRE DU COURS"),
        Block::normal(format!("{} {}", course_code, course_name)),
        Block::normal(format!("GROUPE {}", group_number)),
        Block::spacer(40.0),
        Block::title(project_name),
        Block::spacer(30.0),
        Block::normal("PAR"),
        Block::spacer(20.0),
    ];

    for line in request.author_lines() {
        story.push(Block::normal(line));
    }

    story.push(Block::spacer(30.0));
    story.push(Block::normal(french_date(date)));

    story
}
