//! Lab report cover page generation
//!
//! Turns a caller-supplied [`ReportRequest`] into a single-page PDF cover
//! laid out as a fixed sequence of flow blocks (logo, paragraphs, spacers).
//! The template and wording follow the ÉTS lab report convention; every
//! input field is optional and substitutes as an empty string when absent.

mod renderer;
mod story;
mod types;

pub use renderer::ReportRenderer;
pub use story::{cover_story, french_date, Block, ParagraphStyle};
pub use types::{RenderError, ReportRequest, Student};

/// Filename suggested to clients downloading a generated cover page.
pub const ATTACHMENT_FILENAME: &str = "rapport_ets.pdf";
