//! Input record and error types for cover page generation

use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Deserializer};
use thiserror::Error;

/// Errors raised while turning a [`ReportRequest`] into a PDF
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("logo asset not found: {path}")]
    LogoNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("logo asset could not be decoded: {0}")]
    LogoDecode(String),

    #[error("PDF generation failed: {0}")]
    Pdf(String),
}

/// One author entry in the request
///
/// Both keys are optional; an entry missing either key simply contributes
/// nothing to that side of the name/code pairing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Student {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}

/// Caller-supplied description of a lab report cover page
///
/// Every field is optional; absent fields render as blank substitutions in
/// their template position. The record is built fresh per request and never
/// persisted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportRequest {
    #[serde(default)]
    pub teacher: Option<String>,

    #[serde(default)]
    pub project_name: Option<String>,

    #[serde(default)]
    pub course_code: Option<String>,

    #[serde(default)]
    pub course_name: Option<String>,

    /// Accepts a JSON string or number; numbers keep their decimal form.
    #[serde(default, deserialize_with = "string_or_number")]
    pub group_number: Option<String>,

    #[serde(default)]
    pub students: Vec<Student>,
}

impl ReportRequest {
    /// Author lines in positional order, formatted as `"{name} - {code}"`.
    ///
    /// Names and codes are paired by position among the entries that carry
    /// them; when the two sequences differ in length the pairing truncates
    /// to the shorter one.
    pub fn author_lines(&self) -> Vec<String> {
        let names = self.students.iter().filter_map(|s| s.name.as_deref());
        let codes = self.students.iter().filter_map(|s| s.code.as_deref());
        names
            .zip(codes)
            .map(|(name, code)| format!("{} - {}", name, code))
            .collect()
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
    }

    let raw = Option::<Raw>::deserialize(deserializer)?;
    Ok(raw.map(|raw| match raw {
        Raw::Text(s) => s,
        Raw::Int(n) => n.to_string(),
        Raw::Float(n) => n.to_string(),
    }))
}
