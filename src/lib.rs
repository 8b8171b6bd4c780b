//! rapport-ets - cover page generator for ÉTS lab reports
//!
//! A small HTTP service (and matching CLI) that maps a JSON description of a
//! lab report - course, teacher, group, authors - onto a fixed cover page
//! template and renders it as a PDF.
//!
//! - [`report`] holds the input record, the template and the PDF renderer.
//! - [`web`] exposes the renderer over a three-endpoint REST API.
//! - [`config`] and [`cli`] wire both into a deployable binary.

pub mod cli;
pub mod config;
pub mod report;
pub mod web;

pub use cli::{Cli, Commands, RenderArgs, ServeArgs};
pub use config::{Config, ConfigError};
pub use report::{RenderError, ReportRenderer, ReportRequest, Student, ATTACHMENT_FILENAME};
pub use web::{AppState, CorsConfig, ServerConfig, WebServer};
