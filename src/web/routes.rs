//! REST API routes for the web server
//!
//! Both PDF endpoints parse the JSON body themselves so that malformed input
//! surfaces through the same error shape as a rendering failure: there is
//! exactly one error category, reported as HTTP 500 with `{"error": ...}`.

use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info};

use crate::report::{RenderError, ReportRenderer, ReportRequest, ATTACHMENT_FILENAME};

/// Application state shared across handlers
///
/// The renderer is stateless, so the state is safe to share across any
/// number of concurrent requests without coordination.
#[derive(Clone)]
pub struct AppState {
    pub renderer: ReportRenderer,
    pub version: String,
}

impl AppState {
    pub fn new(renderer: ReportRenderer) -> Self {
        Self {
            renderer,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ReportRenderer::default())
    }
}

/// Build the API router
pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/preview", post(preview_report))
        .route("/download", post(download_report))
        .route("/health", get(health_check))
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Health check endpoint
async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
    })
}

/// Render the cover page and return it inline
async fn preview_report(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<PdfResponse, AppError> {
    let bytes = render_from_body(&state, &body).await?;
    Ok(PdfResponse::inline(bytes))
}

/// Render the cover page and return it as a download attachment
async fn download_report(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<PdfResponse, AppError> {
    let bytes = render_from_body(&state, &body).await?;
    Ok(PdfResponse::attachment(bytes, ATTACHMENT_FILENAME))
}

/// Parse the request body and render it off the async runtime.
async fn render_from_body(state: &AppState, body: &[u8]) -> Result<Vec<u8>, AppError> {
    let request: ReportRequest = serde_json::from_slice(body)?;

    let renderer = state.renderer.clone();
    let bytes = tokio::task::spawn_blocking(move || renderer.render(&request))
        .await
        .map_err(|e| AppError(format!("render task panicked: {}", e)))??;

    info!(size = bytes.len(), "rendered cover page");
    Ok(bytes)
}

/// A generated PDF plus its content disposition
#[derive(Debug)]
pub struct PdfResponse {
    bytes: Vec<u8>,
    disposition: String,
}

impl PdfResponse {
    fn inline(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            disposition: "inline".to_string(),
        }
    }

    fn attachment(bytes: Vec<u8>, filename: &str) -> Self {
        Self {
            bytes,
            disposition: format!("attachment; filename=\"{}\"", filename),
        }
    }
}

impl IntoResponse for PdfResponse {
    fn into_response(self) -> Response {
        (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "application/pdf".to_string()),
                (header::CONTENT_DISPOSITION, self.disposition),
            ],
            self.bytes,
        )
            .into_response()
    }
}

/// API error type
///
/// Parsing and rendering failures collapse into a single category, surfaced
/// uniformly as HTTP 500 with the error text in the body.
#[derive(Debug)]
pub struct AppError(String);

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError(format!("invalid request body: {}", e))
    }
}

impl From<RenderError> for AppError {
    fn from(e: RenderError) -> Self {
        AppError(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        #[derive(Serialize)]
        struct ErrorResponse {
            error: String,
        }

        error!(error = %self.0, "request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse { error: self.0 }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_new() {
        let state = AppState::default();
        assert!(!state.version.is_empty());
    }

    #[test]
    fn test_health_response_serialize() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            version: "0.1.0".to_string(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"status\":\"healthy\""));
        assert!(json.contains("\"version\":\"0.1.0\""));
    }

    #[test]
    fn test_pdf_response_dispositions() {
        let inline = PdfResponse::inline(vec![1, 2, 3]);
        assert_eq!(inline.disposition, "inline");

        let download = PdfResponse::attachment(vec![1, 2, 3], ATTACHMENT_FILENAME);
        assert_eq!(
            download.disposition,
            "attachment; filename=\"rapport_ets.pdf\""
        );
    }

    #[test]
    fn test_app_error_from_json_error() {
        let err = serde_json::from_str::<ReportRequest>("not json").unwrap_err();
        let app_err = AppError::from(err);
        assert!(app_err.0.starts_with("invalid request body"));
    }
}
