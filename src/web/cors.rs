//! CORS (Cross-Origin Resource Sharing) configuration
//!
//! The service is consumed by a single development front end, so the default
//! policy is deliberately narrow: one origin, GET and POST, and the
//! `Content-Type` request header.

use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};

use super::DEFAULT_ALLOWED_ORIGIN;

/// CORS configuration
#[derive(Debug, Clone)]
pub struct CorsConfig {
    /// Allowed origins (None = allow all)
    pub allowed_origins: Option<Vec<String>>,
    /// Allowed HTTP methods
    pub allowed_methods: Vec<String>,
    /// Allowed request headers
    pub allowed_headers: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: Some(vec![DEFAULT_ALLOWED_ORIGIN.to_string()]),
            allowed_methods: vec!["GET".to_string(), "POST".to_string()],
            allowed_headers: vec!["Content-Type".to_string()],
        }
    }
}

impl CorsConfig {
    /// Create a permissive config (allow every origin) - for development
    pub fn permissive() -> Self {
        Self {
            allowed_origins: None,
            ..Default::default()
        }
    }

    /// Create a config restricted to the given origins
    pub fn with_origins(origins: Vec<String>) -> Self {
        Self {
            allowed_origins: Some(origins),
            ..Default::default()
        }
    }

    /// Check if a specific origin is allowed
    pub fn is_origin_allowed(&self, origin: &str) -> bool {
        match &self.allowed_origins {
            None => true,
            Some(origins) => origins.iter().any(|o| o == origin || o == "*"),
        }
    }

    /// Check if a method is allowed
    pub fn is_method_allowed(&self, method: &str) -> bool {
        self.allowed_methods
            .iter()
            .any(|m| m.eq_ignore_ascii_case(method))
    }

    /// Convert to tower-http CorsLayer
    pub fn into_layer(self) -> CorsLayer {
        let mut layer = CorsLayer::new();

        match &self.allowed_origins {
            None => layer = layer.allow_origin(Any),
            Some(origins) => {
                let origins: Vec<HeaderValue> = origins
                    .iter()
                    .filter_map(|o| o.parse::<HeaderValue>().ok())
                    .collect();
                if !origins.is_empty() {
                    layer = layer.allow_origin(origins);
                }
            }
        }

        let methods: Vec<Method> = self
            .allowed_methods
            .iter()
            .filter_map(|m| m.parse::<Method>().ok())
            .collect();
        if !methods.is_empty() {
            layer = layer.allow_methods(methods);
        }

        let headers: Vec<HeaderName> = self
            .allowed_headers
            .iter()
            .filter_map(|h| h.parse::<HeaderName>().ok())
            .collect();
        if !headers.is_empty() {
            layer = layer.allow_headers(headers);
        }

        layer
    }
}
