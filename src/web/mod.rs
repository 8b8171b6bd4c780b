//! Web server module for rapport-ets
//!
//! Exposes the cover page renderer over a small REST API:
//!
//! - `POST /preview`  - render and return the PDF inline
//! - `POST /download` - render and return the PDF as an attachment
//! - `GET  /health`   - liveness check
//!
//! # Usage
//!
//! ```bash
//! rapport-ets serve --port 5001
//! ```

mod cors;
mod routes;
mod server;

pub use cors::CorsConfig;
pub use routes::{api_routes, AppState, HealthResponse};
pub use server::{ServerConfig, WebServer};

/// Default server port
pub const DEFAULT_PORT: u16 = 5001;

/// Default bind address
pub const DEFAULT_BIND: &str = "0.0.0.0";

/// Origin of the development front end, the only one allowed by default
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3001";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_constants() {
        assert_eq!(DEFAULT_PORT, 5001);
        assert_eq!(DEFAULT_BIND, "0.0.0.0");
        assert_eq!(DEFAULT_ALLOWED_ORIGIN, "http://localhost:3001");
    }
}
