//! Web server implementation
//!
//! Provides the main server struct and configuration.

use axum::Router;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use crate::report::ReportRenderer;

use super::cors::CorsConfig;
use super::routes::{api_routes, AppState};
use super::{DEFAULT_BIND, DEFAULT_PORT};

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to listen on
    pub port: u16,
    /// Address to bind to
    pub bind: String,
    /// Cross-origin policy
    pub cors: CorsConfig,
    /// Logo asset read at render time
    pub logo_path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            bind: DEFAULT_BIND.to_string(),
            cors: CorsConfig::default(),
            logo_path: ReportRenderer::default_logo_path(),
        }
    }
}

impl ServerConfig {
    /// Create a new server config with the given port
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Create a new server config with the given bind address
    pub fn with_bind(mut self, bind: impl Into<String>) -> Self {
        self.bind = bind.into();
        self
    }

    /// Create a new server config with the given CORS policy
    pub fn with_cors(mut self, cors: CorsConfig) -> Self {
        self.cors = cors;
        self
    }

    /// Create a new server config with the given logo asset path
    pub fn with_logo_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.logo_path = path.into();
        self
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.bind, self.port).parse()
    }
}

/// Web server instance
pub struct WebServer {
    config: ServerConfig,
    state: Arc<AppState>,
}

impl WebServer {
    /// Create a new web server with default configuration
    pub fn new() -> Self {
        Self::with_config(ServerConfig::default())
    }

    /// Create a new web server with the given configuration
    pub fn with_config(config: ServerConfig) -> Self {
        let renderer = ReportRenderer::new(&config.logo_path);
        Self {
            config,
            state: Arc::new(AppState::new(renderer)),
        }
    }

    /// Get the server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the router
    pub fn router(&self) -> Router {
        api_routes()
            .layer(self.config.cors.clone().into_layer())
            .with_state(self.state.clone())
    }

    /// Run the server
    pub async fn run(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let addr = self.config.socket_addr()?;
        let router = self.router();

        info!(%addr, "starting server");
        info!("  POST /preview  - render cover page inline");
        info!("  POST /download - render cover page as attachment");
        info!("  GET  /health   - health check");

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, router).await?;

        Ok(())
    }
}

impl Default for WebServer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_default() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 5001);
        assert_eq!(config.bind, "0.0.0.0");
        assert!(config.logo_path.ends_with("assets/ets_logo.png"));
    }

    #[test]
    fn test_server_config_builder() {
        let config = ServerConfig::default()
            .with_port(3000)
            .with_bind("127.0.0.1")
            .with_logo_path("/srv/assets/logo.png")
            .with_cors(CorsConfig::permissive());

        assert_eq!(config.port, 3000);
        assert_eq!(config.bind, "127.0.0.1");
        assert_eq!(config.logo_path, PathBuf::from("/srv/assets/logo.png"));
        assert!(config.cors.allowed_origins.is_none());
    }

    #[test]
    fn test_server_config_socket_addr() {
        let config = ServerConfig::default().with_bind("127.0.0.1");
        let addr = config.socket_addr().unwrap();
        assert_eq!(addr.port(), 5001);
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
    }

    #[test]
    fn test_web_server_with_config() {
        let config = ServerConfig::default().with_port(9000);
        let server = WebServer::with_config(config);
        assert_eq!(server.config().port, 9000);
    }
}
