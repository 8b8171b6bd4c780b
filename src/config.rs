//! Configuration file support
//!
//! Settings load from `./rapport.toml` when present, falling back to the
//! user config directory. Command-line flags take precedence over file
//! values; everything has a default, so no file is required.
//!
//! ```toml
//! [server]
//! bind = "0.0.0.0"
//! port = 5001
//!
//! [cors]
//! allowed_origins = ["http://localhost:3001"]
//!
//! [report]
//! logo = "assets/ets_logo.png"
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::web::{CorsConfig, ServerConfig};

/// Local config filename, looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "rapport.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// File-backed configuration; every field optional
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerSection,
    pub cors: CorsSection,
    pub report: ReportSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    pub bind: Option<String>,
    pub port: Option<u16>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CorsSection {
    pub allowed_origins: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ReportSection {
    pub logo: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default locations.
    ///
    /// Tries `./rapport.toml`, then the user config directory. When neither
    /// exists the default configuration is returned.
    pub fn load() -> Result<Config, ConfigError> {
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.is_file() {
            return Self::load_from_path(&local);
        }

        if let Some(user) = Self::user_config_path() {
            if user.is_file() {
                return Self::load_from_path(&user);
            }
        }

        Ok(Config::default())
    }

    /// Load configuration from an explicit path.
    pub fn load_from_path(path: &Path) -> Result<Config, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Per-user config file location, if the platform defines one.
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("rapport-ets/config.toml"))
    }

    /// Fold the file values onto the server defaults.
    pub fn server_config(&self) -> ServerConfig {
        let mut config = ServerConfig::default();

        if let Some(bind) = &self.server.bind {
            config.bind = bind.clone();
        }
        if let Some(port) = self.server.port {
            config.port = port;
        }
        if let Some(origins) = &self.cors.allowed_origins {
            config.cors = CorsConfig::with_origins(origins.clone());
        }
        if let Some(logo) = &self.report.logo {
            config.logo_path = logo.clone();
        }

        config
    }
}
