/// Server configuration
use crate::error::{Result, ServerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_storage")]
    pub storage: StorageSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub mode: RunMode,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    #[serde(default = "default_database_url")]
    pub database_url: String,
}

/// Controls how much of an internal error reaches the client
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    /// 500 responses carry the underlying error message
    #[default]
    Development,
    /// 500 responses carry an opaque body
    Production,
}

impl RunMode {
    pub fn exposes_errors(self) -> bool {
        self == RunMode::Development
    }
}

impl ServerConfig {
    /// Load configuration from file and environment
    ///
    /// Sources, lowest priority first: `config.toml` (or `path`), variables
    /// prefixed with `ROLLCALL_` using `__` between sections, then `PORT`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_port(path, std::env::var("PORT").ok())
    }

    pub(crate) fn load_with_port(path: Option<&Path>, port: Option<String>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                // Load from config file if it exists
                let config_path = PathBuf::from("config.toml");
                if config_path.exists() {
                    settings = settings.add_source(config::File::from(config_path));
                }
            }
        }

        // Override with environment variables (e.g. ROLLCALL_STORAGE__DATABASE_URL)
        settings = settings.add_source(
            config::Environment::with_prefix("ROLLCALL")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        if let Some(port) = port {
            let port: u16 = port
                .parse()
                .map_err(|_| ServerError::Config(format!("Invalid PORT value: {port}")))?;
            settings = settings
                .set_override("server.port", i64::from(port))
                .map_err(|e| ServerError::Config(e.to_string()))?;
        }

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.storage.database_url.is_empty() {
            return Err(ServerError::Config(
                "Database URL is required (set ROLLCALL_STORAGE__DATABASE_URL)".to_string(),
            ));
        }

        if self.server.port == 0 {
            return Err(ServerError::Config("Port must be non-zero".to_string()));
        }

        Ok(())
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
        mode: RunMode::default(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_storage() -> StorageSettings {
    StorageSettings {
        database_url: default_database_url(),
    }
}

fn default_database_url() -> String {
    "sqlite://./rollcall.db".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            storage: default_storage(),
        }
    }
}
