//! Server configuration
//!
//! Layered: defaults -> YAML file -> environment (`APP__*`) -> CLI overrides.

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;

/// DSN used by `--mock`
pub const MOCK_DATABASE_URL: &str = "sqlite::memory:";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub admin_panel: admin_panel::Config,
    #[serde(default)]
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    #[serde(default = "default_database_url")]
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            max_connections: default_max_connections(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` takes precedence
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuthConfig {
    #[serde(default)]
    pub tokens: Vec<TokenConfig>,
}

/// Static bearer token granting a set of capabilities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TokenConfig {
    pub token: String,
    pub user_id: String,
    #[serde(default)]
    pub capabilities: Vec<String>,
}

fn default_bind_addr() -> String {
    "127.0.0.1".to_owned()
}

fn default_port() -> u16 {
    8087
}

fn default_database_url() -> String {
    "sqlite://admin_panel.db?mode=rwc".to_owned()
}

fn default_max_connections() -> u32 {
    5
}

fn default_log_level() -> String {
    "info".to_owned()
}

/// Command-line values that override the loaded configuration
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub verbose: u8,
    pub mock: bool,
}

impl AppConfig {
    /// Load defaults, then the YAML file if given, then `APP__*` variables
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        figment = figment.merge(Env::prefixed("APP__").split("__"));

        figment.extract().context("invalid configuration")
    }

    pub fn apply_cli_overrides(&mut self, overrides: &CliOverrides) {
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        // -v info, -vv debug, -vvv trace
        match overrides.verbose {
            0 => {}
            1 => self.logging.level = "info".to_owned(),
            2 => self.logging.level = "debug".to_owned(),
            _ => self.logging.level = "trace".to_owned(),
        }
        if overrides.mock {
            self.database.url = MOCK_DATABASE_URL.to_owned();
            self.database.max_connections = 1;
        }
    }

    /// Socket address the HTTP server binds to
    pub fn bind_address(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.server.bind_addr, self.server.port)
            .parse()
            .with_context(|| {
                format!(
                    "invalid bind address {}:{}",
                    self.server.bind_addr, self.server.port
                )
            })
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("failed to render configuration")
    }
}
