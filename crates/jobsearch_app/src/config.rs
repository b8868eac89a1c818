use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use jobsearch_core::Locale;
use jobsearch_engine::{GatewaySettings, DEFAULT_ENDPOINT};
use log::LevelFilter;
use search_logging::LogDestination;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cli::Cli;

const CONFIG_FILENAME: &str = "jobsearch.ron";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] ron::Error),
    #[error("invalid log level `{0}`")]
    LogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub endpoint: String,
    pub connect_timeout_secs: u64,
    pub max_bytes: u64,
    pub locale: Locale,
    pub log: LogDestination,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let gateway = GatewaySettings::default();
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            connect_timeout_secs: gateway.connect_timeout.as_secs(),
            max_bytes: gateway.max_bytes,
            locale: Locale::default(),
            log: LogDestination::default(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Loads `path`, or `./jobsearch.ron` when no path is given.
    ///
    /// Only the implicit file may be absent; an explicit path must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::read(path),
            None => {
                let default_path = PathBuf::from(CONFIG_FILENAME);
                match Self::read(&default_path) {
                    Err(ConfigError::Read { source, .. })
                        if source.kind() == io::ErrorKind::NotFound =>
                    {
                        Ok(Self::default())
                    }
                    other => other,
                }
            }
        }
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        ron::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn apply_overrides(&mut self, cli: &Cli) {
        if let Some(endpoint) = &cli.endpoint {
            self.endpoint = endpoint.clone();
        }
        if let Some(locale) = cli.lang {
            self.locale = locale;
        }
        if let Some(log) = cli.log {
            self.log = log;
        }
    }

    pub fn log_level(&self) -> Result<LevelFilter, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }

    pub fn gateway_settings(&self) -> GatewaySettings {
        GatewaySettings {
            endpoint: self.endpoint.clone(),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            max_bytes: self.max_bytes,
            ..GatewaySettings::default()
        }
    }

    pub fn to_ron(&self) -> Result<String, ConfigError> {
        let pretty = ron::ser::PrettyConfig::new();
        Ok(ron::ser::to_string_pretty(self, pretty)?)
    }
}
