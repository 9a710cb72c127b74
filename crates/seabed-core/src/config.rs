//! Configuration loading and typed config structures for the Seabed simulation.
//!
//! The configuration lives in `seabed-config.yaml` at the project root.
//! Every field has a default, so an empty or missing file yields a working
//! setup that reads `data/` and serves on port 8000.

use std::path::{Path, PathBuf};

use seabed_types::ResourceKind;
use serde::Deserialize;
use tracing::warn;

use crate::strategy::Strategy;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level configuration, mirroring `seabed-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SeabedConfig {
    /// Where snapshot files live and which layers to load.
    #[serde(default)]
    pub data: DataConfig,

    /// The drill scenario served by `/api/drill`.
    #[serde(default)]
    pub drill: DrillConfig,

    /// HTTP bind address.
    #[serde(default)]
    pub server: ServerSettings,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SeabedConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// Environment variables override YAML values:
    /// - `SEABED_DATA_DIR` overrides `data.dir`
    /// - `SEABED_PORT` overrides `server.port`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string, applying env overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes as unit, not as an empty map.
        let mut config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yml::from_str(yaml)?
        };
        config.apply_env_overrides();
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(dir) = std::env::var("SEABED_DATA_DIR") {
            self.data.dir = PathBuf::from(dir);
        }
        if let Ok(port) = std::env::var("SEABED_PORT") {
            match port.parse() {
                Ok(port) => self.server.port = port,
                Err(e) => warn!(value = %port, error = %e, "Ignoring invalid SEABED_PORT"),
            }
        }
    }
}

/// Snapshot file locations.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DataConfig {
    /// Directory holding every snapshot file.
    #[serde(default = "default_data_dir")]
    pub dir: PathBuf,

    /// World snapshot filename inside `dir`.
    #[serde(default = "default_world_file")]
    pub world_file: String,

    /// Grid width in cells.
    #[serde(default = "default_width")]
    pub width: usize,

    /// Grid height in cells.
    #[serde(default = "default_height")]
    pub height: usize,

    /// Resource layers to load.
    #[serde(default = "default_layers")]
    pub layers: Vec<LayerConfig>,
}

impl DataConfig {
    /// Full path of the world snapshot.
    pub fn world_path(&self) -> PathBuf {
        self.dir.join(&self.world_file)
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: default_data_dir(),
            world_file: default_world_file(),
            width: default_width(),
            height: default_height(),
            layers: default_layers(),
        }
    }
}

/// One resource layer and the filename pattern of its daily snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LayerConfig {
    /// Which resource the files hold.
    pub kind: ResourceKind,

    /// Filename pattern inside the data directory, e.g. `oil_data_day_*.csv`.
    pub pattern: String,
}

impl LayerConfig {
    /// The conventional `<slug>_data_day_*.csv` layer for `kind`.
    pub fn conventional(kind: ResourceKind) -> Self {
        Self {
            kind,
            pattern: format!("{}_data_day_*.csv", kind.slug()),
        }
    }
}

/// The drill scenario.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DrillConfig {
    /// Layer the drills collect.
    #[serde(default = "default_target")]
    pub target: ResourceKind,

    /// Layer that discounts perceived value and is tallied as destroyed.
    #[serde(default = "default_preserve")]
    pub preserve: Option<ResourceKind>,

    /// Number of drills. The first starts at the best averaged cell, the
    /// rest at random populated cells.
    #[serde(default = "default_drill_count")]
    pub count: usize,

    /// Movement strategy shared by every drill.
    #[serde(default)]
    pub strategy: Strategy,

    /// Seed for placement and random movement.
    #[serde(default = "default_seed")]
    pub seed: u64,
}

impl Default for DrillConfig {
    fn default() -> Self {
        Self {
            target: default_target(),
            preserve: default_preserve(),
            count: default_drill_count(),
            strategy: Strategy::default(),
            seed: default_seed(),
        }
    }
}

/// HTTP bind address.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerSettings {
    /// Host or IP to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (trace, debug, info, warn, error). `RUST_LOG` wins
    /// when set.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output.
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

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_world_file() -> String {
    "world_array_data_day_1.csv".to_owned()
}

const fn default_width() -> usize {
    seabed_world::WORLD_WIDTH
}

const fn default_height() -> usize {
    seabed_world::WORLD_HEIGHT
}

fn default_layers() -> Vec<LayerConfig> {
    ResourceKind::ALL
        .into_iter()
        .map(LayerConfig::conventional)
        .collect()
}

const fn default_target() -> ResourceKind {
    ResourceKind::Oil
}

#[allow(clippy::unnecessary_wraps)]
const fn default_preserve() -> Option<ResourceKind> {
    Some(ResourceKind::Coral)
}

const fn default_drill_count() -> usize {
    1
}

const fn default_seed() -> u64 {
    42
}

fn default_host() -> String {
    "127.0.0.1".to_owned()
}

const fn default_port() -> u16 {
    8000
}

fn default_log_level() -> String {
    "info".to_owned()
}
