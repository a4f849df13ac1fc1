use std::{
    fs::read_to_string,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{anyhow, bail, Result};
use directories::ProjectDirs;
use log::{info, LevelFilter};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = "cagcap.json";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GpsReceiverConfig {
    pub enable: bool,
    pub port: String,
    pub baud_rate: u32,
    /// Silence after which the fix is reset.
    pub timeout_ms: u64,
    /// Backlog of the message and fix broadcast channels.
    pub channel_capacity: usize,
}

impl Default for GpsReceiverConfig {
    fn default() -> Self {
        Self {
            enable: true,
            port: "/dev/ttyACM0".into(),
            baud_rate: 9600,
            timeout_ms: 3000,
            channel_capacity: 64,
        }
    }
}

impl GpsReceiverConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
        }
    }
}

impl LoggingConfig {
    pub fn level_filter(&self) -> Result<LevelFilter> {
        self.level
            .parse()
            .map_err(|_| anyhow!("invalid log level {:?}", self.level))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct CagCapConfig {
    pub gps_receiver: GpsReceiverConfig,
    pub logging: LoggingConfig,
}

pub fn read_config<P: AsRef<Path>>(path: P) -> Result<CagCapConfig> {
    let config = read_to_string(path)?;
    let config: CagCapConfig = serde_json::from_str(&config)?;
    Ok(config)
}

/// Places searched when no config file is given, in order.
pub fn config_search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(dirs) = ProjectDirs::from("", "", "cagcap") {
        paths.push(dirs.config_dir().join(CONFIG_FILE_NAME));
    }
    paths.push(PathBuf::from(CONFIG_FILE_NAME));
    paths
}

/// An explicit `path` has to exist, otherwise the first file found on
/// [`config_search_paths`] is used and the defaults after that.
pub fn load_config(path: Option<&Path>) -> Result<CagCapConfig> {
    if let Some(path) = path {
        if !path.exists() {
            bail!("config file {} does not exist", path.display());
        }
        return read_config(path);
    }
    load_first(&config_search_paths())
}

fn load_first(paths: &[PathBuf]) -> Result<CagCapConfig> {
    match paths.iter().find(|path| path.exists()) {
        Some(path) => {
            info!("Loading config from {}", path.display());
            read_config(path)
        }
        None => {
            info!("No config file found, using defaults");
            Ok(CagCapConfig::default())
        }
    }
}
