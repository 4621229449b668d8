//! Configuration management.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SensorsConfig {
    /// Python interpreter configuration
    #[serde(default)]
    pub python: PythonConfig,

    /// CPU sampling configuration
    #[serde(default)]
    pub cpu: CpuConfig,

    /// Ambient (temperature/humidity) peripheral configuration
    #[serde(default)]
    pub ambient: AmbientConfig,
}

/// Python interpreter configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PythonConfig {
    /// Interpreter executable, looked up on PATH
    #[serde(default = "default_interpreter")]
    pub interpreter: String,
}

impl Default for PythonConfig {
    fn default() -> Self {
        Self {
            interpreter: default_interpreter(),
        }
    }
}

/// CPU sampling configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CpuConfig {
    /// Sampling window in milliseconds
    #[serde(default = "default_sample_window")]
    pub sample_window_ms: u64,
}

impl CpuConfig {
    /// Returns the sampling window.
    pub fn sample_window(&self) -> Duration {
        Duration::from_millis(self.sample_window_ms)
    }
}

impl Default for CpuConfig {
    fn default() -> Self {
        Self {
            sample_window_ms: default_sample_window(),
        }
    }
}

/// Ambient peripheral configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmbientConfig {
    /// Directory holding IIO devices
    #[serde(default = "default_iio_root")]
    pub iio_root: PathBuf,

    /// IIO device name of the temperature/humidity driver
    #[serde(default = "default_device_name")]
    pub device_name: String,
}

impl Default for AmbientConfig {
    fn default() -> Self {
        Self {
            iio_root: default_iio_root(),
            device_name: default_device_name(),
        }
    }
}

// Default value functions
fn default_interpreter() -> String {
    "python3".to_string()
}

fn default_sample_window() -> u64 {
    3000
}

fn default_iio_root() -> PathBuf {
    PathBuf::from("/sys/bus/iio/devices")
}

fn default_device_name() -> String {
    // The dht11 driver also serves DHT22 sensors
    "dht11".to_string()
}

impl SensorsConfig {
    /// Loads configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read configuration file")?;
        let config: SensorsConfig =
            toml::from_str(&content).context("Failed to parse configuration")?;
        Ok(config)
    }

    /// Loads configuration from `path` if given, otherwise returns defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Serializes the configuration as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }
}
