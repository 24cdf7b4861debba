use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::browser::{DEFAULT_NAVIGATION_TIMEOUT, DEFAULT_PROCESS_TIMEOUT, DEFAULT_SETTLE_DELAY};
use crate::server::DEFAULT_PORT;
use crate::{Result, SnapError};

/// Tool configuration, loadable from a TOML file.
///
/// Both commands run with built-in defaults when no file is given; a config
/// file only widens those defaults (the CLI surface itself stays flag-free).
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct Config {
    pub server: ServerConfig,
    pub capture: CaptureConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct ServerConfig {
    /// Listening port.
    pub port: u16,
    /// Directory files are served from.
    pub root: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct CaptureConfig {
    /// Directory screenshots are written to.
    pub output_dir: PathBuf,
    /// Node.js command used to run the capture helper.
    pub node_command: String,
    /// Whether the browser runs headless.
    pub headless: bool,
    pub timeouts: Timeouts,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct Timeouts {
    /// Page navigation timeout (waits for network idle).
    #[serde(with = "humantime_serde")]
    pub navigation: Duration,
    /// Animation settle delay before the screenshot.
    #[serde(with = "humantime_serde")]
    pub settle: Duration,
    /// Whole capture-helper process timeout.
    #[serde(with = "humantime_serde")]
    pub process: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            root: PathBuf::from("."),
        }
    }
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("temporary screenshots"),
            node_command: "node".to_string(),
            headless: true,
            timeouts: Timeouts::default(),
        }
    }
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            navigation: DEFAULT_NAVIGATION_TIMEOUT,
            settle: DEFAULT_SETTLE_DELAY,
            process: DEFAULT_PROCESS_TIMEOUT,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            capture: CaptureConfig::default(),
        }
    }
}

impl Config {
    /// Loads config from a TOML file, or returns defaults when no path is
    /// given. Parse and validation failures name the offending file.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path).map_err(|e| {
                    SnapError::config(format!(
                        "Failed to read config {}: {}",
                        path.display(),
                        e
                    ))
                })?;
                toml::from_str(&raw).map_err(|e| {
                    SnapError::config(format!("Invalid config ({}): {}", path.display(), e))
                })?
            }
            None => Config::default(),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.server.root.as_os_str().is_empty() {
            return Err(SnapError::config("server.root must not be empty"));
        }
        if self.capture.node_command.is_empty() {
            return Err(SnapError::config("capture.node_command must not be empty"));
        }
        if self.capture.timeouts.settle >= self.capture.timeouts.process {
            return Err(SnapError::config(
                "capture.timeouts.settle must be shorter than capture.timeouts.process",
            ));
        }
        Ok(())
    }
}
