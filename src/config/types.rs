//! Configuration type definitions

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::application::WaitSettings;
use crate::infrastructure::{MarathonSettings, DEFAULT_MARATHON_URL};

/// Marathon endpoint configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarathonConfig {
    #[serde(default = "default_url")]
    pub url: String,

    #[serde(default)]
    pub username: Option<String>,

    #[serde(default)]
    pub password: Option<String>,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for MarathonConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            username: None,
            password: None,
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

fn default_url() -> String {
    DEFAULT_MARATHON_URL.to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

/// Deployment wait configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitConfig {
    /// Overall bound when `--timeout` is absent or zero
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

impl Default for WaitConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    80
}

fn default_poll_interval_ms() -> u64 {
    2000
}

/// Terminal color preference
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub const NAMES: &'static [&'static str] = &["auto", "always", "never"];

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "always" => Some(Self::Always),
            "never" => Some(Self::Never),
            _ => None,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub marathon: MarathonConfig,

    #[serde(default)]
    pub wait: WaitConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    pub fn marathon_settings(&self) -> MarathonSettings {
        MarathonSettings {
            url: self.marathon.url.clone(),
            username: self.marathon.username.clone(),
            password: self.marathon.password.clone(),
            request_timeout: Duration::from_secs(self.marathon.request_timeout_secs),
        }
    }

    /// Waiter timing; a zero interval falls back to the default
    pub fn wait_settings(&self) -> WaitSettings {
        let defaults = WaitSettings::default();
        WaitSettings {
            default_timeout: Some(Duration::from_secs(self.wait.timeout_secs))
                .filter(|d| !d.is_zero())
                .unwrap_or(defaults.default_timeout),
            poll_interval: Some(Duration::from_millis(self.wait.poll_interval_ms))
                .filter(|d| !d.is_zero())
                .unwrap_or(defaults.poll_interval),
        }
    }
}
