//! Configuration loading

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{DeckhandError, DeckhandResult};

use super::env_validator::{closest, EnvVarValidator, Expected};
use super::types::{ColorMode, Config};

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, ". Did you mean '{}'?", suggestion)?;
        }
        Ok(())
    }
}

/// Effective configuration plus everything worth warning about
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the config came from, if any
    pub source: Option<PathBuf>,
    pub warnings: Vec<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> DeckhandResult<(Config, Vec<ConfigWarning>)> {
    let content = std::fs::read_to_string(path).map_err(|e| DeckhandError::FileRead {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    parse_with_warnings(path, &content)
}

pub fn parse_with_warnings(path: &Path, content: &str) -> DeckhandResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| DeckhandError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: closest(&key, KNOWN_KEYS).map(str::to_string),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from `explicit`, else the user config, else defaults; then apply env
///
/// An explicit path must exist. A missing user config is not an error.
pub fn load<F>(explicit: Option<&Path>, get_env: F) -> DeckhandResult<LoadedConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => user_config_path(&get_env).filter(|p| p.is_file()),
    };

    let mut loaded = LoadedConfig::default();
    if let Some(path) = path {
        debug!(path = %path.display(), "loading config");
        let (config, warnings) = load_with_warnings(&path)?;
        loaded.config = config;
        loaded.warnings = warnings.iter().map(ToString::to_string).collect();
        loaded.source = Some(path);
    }

    loaded.config = with_env_overrides(loaded.config, &get_env, &mut loaded.warnings);
    Ok(loaded)
}

/// Apply environment variable overrides (DECKHAND_* prefix)
pub fn with_env_overrides<F>(mut config: Config, get_env: F, warnings: &mut Vec<String>) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |name: &str| get_env(name).filter(|v| !v.trim().is_empty());

    if let Some(url) = non_empty("DECKHAND_MARATHON_URL") {
        config.marathon.url = url;
    }
    if let Some(user) = non_empty("DECKHAND_MARATHON_USER") {
        config.marathon.username = Some(user);
    }
    if let Some(password) = get_env("DECKHAND_MARATHON_PASSWORD") {
        config.marathon.password = Some(password);
    }

    if let Some(raw) = non_empty("DECKHAND_WAIT_TIMEOUT_SECS") {
        let validator = EnvVarValidator::new(
            "DECKHAND_WAIT_TIMEOUT_SECS",
            Expected::Described("a whole number of seconds"),
        );
        if let Some(secs) = validator.parse(&raw, |s| s.trim().parse::<u64>().ok(), warnings) {
            config.wait.timeout_secs = secs;
        }
    }

    if let Some(raw) = non_empty("DECKHAND_COLOR") {
        let validator = EnvVarValidator::new("DECKHAND_COLOR", Expected::OneOf(ColorMode::NAMES));
        if let Some(color) = validator.parse(&raw, ColorMode::parse, warnings) {
            config.output.color = color;
        }
    }

    config
}

/// `$XDG_CONFIG_HOME/deckhand/config.toml`, falling back to the platform config dir
pub fn user_config_path<F>(get_env: F) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    get_env("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
        .map(|dir| dir.join("deckhand").join("config.toml"))
}

const KNOWN_KEYS: &[&str] = &[
    "marathon",
    "url",
    "username",
    "password",
    "request_timeout_secs",
    "wait",
    "timeout_secs",
    "poll_interval_ms",
    "output",
    "color",
];

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}
