//! Configuration module for Deckhand
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (DECKHAND_*)
//! 3. Config file (`--config`, else ~/.config/deckhand/config.toml)
//! 4. Built-in defaults (lowest priority)

mod env_validator;
mod loader;
mod types;

pub use env_validator::{closest, levenshtein, EnvVarValidator, Expected};
pub use loader::{
    load, load_with_warnings, parse_with_warnings, user_config_path, with_env_overrides,
    ConfigWarning, LoadedConfig,
};
pub use types::{ColorMode, Config, MarathonConfig, OutputConfig, WaitConfig};
