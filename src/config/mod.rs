//! Configuration management for doclint
//!
//! Configuration is layered: embedded defaults, then an optional
//! `doclint.toml` in the working directory (or an explicit `--config` file),
//! then `DOCLINT_`-prefixed environment variables. Command-line flags always
//! win over configuration values.

use anyhow::{Context, Result};
use figment::{
    Figment,
    providers::{Env, Format, Toml},
};
use serde::{Deserialize, Serialize};

// Embed the default config at compile time
const DEFAULT_CONFIG: &str = include_str!("../../default-config.toml");

/// Main configuration structure for doclint
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DoclintConfig {
    /// File discovery settings
    pub files: FilesConfig,

    /// External linter settings
    pub linter: LinterConfig,
}

/// File discovery configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FilesConfig {
    /// Default regex applied to file names when no --pattern is given
    #[serde(default)]
    pub pattern: Option<String>,

    /// Suffixes recognized as documentation files when the linter's output
    /// starts with a bare file path
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

fn default_extensions() -> Vec<String> {
    vec![".md".to_string(), ".mdx".to_string()]
}

/// External linter configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LinterConfig {
    /// Default command template used when no --command is given
    #[serde(default)]
    pub command: Option<String>,
}

impl DoclintConfig {
    /// Load configuration from all layers
    pub fn load(custom_config: Option<&str>) -> Result<Self> {
        let mut figment = Figment::new().merge(Toml::string(DEFAULT_CONFIG));

        // If a custom config is specified, use only that + defaults + env vars
        if let Some(custom_path) = custom_config {
            figment = figment.merge(Toml::file(custom_path));
        } else {
            figment = figment.merge(Toml::file("doclint.toml"));
        }

        // Environment variables always have highest priority
        figment = figment.merge(Env::prefixed("DOCLINT_").split("_"));

        figment.extract().context("failed to load configuration")
    }
}
