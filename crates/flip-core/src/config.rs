// Rust guideline compliant 2026-08-05

//! Configuration management for Flip.

use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// Human-readable table format.
    #[default]
    Table,
    /// Plain text format.
    Plain,
}

/// Configuration for Flip behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Whether an empty collection is seeded with example cards on review.
    #[serde(default = "default_seed_on_empty")]
    pub seed_on_empty: bool,

    /// Whether deleting a card asks for confirmation first.
    #[serde(default = "default_confirm_delete")]
    pub confirm_delete: bool,

    /// Default output format for commands.
    #[serde(default)]
    pub output_format: OutputFormat,
}

/// Default for seeding an empty collection.
fn default_seed_on_empty() -> bool {
    true
}

/// Default for delete confirmation.
fn default_confirm_delete() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed_on_empty: default_seed_on_empty(),
            confirm_delete: default_confirm_delete(),
            output_format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides
    /// earlier):
    /// 1. Default values
    /// 2. Configuration file at `<data dir>/config.toml`
    /// 3. Environment variables with `FLIP_` prefix
    ///
    /// # Arguments
    ///
    /// * `data_dir` - Path to the Flip data directory
    ///
    /// # Returns
    ///
    /// A Config struct with values from file and environment variables
    /// applied.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration file exists but cannot be read
    /// - The configuration file contains invalid TOML
    /// - Environment variable values fail to parse
    pub fn load(data_dir: &Path) -> Result<Self> {
        let mut config = Self::default();

        let config_path = data_dir.join("config.toml");
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let file_config: Config = toml::from_str(&content)
                .map_err(|e| crate::Error::InvalidConfig(format!("Invalid config file: {}", e)))?;
            config = file_config;
        }

        config.apply_env_overrides()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `FLIP_SEED_ON_EMPTY` - Seed example cards on empty (true/false)
    /// - `FLIP_CONFIRM_DELETE` - Confirm before delete (true/false)
    /// - `FLIP_OUTPUT_FORMAT` - Output format (json/table/plain)
    ///
    /// # Returns
    ///
    /// Ok if all environment variables are valid, Err otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable values are invalid.
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("FLIP_SEED_ON_EMPTY") {
            self.seed_on_empty = val.parse().map_err(|_| {
                crate::Error::InvalidConfig("FLIP_SEED_ON_EMPTY must be true or false".to_string())
            })?;
        }

        if let Ok(val) = std::env::var("FLIP_CONFIRM_DELETE") {
            self.confirm_delete = val.parse().map_err(|_| {
                crate::Error::InvalidConfig("FLIP_CONFIRM_DELETE must be true or false".to_string())
            })?;
        }

        if let Ok(val) = std::env::var("FLIP_OUTPUT_FORMAT") {
            self.output_format = match val.as_str() {
                "json" => OutputFormat::Json,
                "table" => OutputFormat::Table,
                "plain" => OutputFormat::Plain,
                _ => {
                    return Err(crate::Error::InvalidConfig(
                        "FLIP_OUTPUT_FORMAT must be json, table, or plain".to_string(),
                    ))
                }
            };
        }

        Ok(())
    }

    /// Saves the configuration to a TOML file.
    ///
    /// # Arguments
    ///
    /// * `data_dir` - Path to the Flip data directory
    ///
    /// # Returns
    ///
    /// Ok if the file was written successfully, Err otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be created or written
    /// - Serialization fails
    pub fn save(&self, data_dir: &Path) -> Result<()> {
        let config_path = data_dir.join("config.toml");
        let content = toml::to_string_pretty(self).map_err(|e| {
            crate::Error::InvalidConfig(format!("Failed to serialize config: {}", e))
        })?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}

/// Resolves the Flip data directory.
///
/// Resolution order: an explicit override, the `FLIP_DIR` environment
/// variable, the platform-local data directory, then `.flip` under the
/// current directory as a last resort.
///
/// # Arguments
///
/// * `override_dir` - Optional explicit directory (e.g. from a CLI flag)
///
/// # Returns
///
/// The directory Flip stores its collection and config in.
#[must_use]
pub fn data_dir(override_dir: Option<&Path>) -> PathBuf {
    if let Some(dir) = override_dir {
        return dir.to_path_buf();
    }

    if let Ok(dir) = std::env::var("FLIP_DIR") {
        if !dir.is_empty() {
            return PathBuf::from(dir);
        }
    }

    dirs::data_local_dir()
        .map(|dir| dir.join("flip"))
        .unwrap_or_else(|| PathBuf::from(".flip"))
}
