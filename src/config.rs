use crate::error::{BumpError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the project-local configuration file.
pub const CONFIG_FILE_NAME: &str = "bumpcheck.toml";

/// Represents the complete configuration for bump-check.
///
/// Every section falls back to its defaults, so an empty file is equivalent
/// to running without one.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub descriptor: DescriptorConfig,

    #[serde(default)]
    pub git: GitConfig,

    #[serde(default)]
    pub behavior: BehaviorConfig,
}

fn default_descriptor_path() -> String {
    "pom.xml".to_string()
}

fn default_element_suffix() -> String {
    crate::descriptor::DEFAULT_ELEMENT_SUFFIX.to_string()
}

fn default_base_ref() -> String {
    "origin/main".to_string()
}

fn default_head_ref() -> String {
    "HEAD".to_string()
}

/// Which build descriptor to inspect and how to find its version.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DescriptorConfig {
    /// Path relative to the repository root, also used for the rewrite
    #[serde(default = "default_descriptor_path")]
    pub path: String,

    #[serde(default = "default_element_suffix")]
    pub element_suffix: String,
}

impl Default for DescriptorConfig {
    fn default() -> Self {
        DescriptorConfig {
            path: default_descriptor_path(),
            element_suffix: default_element_suffix(),
        }
    }
}

/// How git history is read.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Shell out to the `git` executable
    #[default]
    Cli,
    /// Read the object database through libgit2
    Libgit2,
}

/// Revisions compared by the check.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct GitConfig {
    #[serde(default = "default_base_ref")]
    pub base_ref: String,

    #[serde(default = "default_head_ref")]
    pub head_ref: String,

    #[serde(default)]
    pub backend: Backend,
}

impl Default for GitConfig {
    fn default() -> Self {
        GitConfig {
            base_ref: default_base_ref(),
            head_ref: default_head_ref(),
            backend: Backend::default(),
        }
    }
}

/// Configuration for behavior customization.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct BehaviorConfig {
    /// Exit with a failing status when the head version was not bumped
    #[serde(default)]
    pub fail_if_not_bumped: bool,
}

/// Parses configuration from TOML text.
pub fn parse_config(text: &str) -> Result<Config> {
    toml::from_str(text).map_err(|e| BumpError::config(e.to_string()))
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `bumpcheck.toml` in current directory
/// 3. `.bumpcheck.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)
            .map_err(|e| BumpError::config(format!("Cannot read '{}': {}", path, e)))?
    } else if Path::new(CONFIG_FILE_NAME).exists() {
        fs::read_to_string(CONFIG_FILE_NAME)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(format!(".{}", CONFIG_FILE_NAME));
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    parse_config(&config_str)
}
