//! Configuration primitives for the collaboration directory.
//!
//! Stored in a machine-readable TOML file located at:
//!   %APPDATA%/CollabDir/config.toml on Windows
//!   $XDG_DATA_HOME/CollabDir/config.toml on Linux
//!   ~/Library/Application Support/CollabDir/config.toml on macOS
//!
//! The config carries the biography-refinement settings (provider model,
//! target language, word budget, and the optional API credential). The
//! credential can also be supplied through the `COLLABDIR_API_KEY`
//! environment variable, which takes precedence over the file.

use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Root configuration persisted per installation.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Biography refinement options (provider model, language, credential).
    #[serde(default)]
    pub refine: RefineSettings,
}

/// Settings consumed by the biography-refinement collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefineSettings {
    /// API credential for the text-generation provider. Absent credential
    /// means refinement degrades to a pass-through.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Provider model identifier.
    #[serde(default = "default_model")]
    pub model: String,
    /// Language the rewritten biography must be produced in.
    #[serde(default = "default_target_language")]
    pub target_language: String,
    /// Word budget the rewrite prompt asks the provider to respect.
    #[serde(default = "default_max_words")]
    pub max_words: u32,
}

impl Default for RefineSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            target_language: default_target_language(),
            max_words: default_max_words(),
        }
    }
}

fn default_model() -> String {
    "gemini-3-flash-preview".to_string()
}

fn default_target_language() -> String {
    "Español".to_string()
}

const fn default_max_words() -> u32 {
    150
}

impl RefineSettings {
    /// Resolves the credential: environment variable first, config second.
    pub fn resolved_api_key(&self) -> Option<String> {
        if let Ok(key) = env::var(API_KEY_ENV) {
            if !key.trim().is_empty() {
                return Some(key);
            }
        }
        self.api_key
            .as_ref()
            .filter(|key| !key.trim().is_empty())
            .cloned()
    }
}

/// Environment variable carrying the refinement credential.
pub const API_KEY_ENV: &str = "COLLABDIR_API_KEY";

/// Standard name of the config file (resolved per OS at runtime).
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Returns the root directory where the directory app stores data.
///
/// Order of precedence:
/// 1. `COLLABDIR_HOME` environment variable.
/// 2. OS-specific data directory via `directories::BaseDirs`.
pub fn workspace_root() -> Result<PathBuf> {
    if let Ok(path) = env::var("COLLABDIR_HOME") {
        return Ok(PathBuf::from(path));
    }
    let base_dirs = BaseDirs::new().context("Unable to determine OS data directory")?;
    Ok(base_dirs.data_dir().join("CollabDir"))
}

/// Returns the config directory under the workspace root.
pub fn config_dir() -> Result<PathBuf> {
    Ok(workspace_root()?.join("config"))
}

/// Path to the config file.
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Loads the configuration from disk or returns defaults.
pub fn load_or_default() -> Result<AppConfig> {
    let path = config_file_path()?;
    load_from(&path)
}

/// Loads a configuration from an explicit path or returns defaults.
pub fn load_from(path: &Path) -> Result<AppConfig> {
    if path.exists() {
        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let cfg: AppConfig = toml::from_str(&data)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;
        Ok(cfg)
    } else {
        Ok(AppConfig::default())
    }
}

/// Persists the configuration to disk.
pub fn save(config: &AppConfig) -> Result<()> {
    let dir = config_dir()?;
    fs::create_dir_all(&dir)?;
    let path = config_file_path()?;
    let data = toml::to_string_pretty(config)?;
    fs::write(&path, data)?;
    Ok(())
}
