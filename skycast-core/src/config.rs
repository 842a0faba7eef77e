use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{env, fs, path::PathBuf};

/// Environment variable holding the Visual Crossing API key. Takes
/// precedence over the key stored in the config file.
pub const API_KEY_ENV: &str = "API_KEY";

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub api_key: Option<String>,
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "skycast", "skycast")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Set/replace the stored API key.
    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key);
    }

    /// Resolve the API key to use for requests: the `API_KEY` environment
    /// variable wins, then the stored key.
    pub fn resolve_api_key(&self) -> Result<String> {
        pick_api_key(env_api_key(), self.api_key.clone()).ok_or_else(|| {
            anyhow!(
                "No API key configured.\n\
                 Hint: set the {API_KEY_ENV} environment variable, or run `skycast configure` \
                 to store a key."
            )
        })
    }
}

/// Key from the process environment, if set and non-empty.
fn env_api_key() -> Option<String> {
    env::var(API_KEY_ENV).ok().filter(|key| !key.is_empty())
}

fn pick_api_key(from_env: Option<String>, stored: Option<String>) -> Option<String> {
    from_env.or(stored)
}
