use serde::{Deserialize, Serialize};
use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use crate::core::utils::{ensure_dir, PathResolver};
use crate::errors::{FarmError, Result};
use crate::storage::json_backend::write_json_atomic;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => f.write_str("light"),
            Theme::Dark => f.write_str("dark"),
        }
    }
}

/// User preferences persisted between sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub theme: Theme,
    /// Username pre-filled on the login screen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remembered_user: Option<String>,
    /// Extra tracing directive, e.g. `safra_core=debug`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        Self::from_base(PathResolver::base_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self> {
        Self::from_base(base)
    }

    fn from_base(base: PathBuf) -> Result<Self> {
        ensure_dir(&base)?;
        ensure_dir(&PathResolver::config_dir_in(&base))?;
        Ok(Self {
            path: PathResolver::config_file_in(&base),
        })
    }

    /// Loads the stored preferences, or the defaults when none were saved yet.
    pub fn load(&self) -> Result<Config> {
        if !self.path.exists() {
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        serde_json::from_str(&data).map_err(|err| {
            FarmError::Config(format!("{} is not valid: {}", self.path.display(), err))
        })
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        write_json_atomic(&self.path, config)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempdir().expect("temp dir");
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");
        let config = manager.load().expect("load defaults");
        assert_eq!(config.theme, Theme::Dark);
        assert!(config.remembered_user.is_none());
        assert!(manager.path().ends_with("config/config.json"));
    }

    #[test]
    fn preferences_round_trip() {
        let dir = tempdir().expect("temp dir");
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");
        let config = Config {
            theme: Theme::Light,
            remembered_user: Some("joao".into()),
            log_filter: Some("safra_core=debug".into()),
        };
        manager.save(&config).expect("save");

        let raw = fs::read_to_string(manager.path()).expect("read raw");
        assert!(raw.contains("\"light\""));
        assert_eq!(manager.load().expect("reload"), config);
    }

    #[test]
    fn corrupt_file_is_a_config_error() {
        let dir = tempdir().expect("temp dir");
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");
        fs::write(manager.path(), "{ not json").expect("write garbage");
        let err = manager.load().expect_err("corrupt config");
        assert!(matches!(err, FarmError::Config(_)));
    }
}
