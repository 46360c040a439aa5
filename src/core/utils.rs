use dirs::home_dir;
use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

const DEFAULT_DIR_NAME: &str = ".safra_core";
const HOME_ENV: &str = "SAFRA_CORE_HOME";
const SNAPSHOT_DIR: &str = "snapshots";
const CONFIG_DIR: &str = "config";
const CONFIG_FILE: &str = "config.json";

/// Resolves the directory layout used by storage and configuration.
pub struct PathResolver;

impl PathResolver {
    /// Returns the application data directory, defaulting to `~/.safra_core`.
    pub fn base_dir() -> PathBuf {
        if let Some(custom) = env::var_os(HOME_ENV) {
            return PathBuf::from(custom);
        }
        home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DEFAULT_DIR_NAME)
    }

    pub fn resolve_base(custom: Option<PathBuf>) -> PathBuf {
        custom.unwrap_or_else(Self::base_dir)
    }

    pub fn snapshot_dir_in(base: &Path) -> PathBuf {
        base.join(SNAPSHOT_DIR)
    }

    pub fn config_dir_in(base: &Path) -> PathBuf {
        base.join(CONFIG_DIR)
    }

    pub fn config_file_in(base: &Path) -> PathBuf {
        Self::config_dir_in(base).join(CONFIG_FILE)
    }
}

pub fn ensure_dir(path: &Path) -> io::Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_relative_to_base() {
        let base = PathBuf::from("/tmp/farm");
        assert_eq!(
            PathResolver::snapshot_dir_in(&base),
            PathBuf::from("/tmp/farm/snapshots")
        );
        assert_eq!(
            PathResolver::config_file_in(&base),
            PathBuf::from("/tmp/farm/config/config.json")
        );
    }

    #[test]
    fn explicit_base_wins() {
        let custom = PathBuf::from("/srv/farm");
        assert_eq!(PathResolver::resolve_base(Some(custom.clone())), custom);
    }
}
