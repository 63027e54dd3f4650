//! Exclusion config discovery
//!
//! Lookup order: explicit `--config` path, `sync-config.json` in the working
//! directory, `<config dir>/folder-sync/config.toml`, then built-in defaults.

use std::path::{Path, PathBuf};

use folder_fs::constants::{APP_CONFIG_DIR, CONFIG_FILE_NAME};
use folder_fs::{ConfigStore, ExclusionConfig};

use crate::error::Result;

/// Where the active configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Explicit(PathBuf),
    WorkingDir(PathBuf),
    UserDir(PathBuf),
    BuiltIn,
}

/// Resolve and load the exclusion configuration.
///
/// An explicit path must load successfully. Discovered files that fail to
/// parse are also reported as errors rather than silently skipped.
pub fn load(explicit: Option<&Path>, cwd: &Path) -> Result<(ExclusionConfig, ConfigSource)> {
    let store = ConfigStore::new();

    if let Some(path) = explicit {
        let path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            cwd.join(path)
        };
        let config = store.load_exclusions(&path)?;
        return Ok((config, ConfigSource::Explicit(path)));
    }

    let local = cwd.join(CONFIG_FILE_NAME);
    if local.is_file() {
        let config = store.load_exclusions(&local)?;
        return Ok((config, ConfigSource::WorkingDir(local)));
    }

    if let Some(user) = user_config_path()
        && user.is_file()
    {
        let config = store.load_exclusions(&user)?;
        return Ok((config, ConfigSource::UserDir(user)));
    }

    tracing::debug!("No config file found, using built-in exclusions");
    Ok((ExclusionConfig::default(), ConfigSource::BuiltIn))
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_CONFIG_DIR).join("config.toml"))
}
