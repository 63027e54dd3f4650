//! Built-in exclusion rules.

/// Exclusions applied when no configuration source is available.
///
/// Covers version-control metadata, dependency caches and OS metadata files.
pub const DEFAULT_EXCLUSIONS: &[&str] = &[".git", "node_modules", ".DS_Store"];

/// File name looked up in the working directory when no config path is given.
pub const CONFIG_FILE_NAME: &str = "sync-config.json";

/// Directory under the user config dir holding `config.toml`.
pub const APP_CONFIG_DIR: &str = "folder-sync";

/// Returns the built-in exclusions as owned strings.
pub fn default_exclusions() -> Vec<String> {
    DEFAULT_EXCLUSIONS.iter().map(|s| s.to_string()).collect()
}
