//! Exclusion configuration loading
//!
//! The configuration is a plain value loaded once by the caller and turned
//! into [`ExclusionRules`]; nothing here is global.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::constants::default_exclusions;
use crate::{Error, ExclusionRules, Result};

/// The two rule lists read from a config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExclusionConfig {
    /// Baseline rules. Falls back to the built-in set when omitted.
    #[serde(default = "default_exclusions")]
    pub default_exclusions: Vec<String>,
    /// Project- or user-specific additions.
    #[serde(default)]
    pub custom_exclusions: Vec<String>,
}

impl Default for ExclusionConfig {
    fn default() -> Self {
        Self {
            default_exclusions: default_exclusions(),
            custom_exclusions: Vec::new(),
        }
    }
}

impl ExclusionConfig {
    /// Append extra custom rules, e.g. from the command line.
    pub fn with_custom<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.custom_exclusions.extend(extra.into_iter().map(Into::into));
        self
    }

    /// Default rules followed by custom rules.
    pub fn all_rules(&self) -> impl Iterator<Item = &str> {
        self.default_exclusions
            .iter()
            .chain(self.custom_exclusions.iter())
            .map(String::as_str)
    }

    /// Compile the union of both lists.
    pub fn rules(&self) -> Result<ExclusionRules> {
        ExclusionRules::new(self.all_rules())
    }
}

/// Format-agnostic configuration loader.
///
/// Detects the format from the file extension.
#[derive(Debug, Default)]
pub struct ConfigStore;

impl ConfigStore {
    pub fn new() -> Self {
        Self
    }

    /// Load configuration from a file.
    ///
    /// Format is detected from file extension:
    /// - `.toml` -> TOML
    /// - `.json` -> JSON
    /// - `.yaml`, `.yml` -> YAML
    pub fn load<T: DeserializeOwned>(&self, path: &Path) -> Result<T> {
        let native = path.to_path_buf();
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().into_owned())
            .unwrap_or_default();

        match extension.to_lowercase().as_str() {
            "toml" => toml::from_str(&content).map_err(|e| Error::ConfigParse {
                path: native,
                format: "TOML".into(),
                message: e.to_string(),
            }),
            "json" => serde_json::from_str(&content).map_err(|e| Error::ConfigParse {
                path: native,
                format: "JSON".into(),
                message: e.to_string(),
            }),
            "yaml" | "yml" => serde_yaml::from_str(&content).map_err(|e| Error::ConfigParse {
                path: native,
                format: "YAML".into(),
                message: e.to_string(),
            }),
            _ => Err(Error::UnsupportedFormat {
                extension: extension.to_string(),
            }),
        }
    }

    /// Load an [`ExclusionConfig`].
    pub fn load_exclusions(&self, path: &Path) -> Result<ExclusionConfig> {
        let config: ExclusionConfig = self.load(path)?;
        tracing::debug!(
            path = %path.display(),
            defaults = config.default_exclusions.len(),
            custom = config.custom_exclusions.len(),
            "Loaded exclusion config"
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_builtin_rules() {
        let config = ExclusionConfig::default();
        assert_eq!(config.default_exclusions, vec![".git", "node_modules", ".DS_Store"]);
        assert!(config.custom_exclusions.is_empty());
    }

    #[test]
    fn missing_default_list_falls_back_to_builtins() {
        let config: ExclusionConfig =
            serde_json::from_str(r#"{ "customExclusions": ["dist"] }"#).unwrap();
        assert_eq!(config.default_exclusions.len(), 3);
        assert_eq!(config.custom_exclusions, vec!["dist"]);
    }

    #[test]
    fn rules_are_union_in_order() {
        let config = ExclusionConfig {
            default_exclusions: vec![".git".into()],
            custom_exclusions: vec!["target".into()],
        }
        .with_custom(["*.tmp"]);
        let all: Vec<&str> = config.all_rules().collect();
        assert_eq!(all, vec![".git", "target", "*.tmp"]);
        assert_eq!(config.rules().unwrap().len(), 3);
    }
}
