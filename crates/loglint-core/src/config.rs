//! Configuration types for loglint.
//!
//! The configuration surface is a flat JSON document: four `enable_*` rule
//! toggles (all on by default) plus optional exclude patterns. Loading is
//! deliberately forgiving at the entry point: a missing or unreadable file
//! falls back to defaults instead of failing the run. The resolved value is
//! passed explicitly through the analyzer, there is no global cache.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Rule on/off toggles, one per validator.
///
/// Field names match the JSON configuration document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleToggles {
    /// Check that log messages start with a lowercase letter.
    #[serde(default = "default_true")]
    pub enable_lowercase_start: bool,

    /// Check that log messages contain only English letters.
    #[serde(default = "default_true")]
    pub enable_english_only: bool,

    /// Check that log messages contain no special characters or emoji.
    #[serde(default = "default_true")]
    pub enable_no_special_chars: bool,

    /// Check that log messages contain no sensitive data.
    #[serde(default = "default_true")]
    pub enable_sensitive_patterns: bool,
}

impl Default for RuleToggles {
    fn default() -> Self {
        Self {
            enable_lowercase_start: true,
            enable_english_only: true,
            enable_no_special_chars: true,
            enable_sensitive_patterns: true,
        }
    }
}

/// Top-level configuration for loglint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Rule toggles, flattened into the top-level JSON object.
    #[serde(flatten)]
    pub rules: RuleToggles,

    /// Glob patterns to exclude from analysis.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Config {
    /// Creates a new default configuration with every rule enabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Resolves configuration from an optional file path, never failing.
    ///
    /// A missing path or any load error yields the default all-enabled
    /// configuration; the failure is logged, not propagated.
    #[must_use]
    pub fn resolve(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            tracing::debug!("No config file, using defaults");
            return Self::default();
        };

        match Self::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Falling back to default config: {e}");
                Self::default()
            }
        }
    }

    /// Checks if a rule is enabled by name.
    ///
    /// Names not owned by a toggle are enabled, matching the analyzer's
    /// default for unknown rules.
    #[must_use]
    pub fn is_rule_enabled(&self, rule_name: &str) -> bool {
        match rule_name {
            "lowercase-start" => self.rules.enable_lowercase_start,
            "no-special-chars" => self.rules.enable_no_special_chars,
            "no-sensitive-data" => self.rules.enable_sensitive_patterns,
            "english-only" => self.rules.enable_english_only,
            _ => true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_enables_every_rule() {
        let config = Config::default();
        assert!(config.rules.enable_lowercase_start);
        assert!(config.rules.enable_english_only);
        assert!(config.rules.enable_no_special_chars);
        assert!(config.rules.enable_sensitive_patterns);
        assert!(config.exclude.is_empty());
    }

    #[test]
    fn parse_overrides_single_toggle() {
        let config = Config::parse(r#"{"enable_english_only": false}"#).expect("valid json");
        assert!(!config.rules.enable_english_only);
        // Unmentioned toggles keep their defaults.
        assert!(config.rules.enable_lowercase_start);
        assert!(config.rules.enable_sensitive_patterns);
    }

    #[test]
    fn parse_reads_exclude_patterns() {
        let config = Config::parse(
            r#"{"enable_no_special_chars": false, "exclude": ["**/generated/**"]}"#,
        )
        .expect("valid json");
        assert!(!config.rules.enable_no_special_chars);
        assert_eq!(config.exclude, vec!["**/generated/**".to_string()]);
    }

    #[test]
    fn parse_rejects_malformed_json() {
        assert!(Config::parse("{not json").is_err());
    }

    #[test]
    fn resolve_without_path_uses_defaults() {
        let config = Config::resolve(None);
        assert!(config.rules.enable_lowercase_start);
    }

    #[test]
    fn resolve_with_missing_file_falls_back_to_defaults() {
        let config = Config::resolve(Some(Path::new("/nonexistent/loglint.json")));
        assert!(config.rules.enable_english_only);
    }

    #[test]
    fn resolve_with_malformed_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("loglint.json");
        std::fs::write(&path, "{broken").expect("write config");

        let config = Config::resolve(Some(&path));
        assert!(config.rules.enable_sensitive_patterns);
    }

    #[test]
    fn rule_enabled_lookup_by_name() {
        let mut config = Config::default();
        config.rules.enable_sensitive_patterns = false;
        assert!(!config.is_rule_enabled("no-sensitive-data"));
        assert!(config.is_rule_enabled("lowercase-start"));
        assert!(config.is_rule_enabled("some-future-rule"));
    }
}
