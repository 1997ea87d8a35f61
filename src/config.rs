//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Command that receives the mailto: link instead of the system handler
    pub launcher: Option<String>,
    /// Also copy the link to the clipboard after a successful submit
    pub copy_link_on_submit: Option<bool>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "tawba", "tawba-support")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a file, defaulting when it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: TuiConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn copy_link_on_submit(&self) -> bool {
        self.copy_link_on_submit.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("tawba-support-test-{}-{name}", std::process::id()))
            .join("config.json")
    }

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.launcher.is_none());
        assert!(config.copy_link_on_submit.is_none());
        assert!(!config.copy_link_on_submit());
    }

    #[test]
    fn test_serialization() {
        let config = TuiConfig {
            launcher: Some("thunderbird".to_string()),
            copy_link_on_submit: Some(true),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: TuiConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.launcher, Some("thunderbird".to_string()));
        assert_eq!(parsed.copy_link_on_submit, Some(true));
        assert!(parsed.copy_link_on_submit());
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: TuiConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.launcher.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"launcher": "mutt", "destination": "someone@else.org"}"#;
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.launcher, Some("mutt".to_string()));
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let path = temp_config_path("missing");
        let config = TuiConfig::load_from(&path).unwrap();
        assert!(config.launcher.is_none());
    }

    #[test]
    fn test_load_from_written_file() {
        let path = temp_config_path("roundtrip");
        let config = TuiConfig {
            copy_link_on_submit: Some(true),
            ..Default::default()
        };
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

        let loaded = TuiConfig::load_from(&path).unwrap();
        assert_eq!(loaded.copy_link_on_submit, Some(true));
        assert!(loaded.launcher.is_none());

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_load_rejects_malformed_file() {
        let path = temp_config_path("malformed");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ not json").unwrap();

        assert!(TuiConfig::load_from(&path).is_err());

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }
}
