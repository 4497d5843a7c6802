use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, StagehandError};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Fill the board with example tasks on startup.
    #[serde(default = "default_seed")]
    pub seed: bool,
    /// Each column is `viewport width / column_divisor` cells wide.
    #[serde(default = "default_column_divisor")]
    pub column_divisor: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

fn default_seed() -> bool {
    true
}

fn default_column_divisor() -> u16 {
    4
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            column_divisor: default_column_divisor(),
            log_file: None,
        }
    }
}

impl Config {
    /// `$XDG_CONFIG_HOME/stagehand/config.json` or the platform equivalent.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("stagehand").join("config.json"))
    }

    /// Load from an explicit path, or from the default location if it exists.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(p) => p.to_path_buf(),
            None => match Self::default_path() {
                Some(p) if p.exists() => p,
                _ => return Ok(Self::default()),
            },
        };
        let data = fs::read_to_string(&path).map_err(|e| {
            StagehandError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_json(&data)
    }

    pub fn from_json(data: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(data)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.column_divisor == 0 {
            return Err(StagehandError::Config(
                "column_divisor must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert!(config.seed);
        assert_eq!(config.column_divisor, 4);
        assert!(config.log_file.is_none());
    }

    #[test]
    fn config_roundtrip() {
        let config = Config {
            seed: false,
            column_divisor: 3,
            log_file: Some("/tmp/stagehand.log".into()),
        };
        let json = serde_json::to_string_pretty(&config).unwrap();
        assert_eq!(Config::from_json(&json).unwrap(), config);
    }

    #[test]
    fn empty_object_uses_defaults() {
        assert_eq!(Config::from_json("{}").unwrap(), Config::default());
    }

    #[test]
    fn zero_divisor_rejected() {
        let err = Config::from_json(r#"{"column_divisor": 0}"#).unwrap_err();
        assert!(matches!(err, StagehandError::Config(_)));
    }

    #[test]
    fn malformed_json_rejected() {
        let err = Config::from_json("{ seed: ").unwrap_err();
        assert!(matches!(err, StagehandError::Json(_)));
    }

    #[test]
    fn load_explicit_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"seed": false}"#).unwrap();
        let config = Config::load(Some(&path)).unwrap();
        assert!(!config.seed);
        assert_eq!(config.column_divisor, 4);
    }

    #[test]
    fn load_missing_explicit_file_fails() {
        let dir = TempDir::new().unwrap();
        let err = Config::load(Some(&dir.path().join("nope.json"))).unwrap_err();
        assert!(err.to_string().contains("cannot read"));
    }
}
