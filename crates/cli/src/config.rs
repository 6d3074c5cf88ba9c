//! Engine configuration

use anyhow::Result;
use serde::Deserialize;
use std::path::PathBuf;

/// Engine configuration, loaded from the environment with CLI overrides
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Directory holding the classifier artifacts
    #[serde(default = "default_model_dir")]
    pub model_dir: PathBuf,

    /// Abort analysis runs when an artifact fails to load
    #[serde(default)]
    pub strict: bool,
}

fn default_model_dir() -> PathBuf {
    PathBuf::from("models")
}

impl EngineConfig {
    /// Load configuration from the environment (prefix RISK_), falling back
    /// to defaults. An explicit CLI value wins over both.
    pub fn load(model_dir_override: Option<PathBuf>) -> Result<Self> {
        let config = config::Config::builder()
            .add_source(config::Environment::with_prefix("RISK"))
            .build()?;

        let mut engine = config.try_deserialize().unwrap_or_else(|_| EngineConfig {
            model_dir: default_model_dir(),
            strict: false,
        });

        if let Some(model_dir) = model_dir_override {
            engine.model_dir = model_dir;
        }

        Ok(engine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override_wins() {
        let config = EngineConfig::load(Some(PathBuf::from("/opt/classifiers"))).unwrap();
        assert_eq!(config.model_dir, PathBuf::from("/opt/classifiers"));
    }

    #[test]
    fn test_defaults_without_overrides() {
        let config = EngineConfig::load(None).unwrap();
        assert!(!config.model_dir.as_os_str().is_empty());
    }
}
