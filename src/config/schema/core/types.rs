use super::super::{NamingConfig, OutputConfig};
use crate::error::ConfigError;
use directories::UserDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to config.toml - computed from home or `--config`, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(default)]
    pub naming: NamingConfig,

    #[serde(default)]
    pub output: OutputConfig,

    /// Locale for CLI messages (not for name labels; see `naming.label_locale`).
    #[serde(default = "default_locale")]
    pub locale: String,
}

fn default_locale() -> String {
    "en".into()
}

pub(super) fn default_config_dir() -> PathBuf {
    let home = UserDirs::new().map_or_else(|| PathBuf::from("."), |u| u.home_dir().to_path_buf());
    home.join(".specname")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_path: default_config_dir().join("config.toml"),
            naming: NamingConfig::default(),
            output: OutputConfig::default(),
            locale: default_locale(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.naming.separator.is_empty() {
            return Err(ConfigError::Validation(
                "naming.separator must not be empty".into(),
            ));
        }
        if self.naming.label_locale.trim().is_empty() {
            return Err(ConfigError::Validation(
                "naming.label_locale must not be empty".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert!(config.config_path.ends_with(".specname/config.toml"));
    }

    #[test]
    fn empty_separator_is_rejected() {
        let mut config = Config::default();
        config.naming.separator.clear();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("separator"));
    }

    #[test]
    fn round_trips_through_toml() {
        let config = Config::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed.naming, config.naming);
        assert_eq!(parsed.output.format, config.output.format);
    }
}
