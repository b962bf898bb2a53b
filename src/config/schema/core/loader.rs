use super::Config;
use super::types::default_config_dir;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

impl Config {
    /// Loads `~/.specname/config.toml`, writing the defaults on first run.
    pub fn load_or_init() -> Result<Self> {
        let specname_dir = default_config_dir();
        let config_path = specname_dir.join("config.toml");

        if !specname_dir.exists() {
            fs::create_dir_all(&specname_dir).context("Failed to create .specname directory")?;
        }

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self {
                config_path,
                ..Self::default()
            };
            config.save()?;
            debug!(path = %config.config_path.display(), "wrote default config");
            Ok(config)
        }
    }

    /// Loads an explicit config file; `~` is expanded.
    pub fn load_from(path: &Path) -> Result<Self> {
        let expanded = shellexpand::tilde(&path.to_string_lossy()).into_owned();
        let config_path = PathBuf::from(expanded);
        let contents = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file {}", config_path.display()))?;
        let mut config: Config =
            toml::from_str(&contents).context("Failed to parse config file")?;
        config.config_path = config_path;
        config.normalise_label_locale();
        config.validate()?;
        Ok(config)
    }

    /// Explicit path when given, else the home config; env overrides applied.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        let mut config = match explicit {
            Some(path) => Self::load_from(path)?,
            None => Self::load_or_init()?,
        };
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let toml_str = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&self.config_path, toml_str).context("Failed to write config file")?;
        Ok(())
    }
}
