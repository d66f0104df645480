use anyhow::{Context, Result};
use clap::ValueEnum;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Which optional type a document is decoded into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Inline value plus presence flag
    #[default]
    Value,
    /// Heap handle with copy-on-read access
    Pointer,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub default_variant: Variant,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub output: OutputSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(default)]
    pub pretty: bool,
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_color() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_variant: Variant::default(),
            log_level: default_log_level(),
            output: OutputSettings::default(),
        }
    }
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            pretty: false,
            color: default_color(),
        }
    }
}

impl Config {
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "linux") {
            // Use XDG config directory on Linux
            dirs::config_dir()
                .context("Failed to get XDG config directory")?
                .join("optkit")
        } else {
            // Use home directory with dot prefix on Windows/Mac
            dirs::home_dir()
                .context("Failed to get home directory")?
                .join(".optkit")
        };

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config from the default location
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Load the config from `path`, falling back to defaults if it doesn't exist
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!("Loading config from: {:?}", path);

        if !path.exists() {
            info!("Config file doesn't exist, using default config");
            return Ok(Self::default());
        }

        let config_content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        let config: Config = toml::from_str(&config_content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        debug!(
            "Loaded config with default variant {:?}",
            config.default_variant
        );
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        debug!("Saving config to: {:?}", path);

        if let Some(config_dir) = path.parent() {
            if !config_dir.exists() {
                fs::create_dir_all(config_dir).with_context(|| {
                    format!("Failed to create config directory: {:?}", config_dir)
                })?;
                info!("Created config directory: {:?}", config_dir);
            }
        }

        fs::write(path, self.to_toml()?)
            .with_context(|| format!("Failed to write config file: {:?}", path))?;

        info!("Config saved successfully");
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config to TOML")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("optkit-test-{}-{}", std::process::id(), name))
            .join("config.toml")
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();

        assert_eq!(config.default_variant, Variant::Value);
        assert_eq!(config.log_level, "warn");
        assert!(!config.output.pretty);
        assert!(config.output.color);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
default_variant = "pointer"

[output]
pretty = true
"#,
        )
        .unwrap();

        assert_eq!(config.default_variant, Variant::Pointer);
        assert_eq!(config.log_level, "warn");
        assert!(config.output.pretty);
        assert!(config.output.color);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = temp_config_path("missing");
        let config = Config::load_from(&path).unwrap();

        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let path = temp_config_path("roundtrip");
        let mut config = Config::default();
        config.default_variant = Variant::Pointer;
        config.log_level = "debug".to_string();

        config.save_to(&path).unwrap();
        let loaded = Config::load_from(&path).unwrap();

        assert_eq!(loaded, config);
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_invalid_file_is_error() {
        let path = temp_config_path("invalid");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "default_variant = \"sideways\"").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse config file"));
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }
}
