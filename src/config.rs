use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The stencil configuration structure
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct StencilConfig {
    /// Default provider schema catalog used when --schema is not given
    #[serde(default)]
    pub schema_path: Option<String>,

    /// Include optional attributes by default
    #[serde(default)]
    pub include_optional: bool,
}

impl StencilConfig {
    /// Path to ~/.config/stencil/config.toml
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not determine home directory")?;
        Ok(home.join(".config").join("stencil").join("config.toml"))
    }

    /// Load the config, falling back to defaults when the file doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Could not read config file: {}", config_path.display()))?;

        toml::from_str(&content).context("Invalid TOML format in stencil config")
    }

    /// Save the config to its standard location
    pub fn save(&self) -> Result<PathBuf> {
        let config_path = Self::path()?;
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(&config_path, content)?;

        Ok(config_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_example_config() {
        let toml = r#"
schema_path = "~/schemas/aws.json"
include_optional = true
"#;
        let config: StencilConfig = toml::from_str(toml).expect("Failed to parse config");
        assert_eq!(config.schema_path.as_deref(), Some("~/schemas/aws.json"));
        assert!(config.include_optional);
    }

    #[test]
    fn test_defaults() {
        let config: StencilConfig = toml::from_str("").unwrap();
        assert!(config.schema_path.is_none());
        assert!(!config.include_optional);
    }

    #[test]
    fn test_round_trip() {
        let config = StencilConfig {
            schema_path: Some("/tmp/schemas.json".to_string()),
            include_optional: true,
        };
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: StencilConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.schema_path, config.schema_path);
        assert_eq!(parsed.include_optional, config.include_optional);
    }
}
