//! TOML configuration loading

use super::types::{ConfigError, PanelConfig};

impl PanelConfig {
    /// Parse and validate a TOML document
    ///
    /// Missing keys fall back to their defaults.
    pub fn from_toml(input: &str) -> Result<Self, ConfigError> {
        let config: PanelConfig = toml::from_str(input).map_err(|e| {
            log::warn!("config parse failed: {}", e.message());
            ConfigError::Toml
        })?;
        config.validate()?;
        log::info!(
            "loaded config for {} at {} degrees",
            config.board.name(),
            config.rotation.degrees()
        );
        Ok(config)
    }
}
