//! Configuration loading from TOML files

mod constants;
mod templates;

pub use constants::RulesConfig;
pub use templates::{
    load_armor_templates, parse_armor_templates, ArmorConfig, MAX_TEMPLATE_EV, MAX_TEMPLATE_SP,
};

use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Configuration validation error: {0}")]
    ValidationError(String),
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: T = toml::from_str(&content)?;
    Ok(config)
}

/// Load a TOML string and deserialize it
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = toml::from_str(content)?;
    Ok(config)
}

/// Load rules constants from a TOML file
pub fn load_rules(path: &Path) -> Result<RulesConfig, ConfigError> {
    let rules: RulesConfig = load_toml(path)?;
    validate_rules(&rules)?;
    Ok(rules)
}

/// Load rules constants from a TOML string
pub fn parse_rules(content: &str) -> Result<RulesConfig, ConfigError> {
    let rules: RulesConfig = parse_toml(content)?;
    validate_rules(&rules)?;
    Ok(rules)
}

/// Largest accepted `wounds.boxes_per_level`
pub const MAX_BOXES_PER_LEVEL: u32 = 100;
/// Largest accepted `wounds.mortal_levels`
pub const MAX_MORTAL_LEVELS: u32 = 100;

fn validate_rules(rules: &RulesConfig) -> Result<(), ConfigError> {
    if rules.wounds.boxes_per_level == 0 || rules.wounds.boxes_per_level > MAX_BOXES_PER_LEVEL {
        return Err(ConfigError::ValidationError(format!(
            "wounds.boxes_per_level must be between 1 and {}",
            MAX_BOXES_PER_LEVEL
        )));
    }
    if rules.wounds.mortal_levels > MAX_MORTAL_LEVELS {
        return Err(ConfigError::ValidationError(format!(
            "wounds.mortal_levels must be at most {}",
            MAX_MORTAL_LEVELS
        )));
    }
    if rules.hit.soft_ablation_divisor == 0 || rules.hit.hard_ablation_divisor == 0 {
        return Err(ConfigError::ValidationError(
            "ablation divisors must be at least 1".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rules_validates() {
        assert!(parse_rules("[wounds]\nboxes_per_level = 0\n").is_err());
        assert!(parse_rules("[hit]\nhard_ablation_divisor = 0\n").is_err());
        assert!(parse_rules("[wounds]\nboxes_per_level = 3\n").is_ok());
    }

    #[test]
    fn test_parse_rules_rejects_oversized_track() {
        assert!(matches!(
            parse_rules("[wounds]\nmortal_levels = 4294967295\n"),
            Err(ConfigError::ValidationError(_))
        ));
        assert!(matches!(
            parse_rules("[wounds]\nboxes_per_level = 4294967295\n"),
            Err(ConfigError::ValidationError(_))
        ));
        assert!(parse_rules("[wounds]\nboxes_per_level = 100\nmortal_levels = 100\n").is_ok());
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_rules(Path::new("/definitely/not/here/rules.toml"));
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }
}
