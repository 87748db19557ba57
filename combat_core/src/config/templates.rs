//! Armor template catalog loading

use super::ConfigError;
use crate::armor::{ArmorCatalog, ArmorTemplate};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Container for armor template definitions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArmorConfig {
    #[serde(rename = "armor", default)]
    pub armor: Vec<ArmorTemplate>,
}

/// Load armor templates from a TOML file
pub fn load_armor_templates(path: &Path) -> Result<ArmorCatalog, ConfigError> {
    let config: ArmorConfig = super::load_toml(path)?;
    build_catalog(config)
}

/// Load armor templates from a TOML string
pub fn parse_armor_templates(content: &str) -> Result<ArmorCatalog, ConfigError> {
    let config: ArmorConfig = super::parse_toml(content)?;
    build_catalog(config)
}

fn build_catalog(config: ArmorConfig) -> Result<ArmorCatalog, ConfigError> {
    let mut seen = HashSet::new();
    for template in &config.armor {
        validate_template(template)?;
        if !seen.insert(template.id.clone()) {
            return Err(ConfigError::ValidationError(format!(
                "duplicate armor template id '{}'",
                template.id
            )));
        }
    }
    Ok(config.armor.into_iter().collect())
}

/// Largest accepted template `sp_max`
pub const MAX_TEMPLATE_SP: u32 = 100;
/// Largest accepted template `ev`
pub const MAX_TEMPLATE_EV: u32 = 20;

fn validate_template(template: &ArmorTemplate) -> Result<(), ConfigError> {
    if template.covers.is_empty() {
        return Err(ConfigError::ValidationError(format!(
            "armor template '{}' covers no body parts",
            template.id
        )));
    }
    if template.sp_max == 0 || template.sp_max > MAX_TEMPLATE_SP {
        return Err(ConfigError::ValidationError(format!(
            "armor template '{}' needs SP between 1 and {}",
            template.id, MAX_TEMPLATE_SP
        )));
    }
    if template.ev_cost() > MAX_TEMPLATE_EV {
        return Err(ConfigError::ValidationError(format!(
            "armor template '{}' has EV above {}",
            template.id, MAX_TEMPLATE_EV
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::armor::{ArmorClass, LayerKind};
    use crate::body::BodyPart;

    #[test]
    fn test_parse_templates() {
        let toml = r#"
[[armor]]
id = "kevlar_vest"
name = "Kevlar Vest"
class = "soft"
sp_max = 10
covers = ["torso"]
ev = 0

[[armor]]
id = "metalgear"
name = "MetalGear"
class = "hard"
sp_max = 25
covers = ["head", "face", "torso", "left_arm", "right_arm", "left_leg", "right_leg"]
ev = 2

[[armor]]
id = "skinweave"
name = "Skin Weave"
sp_max = 12
covers = ["head", "torso"]
layer = "skinweave"
"#;

        let catalog = parse_armor_templates(toml).unwrap();
        assert_eq!(catalog.len(), 3);

        let metalgear = catalog.get("metalgear").unwrap();
        assert_eq!(metalgear.class, ArmorClass::Hard);
        assert_eq!(metalgear.part_sp_max(BodyPart::Face), 12);
        assert_eq!(metalgear.ev_cost(), 2);

        let weave = catalog.get("skinweave").unwrap();
        assert_eq!(weave.class, ArmorClass::Soft);
        assert_eq!(weave.layer, Some(LayerKind::Skinweave));
        assert_eq!(weave.ev, None);
    }

    #[test]
    fn test_reject_empty_coverage() {
        let toml = r#"
[[armor]]
id = "nothing"
name = "Nothing"
sp_max = 10
covers = []
"#;
        assert!(matches!(
            parse_armor_templates(toml),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_reject_duplicate_ids() {
        let toml = r#"
[[armor]]
id = "vest"
name = "Vest"
sp_max = 10
covers = ["torso"]

[[armor]]
id = "vest"
name = "Other Vest"
sp_max = 12
covers = ["torso"]
"#;
        let err = parse_armor_templates(toml).unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn test_reject_unknown_part() {
        let toml = r#"
[[armor]]
id = "tail_guard"
name = "Tail Guard"
sp_max = 10
covers = ["tail"]
"#;
        assert!(matches!(
            parse_armor_templates(toml),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_reject_out_of_range_values() {
        let huge_sp = r#"
[[armor]]
id = "bunker"
name = "Bunker"
sp_max = 4294967295
covers = ["torso"]
"#;
        assert!(matches!(
            parse_armor_templates(huge_sp),
            Err(ConfigError::ValidationError(_))
        ));

        let huge_ev = r#"
[[armor]]
id = "anvil"
name = "Anvil Suit"
sp_max = 20
covers = ["torso"]
ev = 4294967295
"#;
        let err = parse_armor_templates(huge_ev).unwrap_err();
        assert!(err.to_string().contains("EV above"));
    }

    #[test]
    fn test_empty_file() {
        assert!(parse_armor_templates("").unwrap().is_empty());
    }
}
