//! ArmorCatalog - Registry of armor templates

use super::template::ArmorTemplate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Armor template registry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArmorCatalog {
    /// Mapping from template ID to definition
    templates: HashMap<String, ArmorTemplate>,
}

impl ArmorCatalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        ArmorCatalog {
            templates: HashMap::new(),
        }
    }

    /// Register a template, replacing any with the same ID
    pub fn register(&mut self, template: ArmorTemplate) {
        self.templates.insert(template.id.clone(), template);
    }

    /// Get a template by ID
    pub fn get(&self, id: &str) -> Option<&ArmorTemplate> {
        self.templates.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.templates.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ArmorTemplate> {
        self.templates.values()
    }
}

impl FromIterator<ArmorTemplate> for ArmorCatalog {
    fn from_iter<I: IntoIterator<Item = ArmorTemplate>>(iter: I) -> Self {
        let mut catalog = ArmorCatalog::new();
        for template in iter {
            catalog.register(template);
        }
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::armor::template::ArmorClass;
    use crate::body::BodyPart;

    #[test]
    fn test_register_and_get() {
        let mut catalog = ArmorCatalog::new();
        assert!(catalog.is_empty());

        catalog.register(ArmorTemplate::new(
            "vest",
            "Kevlar Vest",
            ArmorClass::Soft,
            10,
            &[BodyPart::Torso],
        ));
        assert_eq!(catalog.len(), 1);
        assert!(catalog.contains("vest"));
        assert_eq!(catalog.get("vest").map(|t| t.sp_max), Some(10));
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn test_register_replaces() {
        let catalog: ArmorCatalog = [
            ArmorTemplate::new("vest", "Old Vest", ArmorClass::Soft, 10, &[BodyPart::Torso]),
            ArmorTemplate::new("vest", "New Vest", ArmorClass::Soft, 14, &[BodyPart::Torso]),
        ]
        .into_iter()
        .collect();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("vest").map(|t| t.name.as_str()), Some("New Vest"));
    }
}
