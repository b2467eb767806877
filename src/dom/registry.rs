use crate::errors::FrameError;
use lazy_static::lazy_static;
use parking_lot::RwLock;
use std::collections::HashMap;

lazy_static! {
    static ref GLOBAL_REGISTRY: CustomElementRegistry = CustomElementRegistry::new();
}

/// Definition of a custom element tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementDefinition {
    pub name: String,
    pub observed_attributes: Vec<String>,
}

impl ElementDefinition {
    pub fn new(name: &str, observed_attributes: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            observed_attributes: observed_attributes.iter().map(|a| a.to_string()).collect(),
        }
    }
}

/// Registry of custom element tags. A tag name can be defined only once.
#[derive(Debug, Default)]
pub struct CustomElementRegistry {
    definitions: RwLock<HashMap<String, ElementDefinition>>,
}

impl CustomElementRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry.
    pub fn global() -> &'static CustomElementRegistry {
        &GLOBAL_REGISTRY
    }

    pub fn define(&self, definition: ElementDefinition) -> Result<(), FrameError> {
        if !is_valid_custom_element_name(&definition.name) {
            return Err(FrameError::InvalidElementName(definition.name));
        }

        let mut definitions = self.definitions.write();
        if definitions.contains_key(&definition.name) {
            return Err(FrameError::AlreadyDefined(definition.name));
        }

        log::debug!("Defining custom element <{}>", definition.name);
        definitions.insert(definition.name.clone(), definition);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<ElementDefinition> {
        self.definitions.read().get(name).cloned()
    }

    pub fn is_defined(&self, name: &str) -> bool {
        self.definitions.read().contains_key(name)
    }

    /// Defined tag names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<_> = self.definitions.read().keys().cloned().collect();
        names.sort();
        names
    }
}

// Simplified HTML rule: lowercase ASCII letter first, at least one hyphen, no
// uppercase, and only characters that may appear in a tag name.
fn is_valid_custom_element_name(name: &str) -> bool {
    let Some(first) = name.chars().next() else {
        return false;
    };

    first.is_ascii_lowercase()
        && name.contains('-')
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '.' | '_') || !c.is_ascii())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn define_and_lookup() {
        let registry = CustomElementRegistry::new();
        assert!(!registry.is_defined("turbo-frame"));

        registry
            .define(ElementDefinition::new("turbo-frame", &["src"]))
            .unwrap();

        assert!(registry.is_defined("turbo-frame"));
        let def = registry.get("turbo-frame").unwrap();
        assert_eq!(def.observed_attributes, vec!["src".to_string()]);
        assert_eq!(registry.names(), vec!["turbo-frame".to_string()]);
    }

    #[test]
    fn duplicate_definition_is_rejected() {
        let registry = CustomElementRegistry::new();
        registry.define(ElementDefinition::new("turbo-frame", &["src"])).unwrap();

        let err = registry
            .define(ElementDefinition::new("turbo-frame", &[]))
            .unwrap_err();
        assert_eq!(err, FrameError::AlreadyDefined("turbo-frame".into()));

        // first definition survives
        assert_eq!(registry.get("turbo-frame").unwrap().observed_attributes.len(), 1);
    }

    #[test]
    fn invalid_names_are_rejected() {
        let registry = CustomElementRegistry::new();
        for name in ["", "frame", "Turbo-frame", "turbo-Frame", "1-frame", "-frame", "turbo frame"] {
            let err = registry.define(ElementDefinition::new(name, &[])).unwrap_err();
            assert_eq!(err, FrameError::InvalidElementName(name.to_string()), "name {name:?}");
        }
        assert!(registry.names().is_empty());
    }

    #[test]
    fn valid_names() {
        assert!(is_valid_custom_element_name("turbo-frame"));
        assert!(is_valid_custom_element_name("x-1.0_beta"));
        assert!(is_valid_custom_element_name("emoji-😀"));
    }
}
