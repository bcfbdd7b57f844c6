use super::topic::TopicKey;
use anyhow::{bail, Context};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

const BUILTIN_CATALOG: &str = include_str!("catalog.json");

static CATALOG: Lazy<Catalog> = Lazy::new(|| match Catalog::from_json(BUILTIN_CATALOG) {
    Ok(catalog) => catalog,
    Err(err) => {
        log::error!("Failed to load built-in content catalog: {:#}", err);
        Catalog::default()
    }
});

/// One card of the core concepts section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreConcept {
    pub image: String,
    pub title: String,
    pub description: String,
}

/// Content behind one tab of the examples section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleTopic {
    pub key: TopicKey,
    pub title: String,
    pub description: String,
    pub code: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub concepts: Vec<CoreConcept>,
    pub examples: Vec<ExampleTopic>,
}

impl Catalog {
    /// Parses a catalog and checks that every topic has exactly one example
    /// and that no entry has an empty title.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let catalog: Catalog =
            serde_json::from_str(json).context("catalog is not valid JSON")?;
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> anyhow::Result<()> {
        for (index, concept) in self.concepts.iter().enumerate() {
            if concept.title.trim().is_empty() {
                bail!("concept #{} has an empty title", index);
            }
        }

        let mut seen = HashSet::new();
        for example in &self.examples {
            if example.title.trim().is_empty() {
                bail!("example '{}' has an empty title", example.key);
            }
            if !seen.insert(example.key) {
                bail!("example '{}' is defined more than once", example.key);
            }
        }

        if let Some(missing) = TopicKey::all().into_iter().find(|key| !seen.contains(key)) {
            bail!("no example for topic '{}'", missing);
        }

        Ok(())
    }

    pub fn example(&self, key: TopicKey) -> Option<&ExampleTopic> {
        self.examples.iter().find(|example| example.key == key)
    }
}

/// Built-in catalog, parsed on first access.
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example_json(key: &str, title: &str) -> String {
        format!(
            r#"{{"key":"{}","title":"{}","description":"d","code":"c"}}"#,
            key, title
        )
    }

    fn catalog_json(examples: &[String]) -> String {
        format!(r#"{{"concepts":[],"examples":[{}]}}"#, examples.join(","))
    }

    fn full_examples() -> Vec<String> {
        TopicKey::all()
            .iter()
            .map(|key| example_json(key.as_str(), key.label()))
            .collect()
    }

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::from_json(BUILTIN_CATALOG).unwrap();
        assert_eq!(catalog.concepts.len(), 4);
        for key in TopicKey::all() {
            assert!(catalog.example(key).is_some(), "missing {}", key);
        }
    }

    #[test]
    fn test_catalog_accessor_returns_builtin() {
        let example = catalog().example(TopicKey::Props).unwrap();
        assert_eq!(example.title, "Props");
    }

    #[test]
    fn test_valid_minimal_catalog() {
        let catalog = Catalog::from_json(&catalog_json(&full_examples())).unwrap();
        assert_eq!(catalog.examples.len(), 4);
        assert!(catalog.concepts.is_empty());
    }

    #[test]
    fn test_duplicate_topic_rejected() {
        let mut examples = full_examples();
        examples.push(example_json("props", "Props again"));
        let err = Catalog::from_json(&catalog_json(&examples)).unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn test_missing_topic_rejected() {
        let examples = full_examples()[..3].to_vec();
        let err = Catalog::from_json(&catalog_json(&examples)).unwrap_err();
        assert!(err.to_string().contains("signals"));
    }

    #[test]
    fn test_empty_title_rejected() {
        let mut examples = full_examples();
        examples[0] = example_json("components", "  ");
        assert!(Catalog::from_json(&catalog_json(&examples)).is_err());
    }

    #[test]
    fn test_invalid_json_has_context() {
        let err = Catalog::from_json("{").unwrap_err();
        assert_eq!(err.to_string(), "catalog is not valid JSON");
    }
}
