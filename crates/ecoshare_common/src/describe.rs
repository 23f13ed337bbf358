//! Listing description suggestions.
//!
//! Given a classified label and its estimated condition, produce one to
//! three long-form paragraphs that pre-fill the donation form. No state:
//! the same arguments always give the same suggestions.

use crate::error::{EcoshareError, Result};
use crate::labels;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

const BUILTIN_DESCRIPTIONS: &str = include_str!("../data/descriptions.toml");

/// Most suggestions a label may carry
pub const MAX_SUGGESTIONS: usize = 3;

/// Label substituted when the classifier produced an empty label
const PLACEHOLDER_LABEL: &str = "Item";

/// Condition guessed from the label alone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EstimatedCondition {
    Good,
    Fair,
}

impl EstimatedCondition {
    /// Reusable labels are assumed to be in good shape
    pub fn for_label(label: &str) -> Self {
        if labels::is_reusable(label) {
            Self::Good
        } else {
            Self::Fair
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Fair => "Fair",
        }
    }
}

impl fmt::Display for EstimatedCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EstimatedCondition {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "good" => Ok(Self::Good),
            "fair" => Ok(Self::Fair),
            other => Err(format!(
                "Invalid condition: '{}'. Valid values: good, fair",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct DescriptionEntry {
    labels: Vec<String>,
    suggestions: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct SuggestionSet {
    suggestions: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct DescriptionFile {
    #[serde(default)]
    entries: Vec<DescriptionEntry>,
    fallback: SuggestionSet,
    unclassified: SuggestionSet,
}

/// Suggestion templates keyed by label
///
/// Templates may contain `{label}` and `{condition}` placeholders.
#[derive(Debug, Clone)]
pub struct DescriptionCatalog {
    sets: Vec<Vec<String>>,
    by_label: HashMap<String, usize>,
    fallback: Vec<String>,
    unclassified: Vec<String>,
}

impl DescriptionCatalog {
    /// The suggestions shipped with the crate
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_DESCRIPTIONS)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Self::builtin(),
        }
    }

    /// Parse and validate a TOML description catalog
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let file: DescriptionFile = toml::from_str(contents)?;

        check_set("fallback", &file.fallback.suggestions)?;
        check_set("unclassified", &file.unclassified.suggestions)?;

        let mut sets = Vec::with_capacity(file.entries.len());
        let mut by_label = HashMap::new();
        for entry in file.entries {
            if entry.labels.is_empty() {
                return Err(EcoshareError::InvalidDescriptions(
                    "entry without labels".to_string(),
                ));
            }
            check_set(&entry.labels.join(", "), &entry.suggestions)?;

            let idx = sets.len();
            for label in entry.labels {
                if by_label.insert(label.clone(), idx).is_some() {
                    return Err(EcoshareError::InvalidDescriptions(format!(
                        "label '{}' listed twice",
                        label
                    )));
                }
            }
            sets.push(entry.suggestions);
        }

        debug!(labels = by_label.len(), "Loaded description catalog");

        Ok(Self {
            sets,
            by_label,
            fallback: file.fallback.suggestions,
            unclassified: file.unclassified.suggestions,
        })
    }

    /// Suggestions for a classified label, curated first choice first
    pub fn describe(&self, label: &str, condition: EstimatedCondition) -> Vec<String> {
        let label = if label.trim().is_empty() {
            PLACEHOLDER_LABEL
        } else {
            label
        };

        let templates = self
            .by_label
            .get(label)
            .map(|&idx| &self.sets[idx])
            .unwrap_or(&self.fallback);

        templates
            .iter()
            .map(|template| render(template, label, condition))
            .collect()
    }

    /// Suggestions when there is no classification at all
    pub fn describe_unclassified(&self) -> Vec<String> {
        self.unclassified.clone()
    }

    /// Whether a label has curated suggestions
    pub fn has_curated(&self, label: &str) -> bool {
        self.by_label.contains_key(label)
    }
}

/// `describe` with the condition estimated from the label
pub fn describe_estimated(catalog: &DescriptionCatalog, label: &str) -> Vec<String> {
    catalog.describe(label, EstimatedCondition::for_label(label))
}

fn check_set(name: &str, suggestions: &[String]) -> Result<()> {
    if suggestions.is_empty() || suggestions.len() > MAX_SUGGESTIONS {
        return Err(EcoshareError::InvalidDescriptions(format!(
            "{} has {} suggestions (expected 1-{})",
            name,
            suggestions.len(),
            MAX_SUGGESTIONS
        )));
    }
    Ok(())
}

/// `{label}` goes last so label text is never scanned for placeholders
fn render(template: &str, label: &str, condition: EstimatedCondition) -> String {
    template
        .replace("{condition}", condition.as_str())
        .replace("{label}", label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_loads() {
        let catalog = DescriptionCatalog::builtin().unwrap();
        for label in labels::CLASSIFIER_LABELS {
            assert!(catalog.has_curated(label), "{}", label);
        }
    }

    #[test]
    fn test_condition_substituted() {
        let catalog = DescriptionCatalog::builtin().unwrap();
        let good = catalog.describe("Shoes", EstimatedCondition::Good);
        assert_eq!(good.len(), 3);
        assert!(good[0].starts_with("Auto suggestion: Shoes. Condition: Good."));
        assert!(good[1].contains("in Good condition"));
        assert!(good.iter().all(|s| !s.contains('{')));
    }

    #[test]
    fn test_fallback_uses_label() {
        let catalog = DescriptionCatalog::builtin().unwrap();
        let out = catalog.describe("Guitar", EstimatedCondition::Fair);
        assert_eq!(out.len(), 3);
        assert!(out[0].starts_with("Auto suggestion: Guitar. Condition: Fair."));
        assert!(out[2].starts_with("Auto suggestion: Guitar."));
    }

    #[test]
    fn test_blank_label_becomes_item() {
        let catalog = DescriptionCatalog::builtin().unwrap();
        let out = catalog.describe("  ", EstimatedCondition::Fair);
        assert!(out[0].starts_with("Auto suggestion: Item. Condition: Fair."));
    }

    #[test]
    fn test_label_text_is_not_templated() {
        let catalog = DescriptionCatalog::builtin().unwrap();
        let out = catalog.describe("{condition}", EstimatedCondition::Fair);
        assert!(out[0].starts_with("Auto suggestion: {condition}. Condition: Fair."));

        let out = catalog.describe("{label} box", EstimatedCondition::Good);
        assert!(out[1].starts_with("Auto suggestion: {label} box."));
    }

    #[test]
    fn test_glass_labels_share_suggestions() {
        let catalog = DescriptionCatalog::builtin().unwrap();
        let brown = catalog.describe("Brown-glass", EstimatedCondition::Fair);
        let green = catalog.describe("Green-glass", EstimatedCondition::Fair);
        assert_eq!(brown, green);
    }

    #[test]
    fn test_estimated_condition() {
        assert_eq!(EstimatedCondition::for_label("Clothes"), EstimatedCondition::Good);
        assert_eq!(EstimatedCondition::for_label("Metal"), EstimatedCondition::Fair);
        assert_eq!(EstimatedCondition::for_label("Unknown"), EstimatedCondition::Fair);
    }

    #[test]
    fn test_too_many_suggestions_rejected() {
        let toml = r#"
[[entries]]
labels = ["Shoes"]
suggestions = ["a", "b", "c", "d"]

[fallback]
suggestions = ["x"]

[unclassified]
suggestions = ["u"]
"#;
        let err = DescriptionCatalog::from_toml_str(toml).unwrap_err();
        assert!(matches!(err, EcoshareError::InvalidDescriptions(_)));
    }

    #[test]
    fn test_duplicate_label_rejected() {
        let toml = r#"
[[entries]]
labels = ["Shoes"]
suggestions = ["a"]

[[entries]]
labels = ["Shoes"]
suggestions = ["b"]

[fallback]
suggestions = ["x"]

[unclassified]
suggestions = ["u"]
"#;
        assert!(DescriptionCatalog::from_toml_str(toml).is_err());
    }
}
