//! Advice catalog (reuse / recycle / donate tips per label).
//!
//! The catalog is static data: a TOML resource embedded at build time,
//! optionally replaced by an operator-supplied file. It is parsed and
//! validated once, then shared read-only by every cycling session.

use crate::error::{EcoshareError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

const BUILTIN_ADVICE: &str = include_str!("../data/advice.toml");

/// The three tip dimensions shown for every classified item
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdviceCategory {
    Reuse,
    Recycle,
    Donate,
}

impl AdviceCategory {
    /// All categories in panel order
    pub const ALL: [AdviceCategory; 3] = [Self::Reuse, Self::Recycle, Self::Donate];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reuse => "reuse",
            Self::Recycle => "recycle",
            Self::Donate => "donate",
        }
    }

    /// Panel heading
    pub fn title(&self) -> &'static str {
        match self {
            Self::Reuse => "Reuse",
            Self::Recycle => "Recycle",
            Self::Donate => "Donate",
        }
    }
}

impl fmt::Display for AdviceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AdviceCategory {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "reuse" => Ok(Self::Reuse),
            "recycle" => Ok(Self::Recycle),
            "donate" => Ok(Self::Donate),
            other => Err(format!(
                "Invalid advice category: '{}'. Valid values: reuse, recycle, donate",
                other
            )),
        }
    }
}

/// Ordered tips for each category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdviceLists {
    #[serde(default)]
    pub reuse: Vec<String>,
    #[serde(default)]
    pub recycle: Vec<String>,
    #[serde(default)]
    pub donate: Vec<String>,
}

impl AdviceLists {
    pub fn get(&self, category: AdviceCategory) -> &[String] {
        match category {
            AdviceCategory::Reuse => &self.reuse,
            AdviceCategory::Recycle => &self.recycle,
            AdviceCategory::Donate => &self.donate,
        }
    }
}

/// On-disk catalog layout, before validation
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    labels: BTreeMap<String, AdviceLists>,
    default: AdviceLists,
}

/// Label-keyed advice with a mandatory default fallback
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdviceCatalog {
    /// Curated tips per classifier label
    labels: BTreeMap<String, AdviceLists>,
    /// Generic tips served after (or instead of) label tips
    default: AdviceLists,
}

impl AdviceCatalog {
    /// Build a catalog from parts, enforcing the non-empty default invariant
    pub fn new(labels: BTreeMap<String, AdviceLists>, default: AdviceLists) -> Result<Self> {
        let catalog = Self { labels, default };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The catalog shipped with the crate
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_ADVICE)
    }

    /// Parse and validate a TOML catalog
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(contents)?;
        let catalog = Self::new(file.labels, file.default)?;
        debug!(labels = catalog.labels.len(), "Loaded advice catalog");
        Ok(catalog)
    }

    /// Load a catalog file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Builtin catalog, or the file at `path` when one is configured
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Self::builtin(),
        }
    }

    fn validate(&self) -> Result<()> {
        for category in AdviceCategory::ALL {
            if self.default.get(category).is_empty() {
                return Err(EcoshareError::EmptyDefault(category));
            }
        }
        Ok(())
    }

    /// Label-specific tips (empty for unknown labels)
    pub fn specific(&self, label: &str, category: AdviceCategory) -> &[String] {
        self.labels
            .get(label)
            .map(|lists| lists.get(category))
            .unwrap_or(&[])
    }

    pub fn default_list(&self, category: AdviceCategory) -> &[String] {
        self.default.get(category)
    }

    /// Whether a label has its own tips for a category
    pub fn has_specific(&self, label: &str, category: AdviceCategory) -> bool {
        !self.specific(label, category).is_empty()
    }

    /// Length of the ring a (label, category) cursor walks
    pub fn effective_len(&self, label: &str, category: AdviceCategory) -> usize {
        self.specific(label, category).len() + self.default_list(category).len()
    }

    /// Entry `index` of the effective list; `index` is taken modulo its length
    pub fn effective_entry(&self, label: &str, category: AdviceCategory, index: usize) -> &str {
        let specific = self.specific(label, category);
        let default = self.default_list(category);
        let index = index % (specific.len() + default.len());
        if index < specific.len() {
            &specific[index]
        } else {
            &default[index - specific.len()]
        }
    }

    /// Specific tips followed by default tips
    pub fn effective_list(&self, label: &str, category: AdviceCategory) -> Vec<&str> {
        self.specific(label, category)
            .iter()
            .chain(self.default_list(category))
            .map(String::as_str)
            .collect()
    }

    /// Labels with curated tips, sorted
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.labels.keys().map(String::as_str)
    }

    pub fn label_count(&self) -> usize {
        self.labels.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = AdviceCatalog::builtin().unwrap();
        assert_eq!(catalog.label_count(), 12);
        for category in AdviceCategory::ALL {
            assert!(!catalog.default_list(category).is_empty());
        }
    }

    #[test]
    fn test_builtin_covers_classifier_labels() {
        let catalog = AdviceCatalog::builtin().unwrap();
        for label in crate::labels::CLASSIFIER_LABELS {
            for category in AdviceCategory::ALL {
                assert!(catalog.has_specific(label, category), "{} {}", label, category);
            }
        }
    }

    #[test]
    fn test_empty_default_rejected() {
        let toml = r#"
[default]
reuse = ["a"]
recycle = []
donate = ["c"]
"#;
        let err = AdviceCatalog::from_toml_str(toml).unwrap_err();
        assert!(matches!(err, EcoshareError::EmptyDefault(AdviceCategory::Recycle)));
    }

    #[test]
    fn test_missing_default_rejected() {
        let toml = r#"
[labels.Shoes]
reuse = ["a"]
"#;
        let err = AdviceCatalog::from_toml_str(toml).unwrap_err();
        assert!(matches!(err, EcoshareError::CatalogParse(_)));
    }

    #[test]
    fn test_effective_list_order() {
        let toml = r#"
[labels.Shoes]
reuse = ["A", "B"]

[default]
reuse = ["X"]
recycle = ["R"]
donate = ["D"]
"#;
        let catalog = AdviceCatalog::from_toml_str(toml).unwrap();
        assert_eq!(catalog.effective_list("Shoes", AdviceCategory::Reuse), vec!["A", "B", "X"]);
        // Missing category list behaves like an unknown label
        assert_eq!(catalog.effective_list("Shoes", AdviceCategory::Donate), vec!["D"]);
        assert_eq!(catalog.effective_entry("Shoes", AdviceCategory::Reuse, 4), "B");
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("Reuse".parse::<AdviceCategory>(), Ok(AdviceCategory::Reuse));
        assert_eq!(" donate ".parse::<AdviceCategory>(), Ok(AdviceCategory::Donate));
        assert!("compost".parse::<AdviceCategory>().is_err());
    }
}
