//! Donation listing draft.
//!
//! Pre-fills the listing form from a prediction and checks the form before
//! it is handed to the listing backend.

use crate::classify::Prediction;
use crate::describe::{describe_estimated, DescriptionCatalog};
use crate::error::DraftError;
use serde::{Deserialize, Serialize};

/// Shortest description accepted on submit
pub const MIN_DESCRIPTION_CHARS: usize = 30;

/// Item condition as chosen by the donor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Condition {
    New,
    Good,
    #[default]
    Fair,
    #[serde(rename = "For parts")]
    ForParts,
}

/// How old the item is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemAge {
    #[serde(rename = "<6 months")]
    UnderSixMonths,
    #[serde(rename = "1 year")]
    OneYear,
    #[serde(rename = "2 years")]
    TwoYears,
    #[serde(rename = "3+ years")]
    ThreePlusYears,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    /// Six-digit PIN code, optional
    pub zip: String,
}

/// Editable listing form state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonationDraft {
    pub title: String,
    pub description: String,
    pub category: String,
    pub condition: Condition,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<ItemAge>,
    pub location: Location,
    /// Auto-generated descriptions the donor can pick from
    #[serde(default)]
    pub suggestions: Vec<String>,
    /// Classifier output attached to the listing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai: Option<Prediction>,
}

impl DonationDraft {
    /// Pre-fill the form; `None` when the image was never classified
    pub fn from_prediction(prediction: Option<&Prediction>, descriptions: &DescriptionCatalog) -> Self {
        let (title, category, suggestions) = match prediction {
            Some(p) => (
                format!("Donating: {}", p.label),
                p.category.clone(),
                describe_estimated(descriptions, &p.label),
            ),
            None => (
                "Donating: Item".to_string(),
                String::new(),
                descriptions.describe_unclassified(),
            ),
        };

        Self {
            title,
            description: suggestions.first().cloned().unwrap_or_default(),
            category,
            condition: Condition::default(),
            age: None,
            location: Location::default(),
            suggestions,
            ai: prediction.cloned(),
        }
    }

    /// Replace the description with suggestion `index` (0-based)
    pub fn use_suggestion(&mut self, index: usize) -> Result<(), DraftError> {
        let suggestion = self
            .suggestions
            .get(index)
            .ok_or(DraftError::NoSuchSuggestion {
                index,
                available: self.suggestions.len(),
            })?;
        self.description = suggestion.clone();
        Ok(())
    }

    /// Submit-time checks, first failure wins
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.title.trim().is_empty() {
            return Err(DraftError::MissingTitle);
        }

        // UTF-16 units, as the listing frontend counts them
        let description_len = self.description.trim().encode_utf16().count();
        if description_len < MIN_DESCRIPTION_CHARS {
            return Err(DraftError::DescriptionTooShort {
                min: MIN_DESCRIPTION_CHARS,
                actual: description_len,
            });
        }

        if self.category.trim().is_empty() {
            return Err(DraftError::MissingCategory);
        }

        // Whitespace-only still counts as an entered PIN
        if !self.location.zip.is_empty() && !is_pin_code(self.location.zip.trim()) {
            return Err(DraftError::InvalidZip);
        }

        Ok(())
    }
}

fn is_pin_code(zip: &str) -> bool {
    zip.len() == 6 && zip.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pin_code() {
        assert!(is_pin_code("560001"));
        assert!(!is_pin_code("56001"));
        assert!(!is_pin_code("56000a"));
        assert!(!is_pin_code("5600011"));
    }

    #[test]
    fn test_condition_defaults_to_fair() {
        assert_eq!(Condition::default(), Condition::Fair);
    }

    #[test]
    fn test_serde_names_match_form_options() {
        assert_eq!(serde_json::to_string(&Condition::ForParts).unwrap(), "\"For parts\"");
        assert_eq!(serde_json::to_string(&ItemAge::UnderSixMonths).unwrap(), "\"<6 months\"");
    }
}
