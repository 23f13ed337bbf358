//! Error types for EcoShare.

use thiserror::Error;

use crate::catalog::AdviceCategory;

#[derive(Error, Debug)]
pub enum EcoshareError {
    #[error("Default {0} advice list is empty")]
    EmptyDefault(AdviceCategory),

    #[error("Classifier returned no scores")]
    EmptyScores,

    #[error("Catalog parse error: {0}")]
    CatalogParse(#[from] toml::de::Error),

    #[error("Invalid description catalog: {0}")]
    InvalidDescriptions(String),

    #[error("Draft error: {0}")]
    Draft(#[from] DraftError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Donation draft validation failures, in the order they are checked
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    #[error("Please add a title for your item.")]
    MissingTitle,

    #[error("Please enter at least {min} characters describing the item and its condition (got {actual}).")]
    DescriptionTooShort { min: usize, actual: usize },

    #[error("Please specify a category (e.g. Clothes, Electronics).")]
    MissingCategory,

    #[error("Please enter a valid 6-digit PIN code.")]
    InvalidZip,

    #[error("No description suggestion #{index} (have {available})")]
    NoSuchSuggestion { index: usize, available: usize },
}

pub type Result<T> = std::result::Result<T, EcoshareError>;
