//! Golden tests for classification and the donation draft.
//!
//! Tests verify:
//! - Scores decode into the right label and metadata
//! - The draft is pre-filled from the prediction
//! - Submit validation rejects in form order

use ecoshare_common::classify::classify;
use ecoshare_common::describe::DescriptionCatalog;
use ecoshare_common::donation::{Condition, DonationDraft, MIN_DESCRIPTION_CHARS};
use ecoshare_common::error::DraftError;
use ecoshare_common::labels::CLASSIFIER_LABELS;

fn scores_for(index: usize) -> Vec<f32> {
    let mut scores = vec![0.02; CLASSIFIER_LABELS.len()];
    scores[index] = 0.78;
    scores
}

fn descriptions() -> DescriptionCatalog {
    DescriptionCatalog::builtin().expect("builtin descriptions")
}

// =============================================================================
// Pre-fill
// =============================================================================

#[test]
fn golden_draft_from_clothes() {
    let prediction = classify(&scores_for(4)).unwrap();
    let draft = DonationDraft::from_prediction(Some(&prediction), &descriptions());

    assert_eq!(draft.title, "Donating: Clothes");
    assert_eq!(draft.category, "Clothing");
    assert_eq!(draft.condition, Condition::Fair);
    assert_eq!(draft.suggestions.len(), 3);
    assert_eq!(draft.description, draft.suggestions[0]);
    assert!(draft.description.contains("Condition: Good."));
    assert_eq!(draft.ai.as_ref().map(|p| p.label.as_str()), Some("Clothes"));
    assert!(draft.validate().is_ok());
}

#[test]
fn golden_draft_without_prediction() {
    let draft = DonationDraft::from_prediction(None, &descriptions());

    assert_eq!(draft.title, "Donating: Item");
    assert!(draft.category.is_empty());
    assert!(draft.description.contains("Condition: Not specified"));
    assert!(draft.ai.is_none());
    // Category is still required before submit
    assert_eq!(draft.validate(), Err(DraftError::MissingCategory));
}

#[test]
fn golden_every_suggestion_is_long_enough() {
    let descriptions = descriptions();
    for index in 0..CLASSIFIER_LABELS.len() {
        let prediction = classify(&scores_for(index)).unwrap();
        let draft = DonationDraft::from_prediction(Some(&prediction), &descriptions);
        for suggestion in &draft.suggestions {
            assert!(suggestion.chars().count() >= MIN_DESCRIPTION_CHARS);
        }
    }
}

#[test]
fn golden_use_suggestion() {
    let prediction = classify(&scores_for(6)).unwrap();
    let mut draft = DonationDraft::from_prediction(Some(&prediction), &descriptions());

    draft.use_suggestion(2).unwrap();
    assert_eq!(draft.description, draft.suggestions[2]);
    assert_eq!(
        draft.use_suggestion(3),
        Err(DraftError::NoSuchSuggestion { index: 3, available: 3 })
    );
}

// =============================================================================
// Validation order
// =============================================================================

#[test]
fn golden_validation_first_failure_wins() {
    let prediction = classify(&scores_for(8)).unwrap();
    let mut draft = DonationDraft::from_prediction(Some(&prediction), &descriptions());

    draft.title = "   ".to_string();
    draft.description = "short".to_string();
    draft.location.zip = "12".to_string();
    assert_eq!(draft.validate(), Err(DraftError::MissingTitle));

    draft.title = "Plastic boxes".to_string();
    assert_eq!(
        draft.validate(),
        Err(DraftError::DescriptionTooShort { min: 30, actual: 5 })
    );

    draft.description = "Three stackable food-safe boxes with lids.".to_string();
    assert_eq!(draft.validate(), Err(DraftError::InvalidZip));

    draft.location.zip = "   ".to_string();
    assert_eq!(draft.validate(), Err(DraftError::InvalidZip));

    draft.location.zip = " 400001 ".to_string();
    assert!(draft.validate().is_ok());

    draft.location.zip.clear();
    assert!(draft.validate().is_ok());
}

#[test]
fn golden_description_length_counts_utf16_units() {
    let prediction = classify(&scores_for(0)).unwrap();
    let mut draft = DonationDraft::from_prediction(Some(&prediction), &descriptions());
    // Each emoji is one char but two UTF-16 units
    draft.description = "\u{1F45F}".repeat(15);
    assert!(draft.validate().is_ok());

    draft.description = "\u{1F45F}".repeat(14);
    assert_eq!(
        draft.validate(),
        Err(DraftError::DescriptionTooShort { min: 30, actual: 28 })
    );
}

#[test]
fn golden_description_length_ignores_padding() {
    let prediction = classify(&scores_for(0)).unwrap();
    let mut draft = DonationDraft::from_prediction(Some(&prediction), &descriptions());
    draft.description = format!("   {}   ", "x".repeat(29));
    assert_eq!(
        draft.validate(),
        Err(DraftError::DescriptionTooShort { min: 30, actual: 29 })
    );
}
