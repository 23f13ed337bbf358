//! Classifier output decoding.
//!
//! The image model yields one score per label in `CLASSIFIER_LABELS`
//! order. We take the argmax and attach the label table's metadata.

use crate::error::{EcoshareError, Result};
use crate::labels;
use serde::{Deserialize, Serialize};

/// Top classification for one image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub label: String,
    /// Winning score, 0.0-1.0 for softmax output
    pub confidence: f32,
    /// Friendly listing category
    pub category: String,
    pub reusable: bool,
    pub recyclable: bool,
}

impl Prediction {
    /// Build a prediction for a label, filling in the table metadata
    pub fn for_label(label: impl Into<String>, confidence: f32) -> Self {
        let label = label.into();
        Self {
            category: labels::friendly_category(&label).to_string(),
            reusable: labels::is_reusable(&label),
            recyclable: labels::is_recyclable(&label),
            label,
            confidence,
        }
    }

    /// Confidence as a whole percentage for display
    pub fn confidence_percent(&self) -> u32 {
        (self.confidence * 100.0).round().max(0.0) as u32
    }
}

/// Index of the highest score; ties keep the earliest index
pub fn argmax(scores: &[f32]) -> Option<usize> {
    if scores.is_empty() {
        return None;
    }
    let mut top = 0;
    for (idx, &score) in scores.iter().enumerate().skip(1) {
        // NaN at `top` would never be beaten by `>`
        if score > scores[top] || (scores[top].is_nan() && !score.is_nan()) {
            top = idx;
        }
    }
    Some(top)
}

/// Decode a score vector into a prediction
pub fn classify(scores: &[f32]) -> Result<Prediction> {
    let top = argmax(scores).ok_or(EcoshareError::EmptyScores)?;
    Ok(Prediction::for_label(labels::label_at(top), scores[top]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argmax_ties_keep_first() {
        assert_eq!(argmax(&[0.2, 0.4, 0.4]), Some(1));
        assert_eq!(argmax(&[]), None);
    }

    #[test]
    fn test_argmax_skips_nan() {
        assert_eq!(argmax(&[f32::NAN, 0.1, 0.3]), Some(2));
        assert_eq!(argmax(&[0.5, f32::NAN, 0.3]), Some(0));
    }

    #[test]
    fn test_classify_shoes() {
        let mut scores = vec![0.01; 12];
        scores[9] = 0.9;
        let prediction = classify(&scores).unwrap();
        assert_eq!(prediction.label, "Shoes");
        assert_eq!(prediction.category, "Clothing");
        assert!(prediction.reusable);
        assert!(!prediction.recyclable);
        assert_eq!(prediction.confidence_percent(), 90);
    }

    #[test]
    fn test_classify_past_label_table() {
        let mut scores = vec![0.0; 14];
        scores[13] = 0.7;
        let prediction = classify(&scores).unwrap();
        assert_eq!(prediction.label, "label_13");
        assert_eq!(prediction.category, "Other");
        assert!(!prediction.reusable && !prediction.recyclable);
    }

    #[test]
    fn test_classify_empty() {
        assert!(matches!(classify(&[]), Err(EcoshareError::EmptyScores)));
    }
}
