//! Classifier label table.
//!
//! The closed set of labels the waste classifier emits, in model output
//! order, plus the display category and reuse/recycle flags for each.

/// Labels in the order of the classifier's score vector
pub const CLASSIFIER_LABELS: &[&str] = &[
    "Battery",
    "Biological",
    "Brown-glass",
    "Cardboard",
    "Clothes",
    "Green-glass",
    "Metal",
    "Paper",
    "Plastic",
    "Shoes",
    "Trash",
    "White-glass",
];

/// Labels whose items can usually be handed on as they are
pub const REUSABLE_LABELS: &[&str] = &["Clothes", "Shoes", "Cardboard", "Paper"];

/// Labels whose material is accepted by common recycling streams
pub const RECYCLABLE_LABELS: &[&str] = &[
    "Brown-glass",
    "Green-glass",
    "White-glass",
    "Paper",
    "Cardboard",
    "Plastic",
    "Metal",
    "Battery",
];

/// Category shown for labels outside the table
pub const OTHER_CATEGORY: &str = "Other";

/// Label at a score-vector index, or `label_{index}` past the end of the table
pub fn label_at(index: usize) -> String {
    CLASSIFIER_LABELS
        .get(index)
        .map(|label| label.to_string())
        .unwrap_or_else(|| format!("label_{}", index))
}

/// Friendly listing category for a label
pub fn friendly_category(label: &str) -> &'static str {
    match label {
        "Battery" | "Biological" => "Hazardous",
        "Brown-glass" | "Green-glass" | "White-glass" => "Glass",
        "Cardboard" | "Paper" => "Paper & Cardboard",
        "Clothes" | "Shoes" => "Clothing",
        "Plastic" => "Plastic",
        "Metal" => "Metal",
        "Trash" => "Trash/Other",
        _ => OTHER_CATEGORY,
    }
}

pub fn is_known(label: &str) -> bool {
    CLASSIFIER_LABELS.contains(&label)
}

pub fn is_reusable(label: &str) -> bool {
    REUSABLE_LABELS.contains(&label)
}

pub fn is_recyclable(label: &str) -> bool {
    RECYCLABLE_LABELS.contains(&label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_label_has_a_category() {
        for label in CLASSIFIER_LABELS {
            assert_ne!(friendly_category(label), OTHER_CATEGORY, "{}", label);
        }
    }

    #[test]
    fn test_label_at_past_table() {
        assert_eq!(label_at(0), "Battery");
        assert_eq!(label_at(11), "White-glass");
        assert_eq!(label_at(12), "label_12");
    }

    #[test]
    fn test_unknown_label_is_other() {
        assert_eq!(friendly_category("Sofa"), "Other");
        assert!(!is_known("Sofa"));
        assert!(!is_reusable("Sofa"));
        assert!(!is_recyclable("Sofa"));
    }

    #[test]
    fn test_reusable_and_recyclable_overlap() {
        // Paper and cardboard sit in both sets
        assert!(is_reusable("Paper") && is_recyclable("Paper"));
        assert!(is_reusable("Shoes") && !is_recyclable("Shoes"));
        assert!(!is_reusable("Battery") && is_recyclable("Battery"));
    }
}
