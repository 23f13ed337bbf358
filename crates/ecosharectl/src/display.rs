//! Plain-text rendering for ecosharectl output

use ecoshare_common::catalog::{AdviceCatalog, AdviceCategory};
use ecoshare_common::classify::Prediction;
use ecoshare_common::config::ColorMode;
use ecoshare_common::cycler::TipPanel;
use ecoshare_common::donation::DonationDraft;
use ecoshare_common::labels::{self, CLASSIFIER_LABELS};
use owo_colors::OwoColorize;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy)]
pub struct Style {
    color: bool,
}

impl Style {
    pub fn from_mode(mode: ColorMode) -> Self {
        let color = match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        };
        Self { color }
    }

    pub fn plain() -> Self {
        Self { color: false }
    }

    fn heading(&self, text: &str) -> String {
        if self.color {
            text.bold().green().to_string()
        } else {
            text.to_string()
        }
    }

    fn muted(&self, text: &str) -> String {
        if self.color {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }
}

/// One line per category, in panel order
pub fn format_panel(panel: &TipPanel, style: Style) -> String {
    let mut out = String::new();
    out.push_str(&style.heading(&format!("[{}]", panel.label)));
    out.push('\n');
    for category in AdviceCategory::ALL {
        out.push_str(&format!("  {:<8} {}\n", category.title(), panel.get(category)));
    }
    out
}

pub fn format_prediction(prediction: &Prediction, style: Style) -> String {
    let mut flags = Vec::new();
    if prediction.reusable {
        flags.push("reusable");
    }
    if prediction.recyclable {
        flags.push("recyclable");
    }

    let mut out = format!(
        "{} - {}% confidence\n",
        style.heading(&prediction.label),
        prediction.confidence_percent()
    );
    out.push_str(&format!("  Category: {}\n", prediction.category));
    if !flags.is_empty() {
        out.push_str(&style.muted(&format!("  ({})", flags.join(", "))));
        out.push('\n');
    }
    out
}

/// Numbered suggestions, 1-based like the listing form
pub fn format_suggestions(suggestions: &[String], style: Style) -> String {
    let mut out = String::new();
    for (idx, suggestion) in suggestions.iter().enumerate() {
        out.push_str(&style.heading(&format!("Suggestion {}:", idx + 1)));
        out.push(' ');
        out.push_str(suggestion);
        out.push('\n');
    }
    out
}

pub fn format_draft(draft: &DonationDraft, style: Style) -> String {
    let mut out = String::new();
    out.push_str(&style.heading("DONATION DRAFT"));
    out.push('\n');
    out.push_str(&format!("  Title:       {}\n", draft.title));
    out.push_str(&format!("  Category:    {}\n", draft.category));
    out.push_str(&format!("  Condition:   {:?}\n", draft.condition));
    out.push_str(&format!("  Description: {}\n", draft.description));
    if draft.suggestions.len() > 1 {
        out.push_str(&style.muted(&format!(
            "  {} more suggestion(s) available",
            draft.suggestions.len() - 1
        )));
        out.push('\n');
    }
    out
}

/// Classifier label table with catalog coverage
pub fn format_labels(catalog: &AdviceCatalog, style: Style) -> String {
    let mut out = String::new();
    out.push_str(&style.heading(&format!(
        "{:>3}  {:<12} {:<18} {:>5} {:>7} {:>6}",
        "#", "LABEL", "CATEGORY", "REUSE", "RECYCLE", "DONATE"
    )));
    out.push('\n');
    for (idx, label) in CLASSIFIER_LABELS.iter().enumerate() {
        out.push_str(&format!(
            "{:>3}  {:<12} {:<18} {:>5} {:>7} {:>6}\n",
            idx,
            label,
            labels::friendly_category(label),
            catalog.effective_len(label, AdviceCategory::Reuse),
            catalog.effective_len(label, AdviceCategory::Recycle),
            catalog.effective_len(label, AdviceCategory::Donate),
        ));
    }
    out
}
