//! Command implementations for ecosharectl

use crate::display::{self, Style};
use anyhow::{Context, Result};
use ecoshare_common::catalog::{AdviceCatalog, AdviceCategory};
use ecoshare_common::classify::{classify as decode_scores, Prediction};
use ecoshare_common::config::EcoshareConfig;
use ecoshare_common::cycler::{AdviceCycler, TipPanel};
use ecoshare_common::describe::{DescriptionCatalog, EstimatedCondition};
use ecoshare_common::donation::DonationDraft;
use ecoshare_common::labels;
use serde::Serialize;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Loaded data and output settings shared by every command
pub struct Runtime {
    pub config: EcoshareConfig,
    pub catalog: AdviceCatalog,
    pub descriptions: DescriptionCatalog,
    pub style: Style,
    pub json: bool,
}

impl Runtime {
    /// Load catalogs; explicit paths win over the config file
    pub fn load(
        config: EcoshareConfig,
        catalog_path: Option<PathBuf>,
        descriptions_path: Option<PathBuf>,
        json: bool,
    ) -> Result<Self> {
        let catalog_path = catalog_path.or_else(|| config.catalog.path.clone());
        let descriptions_path =
            descriptions_path.or_else(|| config.catalog.descriptions_path.clone());

        let catalog = load_catalog(catalog_path.as_deref())?;
        let descriptions = DescriptionCatalog::load_or_builtin(descriptions_path.as_deref())
            .with_context(|| match &descriptions_path {
                Some(path) => format!("Failed to load descriptions from {}", path.display()),
                None => "Failed to load builtin descriptions".to_string(),
            })?;

        Ok(Self {
            style: Style::from_mode(config.output.color),
            json: json || config.output.json,
            config,
            catalog,
            descriptions,
        })
    }

    fn warn_if_unlisted(&self, label: &str) {
        if !labels::is_known(label) {
            warn!(label, "Label is not produced by the classifier; using default advice");
        }
    }
}

fn load_catalog(path: Option<&Path>) -> Result<AdviceCatalog> {
    AdviceCatalog::load_or_builtin(path).with_context(|| match path {
        Some(path) => format!("Failed to load advice catalog from {}", path.display()),
        None => "Failed to load builtin advice catalog".to_string(),
    })
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[derive(Serialize)]
struct AdviseStep<'a> {
    event: usize,
    label: &'a str,
    category: AdviceCategory,
    tip: &'a str,
}

/// Simulate `count` classification events for one label
pub fn advise(rt: &Runtime, label: &str, category: Option<AdviceCategory>, count: usize) -> Result<()> {
    info!(label, ?category, count, "advise");
    rt.warn_if_unlisted(label);

    let mut cycler = AdviceCycler::new(&rt.catalog);

    match category {
        Some(category) => {
            let steps: Vec<AdviseStep> = (0..count)
                .map(|event| AdviseStep {
                    event: event + 1,
                    label,
                    category,
                    tip: cycler.advance(label, category),
                })
                .collect();

            if rt.json {
                return print_json(&steps);
            }
            for step in steps {
                println!("{}. {}", step.event, step.tip);
            }
        }
        None => {
            let panels: Vec<TipPanel> = (0..count).map(|_| cycler.panel(label)).collect();

            if rt.json {
                return print_json(&panels);
            }
            for panel in panels {
                print!("{}", display::format_panel(&panel, rt.style));
            }
        }
    }

    Ok(())
}

#[derive(Serialize)]
struct DescribeOutput<'a> {
    label: &'a str,
    condition: EstimatedCondition,
    suggestions: Vec<String>,
}

pub fn describe(rt: &Runtime, label: &str, condition: Option<EstimatedCondition>) -> Result<()> {
    let condition = condition.unwrap_or_else(|| EstimatedCondition::for_label(label));
    info!(label, %condition, "describe");

    let suggestions = rt.descriptions.describe(label, condition);

    if rt.json {
        return print_json(&DescribeOutput {
            label,
            condition,
            suggestions,
        });
    }
    print!("{}", display::format_suggestions(&suggestions, rt.style));
    Ok(())
}

#[derive(Serialize)]
struct ClassifyOutput {
    prediction: Prediction,
    tips: TipPanel,
    draft: DonationDraft,
}

/// Decode classifier scores and show everything the upload screen would
pub fn classify(rt: &Runtime, scores: &[f32]) -> Result<()> {
    info!(scores = scores.len(), "classify");
    if scores.len() != labels::CLASSIFIER_LABELS.len() {
        warn!(
            got = scores.len(),
            expected = labels::CLASSIFIER_LABELS.len(),
            "Score vector length does not match the label table"
        );
    }

    let prediction = decode_scores(scores)?;
    debug!(label = %prediction.label, confidence = prediction.confidence, "Decoded prediction");

    let mut cycler = AdviceCycler::new(&rt.catalog);
    let tips = cycler.panel(&prediction.label);
    let draft = DonationDraft::from_prediction(Some(&prediction), &rt.descriptions);

    if rt.json {
        return print_json(&ClassifyOutput {
            prediction,
            tips,
            draft,
        });
    }

    print!("{}", display::format_prediction(&prediction, rt.style));
    println!();
    print!("{}", display::format_panel(&tips, rt.style));
    println!();
    print!("{}", display::format_draft(&draft, rt.style));
    Ok(())
}

/// Read one label per line; each line is a classification event
pub fn session<R: BufRead, W: Write>(rt: &Runtime, input: R, mut out: W) -> Result<usize> {
    let mut cycler = AdviceCycler::new(&rt.catalog);
    let mut events = 0;

    for line in input.lines() {
        let line = line.context("Failed to read label from input")?;
        let label = line.trim();
        if label.is_empty() || label.starts_with('#') {
            continue;
        }

        rt.warn_if_unlisted(label);
        let panel = cycler.panel(label);
        events += 1;

        if rt.json {
            writeln!(out, "{}", serde_json::to_string(&panel)?)?;
        } else {
            write!(out, "{}", display::format_panel(&panel, rt.style))?;
        }
    }

    info!(events, pairs = cycler.state().len(), "Session ended");
    Ok(events)
}

#[derive(Serialize)]
struct LabelRow {
    index: usize,
    label: &'static str,
    category: &'static str,
    reusable: bool,
    recyclable: bool,
}

pub fn list_labels(rt: &Runtime) -> Result<()> {
    if rt.json {
        let rows: Vec<LabelRow> = labels::CLASSIFIER_LABELS
            .iter()
            .enumerate()
            .map(|(index, &label)| LabelRow {
                index,
                label,
                category: labels::friendly_category(label),
                reusable: labels::is_reusable(label),
                recyclable: labels::is_recyclable(label),
            })
            .collect();
        return print_json(&rows);
    }
    print!("{}", display::format_labels(&rt.catalog, rt.style));
    Ok(())
}

#[derive(Serialize)]
struct CatalogSummary {
    labels: usize,
    default_reuse: usize,
    default_recycle: usize,
    default_donate: usize,
    uncovered: Vec<String>,
}

/// Validate a catalog file on its own; the configured catalogs are not loaded
pub fn catalog_check_file(path: &Path, json: bool) -> Result<()> {
    let catalog = load_catalog(Some(path))?;
    catalog_check(&catalog, json)
}

/// Summarise a loaded catalog
pub fn catalog_check(catalog: &AdviceCatalog, json: bool) -> Result<()> {

    let uncovered: Vec<String> = labels::CLASSIFIER_LABELS
        .iter()
        .filter(|label| {
            AdviceCategory::ALL
                .iter()
                .all(|category| !catalog.has_specific(label, *category))
        })
        .map(|label| label.to_string())
        .collect();

    let summary = CatalogSummary {
        labels: catalog.label_count(),
        default_reuse: catalog.default_list(AdviceCategory::Reuse).len(),
        default_recycle: catalog.default_list(AdviceCategory::Recycle).len(),
        default_donate: catalog.default_list(AdviceCategory::Donate).len(),
        uncovered,
    };

    if json {
        return print_json(&summary);
    }

    println!("Catalog OK: {} labels", summary.labels);
    println!(
        "  default tips: reuse {}, recycle {}, donate {}",
        summary.default_reuse, summary.default_recycle, summary.default_donate
    );
    if !summary.uncovered.is_empty() {
        println!("  default-only labels: {}", summary.uncovered.join(", "));
    }
    Ok(())
}

pub fn config_show(rt: &Runtime) -> Result<()> {
    if rt.json {
        return print_json(&rt.config);
    }
    print!("{}", rt.config.to_toml()?);
    Ok(())
}
