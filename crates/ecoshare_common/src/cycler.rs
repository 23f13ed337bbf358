//! Advice cycling.
//!
//! Every classification of the same label moves a per-(label, category)
//! cursor one step around that label's effective list, so a user who
//! re-scans an item sees a different tip until the list wraps.
//!
//! Cursor state is owned by the caller (one `CycleState` per session).

use crate::catalog::{AdviceCatalog, AdviceCategory};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, trace};

/// Cursor key: classifier label plus advice category
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CursorKey {
    label: String,
    category: AdviceCategory,
}

/// Per-session cursors, one per (label, category) pair
#[derive(Debug, Clone, Default)]
pub struct CycleState {
    cursors: HashMap<CursorKey, usize>,
}

impl CycleState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next index to serve (0 when the pair has never been served)
    pub fn cursor(&self, label: &str, category: AdviceCategory) -> usize {
        self.cursors
            .get(&CursorKey {
                label: label.to_string(),
                category,
            })
            .copied()
            .unwrap_or(0)
    }

    /// Number of (label, category) pairs served so far
    pub fn len(&self) -> usize {
        self.cursors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cursors.is_empty()
    }

    /// Forget all cursors (new session)
    pub fn reset(&mut self) {
        self.cursors.clear();
    }

    fn set(&mut self, label: &str, category: AdviceCategory, index: usize) {
        self.cursors.insert(
            CursorKey {
                label: label.to_string(),
                category,
            },
            index,
        );
    }
}

/// Serve the tip under the cursor and move the cursor one step
pub fn advance<'c>(
    catalog: &'c AdviceCatalog,
    state: &mut CycleState,
    label: &str,
    category: AdviceCategory,
) -> &'c str {
    let len = catalog.effective_len(label, category);
    let current = state.cursor(label, category) % len;
    let tip = catalog.effective_entry(label, category, current);

    let next = (current + 1) % len;
    if next == 0 {
        debug!(label, %category, len, "Advice cursor wrapped");
    }
    trace!(label, %category, current, next, "Advanced advice cursor");
    state.set(label, category, next);

    tip
}

/// Tip under the cursor, without moving it
pub fn peek<'c>(
    catalog: &'c AdviceCatalog,
    state: &CycleState,
    label: &str,
    category: AdviceCategory,
) -> &'c str {
    catalog.effective_entry(label, category, state.cursor(label, category))
}

/// One tip per category for a single classification event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TipPanel {
    pub label: String,
    pub reuse: String,
    pub recycle: String,
    pub donate: String,
}

impl TipPanel {
    pub fn get(&self, category: AdviceCategory) -> &str {
        match category {
            AdviceCategory::Reuse => &self.reuse,
            AdviceCategory::Recycle => &self.recycle,
            AdviceCategory::Donate => &self.donate,
        }
    }
}

/// A catalog paired with one session's cursors
#[derive(Debug, Clone)]
pub struct AdviceCycler<'c> {
    catalog: &'c AdviceCatalog,
    state: CycleState,
}

impl<'c> AdviceCycler<'c> {
    pub fn new(catalog: &'c AdviceCatalog) -> Self {
        Self::with_state(catalog, CycleState::new())
    }

    /// Resume a session from previously held cursors
    pub fn with_state(catalog: &'c AdviceCatalog, state: CycleState) -> Self {
        Self { catalog, state }
    }

    pub fn advance(&mut self, label: &str, category: AdviceCategory) -> &'c str {
        advance(self.catalog, &mut self.state, label, category)
    }

    pub fn peek(&self, label: &str, category: AdviceCategory) -> &'c str {
        peek(self.catalog, &self.state, label, category)
    }

    /// Register a classification event: advance reuse, recycle and donate once each
    pub fn panel(&mut self, label: &str) -> TipPanel {
        TipPanel {
            label: label.to_string(),
            reuse: self.advance(label, AdviceCategory::Reuse).to_string(),
            recycle: self.advance(label, AdviceCategory::Recycle).to_string(),
            donate: self.advance(label, AdviceCategory::Donate).to_string(),
        }
    }

    pub fn state(&self) -> &CycleState {
        &self.state
    }

    /// End the session, handing the cursors back
    pub fn into_state(self) -> CycleState {
        self.state
    }

    pub fn catalog(&self) -> &'c AdviceCatalog {
        self.catalog
    }
}
