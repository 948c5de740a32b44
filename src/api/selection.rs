use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{LineStyle, Variation};
use crate::interaction::{PickerPanel, PickerPanels};

/// Result of a toggle request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToggleOutcome {
    Added,
    Removed,
    /// The id is the only active variation; the chart may not become empty.
    RejectedLastActive,
    UnknownVariation,
}

impl ToggleOutcome {
    #[must_use]
    pub fn changed(self) -> bool {
        matches!(self, Self::Added | Self::Removed)
    }
}

/// Serializable view of the current selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    pub active_ids: Vec<String>,
    pub line_style: LineStyle,
    pub panels: PickerPanels,
}

/// Active variations, line style and picker panels of one chart session.
///
/// At least one variation stays active while the dataset has any.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionStore {
    known: Vec<String>,
    active: IndexSet<String>,
    line_style: LineStyle,
    panels: PickerPanels,
}

impl SelectionStore {
    /// Everything selected, `linear`, both pickers closed.
    #[must_use]
    pub fn new(variations: &[Variation]) -> Self {
        let known: Vec<String> = variations.iter().map(Variation::key).collect();
        let active = known.iter().cloned().collect();
        Self {
            known,
            active,
            line_style: LineStyle::default(),
            panels: PickerPanels::default(),
        }
    }

    pub fn reset(&mut self, variations: &[Variation]) {
        *self = Self::new(variations);
    }

    pub fn toggle(&mut self, id: &str) -> ToggleOutcome {
        if !self.known.iter().any(|known| known == id) {
            trace!(id, "ignoring toggle of unknown variation");
            return ToggleOutcome::UnknownVariation;
        }
        if self.is_toggle_locked(id) {
            debug!(id, "refusing to deselect the last active variation");
            return ToggleOutcome::RejectedLastActive;
        }

        let outcome = if self.active.shift_remove(id) {
            ToggleOutcome::Removed
        } else {
            self.active.insert(id.to_owned());
            ToggleOutcome::Added
        };
        debug!(id, ?outcome, active = self.active.len(), "toggled variation");
        outcome
    }

    /// `true` when `id` is the sole active variation.
    #[must_use]
    pub fn is_toggle_locked(&self, id: &str) -> bool {
        self.active.len() == 1 && self.active.contains(id)
    }

    /// Replaces the line style and closes the style picker.
    pub fn set_style(&mut self, style: LineStyle) {
        self.line_style = style;
        self.panels.close(PickerPanel::LineStyles);
    }

    pub fn toggle_panel(&mut self, panel: PickerPanel) -> bool {
        self.panels.toggle(panel)
    }

    #[must_use]
    pub fn is_panel_open(&self, panel: PickerPanel) -> bool {
        self.panels.is_open(panel)
    }

    #[must_use]
    pub fn is_active(&self, id: &str) -> bool {
        self.active.contains(id)
    }

    pub fn active_ids(&self) -> impl Iterator<Item = &str> {
        self.active.iter().map(String::as_str)
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    #[must_use]
    pub fn total_variations(&self) -> usize {
        self.known.len()
    }

    #[must_use]
    pub fn line_style(&self) -> LineStyle {
        self.line_style
    }

    #[must_use]
    pub fn selection_summary(&self) -> String {
        if self.active.len() == self.known.len() {
            "All variations selected".to_owned()
        } else {
            format!("{} are selected", self.active.len())
        }
    }

    #[must_use]
    pub fn style_label(&self) -> String {
        format!("Line styles: {}", self.line_style)
    }

    #[must_use]
    pub fn state(&self) -> SelectionState {
        SelectionState {
            active_ids: self.active.iter().cloned().collect(),
            line_style: self.line_style,
            panels: self.panels,
        }
    }
}
