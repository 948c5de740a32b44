use serde::{Deserialize, Serialize};

/// Dropdown affordances of the chart control bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PickerPanel {
    Variations,
    LineStyles,
}

/// Open/closed flags of the two pickers.
///
/// Presentation-only: nothing in the projection reads these flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PickerPanels {
    variations_open: bool,
    line_styles_open: bool,
}

impl PickerPanels {
    #[must_use]
    pub fn is_open(self, panel: PickerPanel) -> bool {
        match panel {
            PickerPanel::Variations => self.variations_open,
            PickerPanel::LineStyles => self.line_styles_open,
        }
    }

    /// Flips one panel and returns its new state.
    pub fn toggle(&mut self, panel: PickerPanel) -> bool {
        let flag = self.flag_mut(panel);
        *flag = !*flag;
        *flag
    }

    pub fn close(&mut self, panel: PickerPanel) {
        *self.flag_mut(panel) = false;
    }

    pub fn close_all(&mut self) {
        *self = Self::default();
    }

    fn flag_mut(&mut self, panel: PickerPanel) -> &mut bool {
        match panel {
            PickerPanel::Variations => &mut self.variations_open,
            PickerPanel::LineStyles => &mut self.line_styles_open,
        }
    }
}
