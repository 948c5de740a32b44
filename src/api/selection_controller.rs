use tracing::debug;

use crate::core::LineStyle;
use crate::error::ChartResult;
use crate::extensions::SessionEvent;
use crate::interaction::PickerPanel;
use crate::render::Renderer;

use super::{ChartSession, ToggleOutcome};

impl<R: Renderer> ChartSession<R> {
    /// Flips one variation in or out of the chart.
    ///
    /// Unknown ids and the last active id are no-ops reported through the outcome.
    pub fn toggle_variation(&mut self, id: &str) -> ToggleOutcome {
        let outcome = self.selection.toggle(id);
        if outcome.changed() {
            self.refresh_view();
            self.emit_event(SessionEvent::SelectionChanged {
                id: id.to_owned(),
                outcome,
            });
        } else {
            self.emit_event(SessionEvent::ToggleRejected {
                id: id.to_owned(),
                outcome,
            });
        }
        outcome
    }

    /// Sets the line style and closes the style picker.
    pub fn set_line_style(&mut self, style: LineStyle) {
        let previous = self.selection.line_style();
        self.selection.set_style(style);
        self.refresh_view();
        if previous != style {
            debug!(%previous, %style, "line style changed");
            self.emit_event(SessionEvent::StyleChanged { style });
        }
    }

    /// Parses `linear`, `bump` or `area` and applies it.
    pub fn set_line_style_str(&mut self, style: &str) -> ChartResult<()> {
        self.set_line_style(style.parse()?);
        Ok(())
    }

    pub fn toggle_panel(&mut self, panel: PickerPanel) -> bool {
        self.selection.toggle_panel(panel)
    }

    #[must_use]
    pub fn is_panel_open(&self, panel: PickerPanel) -> bool {
        self.selection.is_panel_open(panel)
    }
}
