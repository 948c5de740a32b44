use tracing::debug;

use crate::core::{Dataset, compute_rate_points};
use crate::error::ChartResult;
use crate::extensions::SessionEvent;
use crate::render::Renderer;

use super::ChartSession;

impl<R: Renderer> ChartSession<R> {
    /// Replaces the dataset and recomputes rates.
    ///
    /// A changed variation list reassigns colors and resets the selection to
    /// "all selected, linear". Identical variations keep both.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        let variations_changed = dataset.variations() != self.dataset.variations();
        self.rates = compute_rate_points(dataset.records());
        self.dataset = dataset;

        if variations_changed {
            self.colors = self.color_assigner.assign(self.dataset.variations());
            self.selection.reset(self.dataset.variations());
        }
        debug!(
            variations = self.dataset.variations().len(),
            records = self.dataset.records().len(),
            variations_changed,
            "set dataset"
        );

        self.refresh_view();
        self.emit_event(SessionEvent::DatasetLoaded {
            variations: self.dataset.variations().len(),
            records: self.dataset.records().len(),
        });
    }

    /// Parses a dataset document and loads it.
    pub fn load_dataset_json(&mut self, input: &str) -> ChartResult<()> {
        let dataset = Dataset::from_json_str(input)?;
        self.set_dataset(dataset);
        Ok(())
    }
}
