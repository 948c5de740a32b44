use tracing::debug;

use crate::core::{Dataset, RatePoint};
use crate::error::ChartResult;
use crate::extensions::SessionObserver;
use crate::render::{ProjectedSeries, RenderView, Renderer, SnapshotSurface};

use super::export::ExportQueue;
use super::validation::validate_session_config;
use super::{ChartPresenter, ChartSessionConfig, ColorAssigner, ColorMap, SelectionStore};

/// Interactive chart session, the single owner of all mutable chart state.
///
/// Every mutation re-derives the `RenderView` synchronously, so `view()` always
/// reflects the latest dataset, selection and style.
pub struct ChartSession<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: ChartSessionConfig,
    pub(super) color_assigner: ColorAssigner,
    pub(super) dataset: Dataset,
    pub(super) rates: Vec<RatePoint>,
    pub(super) colors: ColorMap,
    pub(super) selection: SelectionStore,
    pub(super) view: RenderView,
    pub(super) exports: ExportQueue,
    pub(super) surface: Option<Box<dyn SnapshotSurface>>,
    pub(super) observers: Vec<Box<dyn SessionObserver>>,
}

impl<R: Renderer> ChartSession<R> {
    pub fn new(renderer: R, config: ChartSessionConfig) -> ChartResult<Self> {
        let color_assigner = validate_session_config(&config)?;
        let dataset = Dataset::default();
        let selection = SelectionStore::new(dataset.variations());
        let colors = ColorMap::new();
        let view = ChartPresenter::project_rates(&[], dataset.variations(), &selection, &colors);
        debug!(
            width = config.viewport.width,
            height = config.viewport.height,
            palette = color_assigner.palette().len(),
            "chart session created"
        );

        Ok(Self {
            renderer,
            config,
            color_assigner,
            dataset,
            rates: Vec::new(),
            colors,
            selection,
            view,
            exports: ExportQueue::default(),
            surface: None,
            observers: Vec::new(),
        })
    }

    /// Creates a session and loads `dataset` right away.
    pub fn with_dataset(
        renderer: R,
        config: ChartSessionConfig,
        dataset: Dataset,
    ) -> ChartResult<Self> {
        let mut session = Self::new(renderer, config)?;
        session.set_dataset(dataset);
        Ok(session)
    }

    #[must_use]
    pub fn config(&self) -> &ChartSessionConfig {
        &self.config
    }

    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Rate points for every record, before selection filtering.
    #[must_use]
    pub fn rates(&self) -> &[RatePoint] {
        &self.rates
    }

    #[must_use]
    pub fn colors(&self) -> &ColorMap {
        &self.colors
    }

    #[must_use]
    pub fn selection(&self) -> &SelectionStore {
        &self.selection
    }

    #[must_use]
    pub fn view(&self) -> &RenderView {
        &self.view
    }

    #[must_use]
    pub fn selection_summary(&self) -> &str {
        &self.view.summary
    }

    /// Pixel-space paths of the visible series for the configured viewport.
    pub fn project_paths(&self) -> ChartResult<Vec<ProjectedSeries>> {
        self.view.project_paths(self.config.viewport, self.config.padding_px)
    }

    pub fn render(&mut self) -> ChartResult<()> {
        self.renderer.render(&self.view)?;
        self.emit_event(crate::extensions::SessionEvent::Rendered);
        Ok(())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    pub(super) fn refresh_view(&mut self) {
        self.view = ChartPresenter::project_rates(
            &self.rates,
            self.dataset.variations(),
            &self.selection,
            &self.colors,
        );
    }
}
