use tracing::{trace, warn};

use crate::core::{CurveKind, Dataset, LineStyle, RatePoint, Variation, compute_rate_points};
use crate::render::{Color, RenderMode, RenderView, SeriesDescriptor, SeriesRenderer, X_AXIS_KEY};

use super::{ColorMap, SelectionStore};

const MISSING_COLOR: Color = Color::rgb(0.5, 0.5, 0.5);

/// Pure projection of dataset, selection and colors into a `RenderView`.
pub struct ChartPresenter;

impl ChartPresenter {
    /// Computes rates and projects them in one step.
    #[must_use]
    pub fn project(
        dataset: &Dataset,
        selection: &SelectionStore,
        colors: &ColorMap,
    ) -> RenderView {
        let rates = compute_rate_points(dataset.records());
        Self::project_rates(&rates, dataset.variations(), selection, colors)
    }

    /// Projects precomputed rate points.
    ///
    /// Dates where no active variation has a rate are dropped; inactive
    /// variations get no descriptor at all.
    #[must_use]
    pub fn project_rates(
        rates: &[RatePoint],
        variations: &[Variation],
        selection: &SelectionStore,
        colors: &ColorMap,
    ) -> RenderView {
        let style = selection.line_style();
        let renderer = Self::series_renderer(style);

        let series: Vec<SeriesDescriptor> = variations
            .iter()
            .filter(|variation| selection.is_active(&variation.key()))
            .map(|variation| {
                let id = variation.key();
                let color = colors.get(&id).copied().unwrap_or_else(|| {
                    warn!(id = %id, "no color assigned to variation, using fallback");
                    MISSING_COLOR
                });
                SeriesDescriptor {
                    id,
                    name: variation.name.clone(),
                    color,
                    style,
                    renderer,
                    connect_nulls: true,
                }
            })
            .collect();

        let points: Vec<RatePoint> = rates
            .iter()
            .filter(|point| point.has_any(series.iter().map(|s| s.id.as_str())))
            .cloned()
            .collect();
        trace!(
            dates = rates.len(),
            visible_dates = points.len(),
            series = series.len(),
            "projected render view"
        );

        RenderView {
            x_key: X_AXIS_KEY.to_owned(),
            mode: if style.is_area() {
                RenderMode::Area
            } else {
                RenderMode::Line
            },
            line_style: style,
            points,
            series,
            summary: selection.selection_summary(),
            style_label: selection.style_label(),
        }
    }

    #[must_use]
    pub fn series_renderer(style: LineStyle) -> SeriesRenderer {
        match style {
            LineStyle::Linear => SeriesRenderer::Line {
                curve: CurveKind::Linear,
            },
            LineStyle::Bump => SeriesRenderer::Line {
                curve: CurveKind::Bump,
            },
            LineStyle::Area => SeriesRenderer::Area {
                curve: CurveKind::Monotone,
            },
        }
    }
}
