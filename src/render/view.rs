use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::{
    CurveKind, LineStyle, LinearScale, RatePoint, SeriesPath, Viewport, category_x_positions,
    project_series_path,
};
use crate::error::ChartResult;
use crate::render::Color;

/// Key of the category axis in flattened rows.
pub const X_AXIS_KEY: &str = "date";

/// Chart family used for the whole view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    Line,
    Area,
}

/// Series renderer. Line and area rendering are mutually exclusive per view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SeriesRenderer {
    Line { curve: CurveKind },
    Area { curve: CurveKind },
}

impl SeriesRenderer {
    #[must_use]
    pub fn curve(self) -> CurveKind {
        match self {
            Self::Line { curve } | Self::Area { curve } => curve,
        }
    }

    #[must_use]
    pub fn is_filled(self) -> bool {
        matches!(self, Self::Area { .. })
    }
}

/// Everything a renderer needs to draw one active variation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesDescriptor {
    pub id: String,
    pub name: String,
    pub color: Color,
    pub style: LineStyle,
    pub renderer: SeriesRenderer,
    pub connect_nulls: bool,
}

/// Series descriptor paired with its pixel-space paths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectedSeries {
    pub id: String,
    pub color: Color,
    pub renderer: SeriesRenderer,
    pub path: SeriesPath,
}

/// Derived, backend-agnostic chart state for one draw pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderView {
    pub x_key: String,
    pub mode: RenderMode,
    pub line_style: LineStyle,
    pub points: Vec<RatePoint>,
    pub series: Vec<SeriesDescriptor>,
    pub summary: String,
    pub style_label: String,
}

impl RenderView {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty() || self.series.is_empty()
    }

    pub fn series_keys(&self) -> impl Iterator<Item = &str> {
        self.series.iter().map(|series| series.id.as_str())
    }

    #[must_use]
    pub fn descriptor(&self, key: &str) -> Option<&SeriesDescriptor> {
        self.series.iter().find(|series| series.id == key)
    }

    #[must_use]
    pub fn dates(&self) -> Vec<&str> {
        self.points.iter().map(|point| point.date.as_str()).collect()
    }

    /// Per-date values of one series, `None` where the rate is a gap.
    #[must_use]
    pub fn series_values(&self, key: &str) -> Vec<Option<f64>> {
        self.points.iter().map(|point| point.rate(key)).collect()
    }

    /// Largest rate among visible series.
    #[must_use]
    pub fn max_rate(&self) -> Option<f64> {
        let mut max: Option<f64> = None;
        for point in &self.points {
            for series in &self.series {
                if let Some(rate) = point.rate(&series.id) {
                    max = Some(max.map_or(rate, |current| current.max(rate)));
                }
            }
        }
        max
    }

    /// Flattened `{ "date": .., "<id>": rate }` rows as charting libraries consume them.
    #[must_use]
    pub fn rows_json(&self) -> Vec<Value> {
        self.points
            .iter()
            .map(|point| {
                let mut row = Map::with_capacity(point.rates.len() + 1);
                row.insert(self.x_key.clone(), Value::String(point.date.clone()));
                for (key, rate) in &point.rates {
                    if let Some(number) = serde_json::Number::from_f64(*rate) {
                        row.insert(key.clone(), Value::Number(number));
                    }
                }
                Value::Object(row)
            })
            .collect()
    }

    /// Projects every visible series into pixel space.
    pub fn project_paths(
        &self,
        viewport: Viewport,
        padding_px: f64,
    ) -> ChartResult<Vec<ProjectedSeries>> {
        let xs = category_x_positions(self.points.len(), viewport, padding_px)?;
        let height = f64::from(viewport.height);
        let y_scale = LinearScale::for_rates(
            self.max_rate().unwrap_or(0.0),
            (height - padding_px, padding_px),
        )?;

        self.series
            .iter()
            .map(|series| {
                let path = project_series_path(
                    &self.series_values(&series.id),
                    &xs,
                    y_scale,
                    series.renderer.curve(),
                    series.renderer.is_filled(),
                )?;
                Ok(ProjectedSeries {
                    id: series.id.clone(),
                    color: series.color,
                    renderer: series.renderer,
                    path,
                })
            })
            .collect()
    }
}
