use serde::{Deserialize, Serialize};

use crate::core::{LinearScale, Viewport};
use crate::error::{ChartError, ChartResult};

/// Interpolation between consecutive defined vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurveKind {
    Linear,
    /// Horizontal-tangent cubic; both control points sit at the midpoint x.
    Bump,
    /// Monotone cubic that never overshoots between samples.
    Monotone,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathVertex {
    pub x: f64,
    pub y: f64,
}

/// Backend-agnostic path command in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo {
        x: f64,
        y: f64,
    },
    LineTo {
        x: f64,
        y: f64,
    },
    CurveTo {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x: f64,
        y: f64,
    },
    Close,
}

/// Stroke path plus optional closed fill for one series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPath {
    pub vertices: Vec<PathVertex>,
    pub stroke: Vec<PathCommand>,
    pub fill: Option<Vec<PathCommand>>,
}

impl SeriesPath {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            vertices: Vec::new(),
            stroke: Vec::new(),
            fill: None,
        }
    }
}

/// Evenly spaced x positions for `count` categories inside the padded viewport.
///
/// A single category is centered.
pub fn category_x_positions(
    count: usize,
    viewport: Viewport,
    padding_px: f64,
) -> ChartResult<Vec<f64>> {
    if !viewport.is_valid() {
        return Err(ChartError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }
    let width = f64::from(viewport.width);
    if !padding_px.is_finite() || padding_px < 0.0 || padding_px * 2.0 >= width {
        return Err(ChartError::InvalidData(
            "padding must be finite, >= 0 and leave a drawable width".to_owned(),
        ));
    }

    match count {
        0 => Ok(Vec::new()),
        1 => Ok(vec![width / 2.0]),
        _ => {
            let step = (width - padding_px * 2.0) / (count - 1) as f64;
            Ok((0..count).map(|i| padding_px + step * i as f64).collect())
        }
    }
}

/// Projects one series into stroke (and optionally fill) paths.
///
/// `values[i]` belongs to `xs[i]`. Undefined values are skipped and their
/// neighbours connected directly.
pub fn project_series_path(
    values: &[Option<f64>],
    xs: &[f64],
    y_scale: LinearScale,
    curve: CurveKind,
    filled: bool,
) -> ChartResult<SeriesPath> {
    if values.len() != xs.len() {
        return Err(ChartError::InvalidData(format!(
            "series has {} values for {} x positions",
            values.len(),
            xs.len()
        )));
    }

    let mut vertices = Vec::with_capacity(values.len());
    for (value, &x) in values.iter().zip(xs) {
        if let Some(value) = value {
            vertices.push(PathVertex {
                x,
                y: y_scale.to_pixel(*value)?,
            });
        }
    }
    if vertices.is_empty() {
        return Ok(SeriesPath::empty());
    }

    let stroke = curve_commands(&vertices, curve);
    let fill = if filled {
        let baseline_y = y_scale.to_pixel(y_scale.domain().0)?;
        Some(close_against_baseline(&stroke, &vertices, baseline_y))
    } else {
        None
    };

    Ok(SeriesPath {
        vertices,
        stroke,
        fill,
    })
}

#[must_use]
pub fn curve_commands(vertices: &[PathVertex], curve: CurveKind) -> Vec<PathCommand> {
    let Some(first) = vertices.first() else {
        return Vec::new();
    };

    let mut commands = Vec::with_capacity(vertices.len());
    commands.push(PathCommand::MoveTo {
        x: first.x,
        y: first.y,
    });
    if vertices.len() == 1 {
        return commands;
    }

    match curve {
        CurveKind::Linear => {
            commands.extend(
                vertices[1..]
                    .iter()
                    .map(|v| PathCommand::LineTo { x: v.x, y: v.y }),
            );
        }
        CurveKind::Bump => {
            for pair in vertices.windows(2) {
                let (p0, p1) = (pair[0], pair[1]);
                let mid_x = (p0.x + p1.x) / 2.0;
                commands.push(PathCommand::CurveTo {
                    x1: mid_x,
                    y1: p0.y,
                    x2: mid_x,
                    y2: p1.y,
                    x: p1.x,
                    y: p1.y,
                });
            }
        }
        CurveKind::Monotone => {
            if vertices.len() == 2 {
                commands.push(PathCommand::LineTo {
                    x: vertices[1].x,
                    y: vertices[1].y,
                });
                return commands;
            }
            let tangents = monotone_tangents(vertices);
            for (i, pair) in vertices.windows(2).enumerate() {
                let (p0, p1) = (pair[0], pair[1]);
                let dx = (p1.x - p0.x) / 3.0;
                commands.push(PathCommand::CurveTo {
                    x1: p0.x + dx,
                    y1: p0.y + dx * tangents[i],
                    x2: p1.x - dx,
                    y2: p1.y - dx * tangents[i + 1],
                    x: p1.x,
                    y: p1.y,
                });
            }
        }
    }

    commands
}

/// Fritsch-Carlson style tangents: zero at local extrema, clamped elsewhere.
fn monotone_tangents(vertices: &[PathVertex]) -> Vec<f64> {
    let n = vertices.len();
    let secant = |i: usize| {
        let h = vertices[i + 1].x - vertices[i].x;
        if h == 0.0 {
            0.0
        } else {
            (vertices[i + 1].y - vertices[i].y) / h
        }
    };

    let mut tangents = vec![0.0; n];
    for i in 1..n - 1 {
        let h0 = vertices[i].x - vertices[i - 1].x;
        let h1 = vertices[i + 1].x - vertices[i].x;
        let s0 = secant(i - 1);
        let s1 = secant(i);
        let p = if h0 + h1 == 0.0 {
            0.0
        } else {
            (s0 * h1 + s1 * h0) / (h0 + h1)
        };
        let sign_sum = signum_or_zero(s0) + signum_or_zero(s1);
        tangents[i] = sign_sum * s0.abs().min(s1.abs()).min(0.5 * p.abs());
    }

    // End tangents lean on their single neighbour.
    tangents[0] = end_tangent(vertices[0], vertices[1], tangents[1]);
    tangents[n - 1] = end_tangent(vertices[n - 2], vertices[n - 1], tangents[n - 2]);
    tangents
}

fn end_tangent(p0: PathVertex, p1: PathVertex, neighbour: f64) -> f64 {
    let h = p1.x - p0.x;
    if h == 0.0 {
        neighbour
    } else {
        (3.0 * (p1.y - p0.y) / h - neighbour) / 2.0
    }
}

fn signum_or_zero(value: f64) -> f64 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

fn close_against_baseline(
    stroke: &[PathCommand],
    vertices: &[PathVertex],
    baseline_y: f64,
) -> Vec<PathCommand> {
    let first_x = vertices[0].x;
    let last_x = vertices[vertices.len() - 1].x;

    let mut fill = Vec::with_capacity(stroke.len() + 3);
    fill.extend_from_slice(stroke);
    fill.push(PathCommand::LineTo {
        x: last_x,
        y: baseline_y,
    });
    fill.push(PathCommand::LineTo {
        x: first_x,
        y: baseline_y,
    });
    fill.push(PathCommand::Close);
    fill
}
