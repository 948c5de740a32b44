use crate::error::{ChartError, ChartResult};
use crate::render::{RenderView, Renderer, SnapshotSurface};

/// No-op renderer used by tests and headless sessions.
///
/// It still validates series colors so tests catch malformed views.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub render_count: usize,
    pub last_series_count: usize,
    pub last_point_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, view: &RenderView) -> ChartResult<()> {
        for series in &view.series {
            series.color.validate()?;
        }
        self.render_count += 1;
        self.last_series_count = view.series.len();
        self.last_point_count = view.points.len();
        Ok(())
    }
}

/// Headless snapshot surface producing a JSON dump of the captured view.
///
/// The bytes are not a PNG; the surface exists so export flows can run
/// without a graphics backend. `failing()` builds a surface whose captures
/// always fail.
#[derive(Debug, Default)]
pub struct NullSurface {
    pub captures: Vec<RenderView>,
    fail: bool,
}

impl NullSurface {
    #[must_use]
    pub fn failing() -> Self {
        Self {
            captures: Vec::new(),
            fail: true,
        }
    }
}

impl SnapshotSurface for NullSurface {
    fn capture_png(&mut self, view: &RenderView) -> ChartResult<Vec<u8>> {
        if self.fail {
            return Err(ChartError::InvalidData(
                "surface is not capturable".to_owned(),
            ));
        }
        self.captures.push(view.clone());
        serde_json::to_vec(view)
            .map_err(|e| ChartError::InvalidData(format!("failed to encode capture: {e}")))
    }
}
