mod null_renderer;
mod primitives;
mod view;

pub use null_renderer::{NullRenderer, NullSurface};
pub use primitives::Color;
pub use view::{
    ProjectedSeries, RenderMode, RenderView, SeriesDescriptor, SeriesRenderer, X_AXIS_KEY,
};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully derived `RenderView`; axis scaling, grid and
/// tooltip hosting stay on the backend side.
pub trait Renderer {
    fn render(&mut self, view: &RenderView) -> ChartResult<()>;
}

/// Capability to capture a view as an encoded PNG image.
pub trait SnapshotSurface {
    fn capture_png(&mut self, view: &RenderView) -> ChartResult<Vec<u8>>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoRenderStats, CairoRenderer};
