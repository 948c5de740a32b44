use cairo::{Context, Format, ImageSurface};

use crate::core::{PathCommand, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, RenderView, Renderer, SnapshotSurface};

const GRID_LINES: usize = 4;
const GRID_DASH_PX: f64 = 4.0;
const STROKE_WIDTH_PX: f64 = 1.5;
const AREA_FILL_ALPHA: f64 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub grid_lines_drawn: usize,
    pub strokes_drawn: usize,
    pub fills_drawn: usize,
}

/// Offscreen Cairo backend that draws the plot area and encodes it as PNG.
///
/// Axis labels and tooltips are left to the host toolkit.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    viewport: Viewport,
    padding_px: f64,
    background: Color,
    grid_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(viewport: Viewport, padding_px: f64) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        let width = i32::try_from(viewport.width)
            .map_err(|_| ChartError::InvalidData("surface width exceeds i32".to_owned()))?;
        let height = i32::try_from(viewport.height)
            .map_err(|_| ChartError::InvalidData("surface height exceeds i32".to_owned()))?;

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            viewport,
            padding_px,
            background: Color::rgb(1.0, 1.0, 1.0),
            grid_color: Color::rgb(0.8, 0.8, 0.8),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn set_background(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.background = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    fn draw(&mut self, view: &RenderView) -> ChartResult<()> {
        let projected = view.project_paths(self.viewport, self.padding_px)?;
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;

        apply_color(&context, self.background);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut stats = CairoRenderStats::default();
        let width = f64::from(self.viewport.width);
        let plot_height = f64::from(self.viewport.height) - self.padding_px * 2.0;

        apply_color(&context, self.grid_color);
        context.set_line_width(1.0);
        context.set_dash(&[GRID_DASH_PX, GRID_DASH_PX], 0.0);
        for i in 0..=GRID_LINES {
            let y = self.padding_px + plot_height * i as f64 / GRID_LINES as f64;
            context.move_to(self.padding_px, y);
            context.line_to(width - self.padding_px, y);
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke grid line", err))?;
            stats.grid_lines_drawn += 1;
        }
        context.set_dash(&[], 0.0);

        for series in &projected {
            if let Some(fill) = &series.path.fill {
                append_path(&context, fill);
                apply_color(&context, series.color.with_alpha(AREA_FILL_ALPHA));
                context
                    .fill()
                    .map_err(|err| map_backend_error("failed to fill area", err))?;
                stats.fills_drawn += 1;
            }
            if series.path.stroke.len() > 1 {
                append_path(&context, &series.path.stroke);
                apply_color(&context, series.color);
                context.set_line_width(STROKE_WIDTH_PX);
                context
                    .stroke()
                    .map_err(|err| map_backend_error("failed to stroke series", err))?;
                stats.strokes_drawn += 1;
            }
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, view: &RenderView) -> ChartResult<()> {
        self.draw(view)
    }
}

impl SnapshotSurface for CairoRenderer {
    fn capture_png(&mut self, view: &RenderView) -> ChartResult<Vec<u8>> {
        self.draw(view)?;
        self.surface.flush();
        let mut bytes = Vec::new();
        self.surface
            .write_to_png(&mut bytes)
            .map_err(|err| ChartError::InvalidData(format!("failed to encode png: {err}")))?;
        Ok(bytes)
    }
}

fn append_path(context: &Context, commands: &[PathCommand]) {
    context.new_path();
    for command in commands {
        match *command {
            PathCommand::MoveTo { x, y } => context.move_to(x, y),
            PathCommand::LineTo { x, y } => context.line_to(x, y),
            PathCommand::CurveTo {
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => context.curve_to(x1, y1, x2, y2, x, y),
            PathCommand::Close => context.close_path(),
        }
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::InvalidData(format!("{prefix}: {err}"))
}
