use cairo::{Context, Format, ImageSurface};
use std::f64::consts::TAU;

use crate::core::PathDescription;
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, CursorPrimitive, RenderFrame, Renderer};

const CURSOR_MARKER_RADIUS_PX: f64 = 4.0;
const CURSOR_LINE_WIDTH_PX: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub area_vertices: usize,
    pub line_vertices: usize,
    pub cursor_drawn: bool,
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()>;
}

/// Cairo renderer backend.
///
/// Supports offscreen image-surface rendering through `Renderer::render` and
/// in-place rendering on an external context through `CairoContextRenderer`.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidViewport {
                width: u32::try_from(width).unwrap_or(0),
                height: u32::try_from(height).unwrap_or(0),
            });
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::rgb(1.0, 1.0, 1.0),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.clear_color.validate()?;

        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut stats = CairoRenderStats::default();

        if append_path(context, &frame.area.path) {
            apply_color(context, frame.area.fill_color);
            context
                .fill()
                .map_err(|err| map_backend_error("failed to fill area", err))?;
            stats.area_vertices = frame.area.path.len();
        }

        if append_path(context, &frame.line.path) {
            apply_color(context, frame.line.stroke_color);
            context.set_line_width(frame.line.stroke_width);
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke line", err))?;
            stats.line_vertices = frame.line.path.len();
        }

        if let Some(cursor) = frame.cursor {
            draw_cursor(context, cursor)?;
            stats.cursor_drawn = true;
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()> {
        self.render_with_context(context, frame)
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

/// Appends `path` to the current cairo path. Returns `false` for empty paths.
fn append_path(context: &Context, path: &PathDescription) -> bool {
    let Some((first, rest)) = path.vertices().split_first() else {
        return false;
    };

    context.new_path();
    context.move_to(first.x, first.y);
    for vertex in rest {
        context.line_to(vertex.x, vertex.y);
    }
    if path.is_closed() {
        context.close_path();
    }
    true
}

fn draw_cursor(context: &Context, cursor: CursorPrimitive) -> ChartResult<()> {
    apply_color(context, cursor.color);
    context.set_line_width(CURSOR_LINE_WIDTH_PX);
    context.new_path();
    context.move_to(cursor.x, 0.0);
    context.line_to(cursor.x, cursor.height);
    context
        .stroke()
        .map_err(|err| map_backend_error("failed to stroke cursor guide", err))?;

    context.new_path();
    context.arc(cursor.x, cursor.y, CURSOR_MARKER_RADIUS_PX, 0.0, TAU);
    context
        .fill()
        .map_err(|err| map_backend_error("failed to fill cursor marker", err))
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::InvalidData(format!("{prefix}: {err}"))
}
