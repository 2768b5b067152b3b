use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless usage.
///
/// It still validates frame content so tests catch invalid geometry before a
/// real backend sees it.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_area_vertex_count: usize,
    pub last_line_vertex_count: usize,
    pub last_cursor_visible: bool,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_area_vertex_count = frame.area.path.len();
        self.last_line_vertex_count = frame.line.path.len();
        self.last_cursor_visible = frame.cursor.is_some();
        Ok(())
    }
}
