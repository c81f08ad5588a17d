use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content so tests can catch invalid geometry before
/// a real backend is involved.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_line_count: usize,
    pub last_polyline_count: usize,
    pub last_polygon_count: usize,
    pub last_circle_count: usize,
    pub last_text_count: usize,
    pub last_frame: Option<RenderFrame>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_line_count = frame.lines.len();
        self.last_polyline_count = frame.polylines.len();
        self.last_polygon_count = frame.polygons.len();
        self.last_circle_count = frame.circles.len();
        self.last_text_count = frame.texts.len();
        self.last_frame = Some(frame.clone());
        Ok(())
    }
}
