use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{
    CirclePrimitive, LinePrimitive, PolygonPrimitive, PolylinePrimitive, RectPrimitive,
    TextPrimitive,
};

/// Backend-agnostic scene for one chart draw pass.
///
/// Backends draw in field order: polygons, lines, polylines, circles, rects,
/// texts. That puts the area fill under the guides and the tooltip on top.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub polygons: Vec<PolygonPrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub polylines: Vec<PolylinePrimitive>,
    pub circles: Vec<CirclePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            polygons: Vec::new(),
            lines: Vec::new(),
            polylines: Vec::new(),
            circles: Vec::new(),
            rects: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.lines.push(line);
        self
    }

    #[must_use]
    pub fn with_polyline(mut self, polyline: PolylinePrimitive) -> Self {
        self.polylines.push(polyline);
        self
    }

    #[must_use]
    pub fn with_polygon(mut self, polygon: PolygonPrimitive) -> Self {
        self.polygons.push(polygon);
        self
    }

    #[must_use]
    pub fn with_circle(mut self, circle: CirclePrimitive) -> Self {
        self.circles.push(circle);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    #[must_use]
    pub fn with_rect(mut self, rect: RectPrimitive) -> Self {
        self.rects.push(rect);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for polygon in &self.polygons {
            polygon.validate()?;
        }
        for line in &self.lines {
            line.validate()?;
        }
        for polyline in &self.polylines {
            polyline.validate()?;
        }
        for circle in &self.circles {
            circle.validate()?;
        }
        for rect in &self.rects {
            rect.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
            && self.lines.is_empty()
            && self.polylines.is_empty()
            && self.circles.is_empty()
            && self.rects.is_empty()
            && self.texts.is_empty()
    }
}
