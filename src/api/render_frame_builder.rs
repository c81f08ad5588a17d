use crate::core::ScenePrimitives;
use crate::interaction::TooltipContent;
use crate::render::{
    CirclePrimitive, LinePrimitive, PolygonPrimitive, PolylinePrimitive, RectPrimitive,
    RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

use super::{ChartEngine, ChartStyle, MarkerVisibility};

const TOOLTIP_VALUE_BASELINE_RATIO: f64 = 0.18;
const TOOLTIP_TIME_BASELINE_RATIO: f64 = 0.55;

impl<R: Renderer> ChartEngine<R> {
    /// Materializes the current scene and pointer state into draw commands.
    ///
    /// Returns `None` while there is no scene (not measured yet, or torn down).
    #[must_use]
    pub fn build_render_frame(&self) -> Option<RenderFrame> {
        let scene = self.scene.as_ref()?;
        let style = self.config.style;
        let active = self.tracker.active_index();

        let mut frame = series_frame(scene, style);

        for guide in &scene.guides {
            let (color, width) = if active == Some(guide.index) {
                (style.guide_active_color, style.guide_active_width)
            } else if let Some(color) = style.guide_inactive_color {
                (color, style.guide_inactive_width)
            } else {
                continue;
            };
            frame = frame.with_line(LinePrimitive::new(
                guide.x,
                guide.y_top,
                guide.x,
                guide.y_bottom,
                width,
                color,
            ));
        }

        for marker in &scene.markers {
            let draw = match style.marker_visibility {
                MarkerVisibility::Hidden => false,
                MarkerVisibility::ActiveOnly => active == Some(marker.index),
                MarkerVisibility::Always => true,
            };
            if draw {
                frame = frame.with_circle(CirclePrimitive {
                    x: marker.x,
                    y: marker.y,
                    radius: marker.radius,
                    fill_color: style.marker_fill_color,
                    stroke_width: style.marker_ring_width,
                    stroke_color: style.marker_ring_color,
                });
            }
        }

        Some(match self.tooltip() {
            Some(tooltip) => self.with_tooltip_primitives(frame, &tooltip),
            None => frame,
        })
    }

    fn with_tooltip_primitives(&self, frame: RenderFrame, tooltip: &TooltipContent) -> RenderFrame {
        let style = self.config.style;
        let size = self.config.tooltip_size;
        let left = self.tracker.state().tooltip_left;
        let top = self.config.tooltip_top;
        let center_x = left + size.width / 2.0;

        frame
            .with_rect(RectPrimitive {
                x: left,
                y: top,
                width: size.width,
                height: size.height,
                fill_color: style.tooltip_background,
                border_width: style.tooltip_border_width,
                border_color: style.tooltip_border_color,
                corner_radius: style.tooltip_corner_radius,
            })
            .with_text(TextPrimitive::new(
                tooltip.value_label.clone(),
                center_x,
                top + size.height * TOOLTIP_VALUE_BASELINE_RATIO,
                style.tooltip_value_font_size_px,
                style.tooltip_value_color,
                TextHAlign::Center,
            ))
            .with_text(TextPrimitive::new(
                tooltip.time_label.clone(),
                center_x,
                top + size.height * TOOLTIP_TIME_BASELINE_RATIO,
                style.tooltip_time_font_size_px,
                style.tooltip_time_color,
                TextHAlign::Center,
            ))
    }
}

fn series_frame(scene: &ScenePrimitives, style: ChartStyle) -> RenderFrame {
    let mut frame = RenderFrame::new(scene.viewport);
    if !scene.area.fill_polygon.is_empty() {
        frame = frame.with_polygon(PolygonPrimitive {
            vertices: scene.area.fill_polygon.clone(),
            fill_top: style.area_fill_top,
            fill_bottom: style.area_fill_bottom,
        });
    }
    if !scene.line.is_empty() {
        frame = frame.with_polyline(PolylinePrimitive {
            vertices: scene.line.vertices.clone(),
            stroke_width: style.line_width,
            color: style.line_color,
        });
    }
    frame
}
