use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// When marker dots are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkerVisibility {
    Hidden,
    /// Only the dot of the active sample (touch-style layouts).
    ActiveOnly,
    Always,
}

/// Colors and stroke metrics used when turning a scene into draw commands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartStyle {
    pub line_color: Color,
    pub line_width: f64,
    pub area_fill_top: Color,
    pub area_fill_bottom: Color,
    pub guide_active_color: Color,
    pub guide_active_width: f64,
    /// `None` leaves inactive guides undrawn.
    pub guide_inactive_color: Option<Color>,
    pub guide_inactive_width: f64,
    pub marker_radius: f64,
    pub marker_fill_color: Color,
    pub marker_ring_color: Color,
    pub marker_ring_width: f64,
    pub marker_visibility: MarkerVisibility,
    pub tooltip_background: Color,
    pub tooltip_border_color: Color,
    pub tooltip_border_width: f64,
    pub tooltip_corner_radius: f64,
    pub tooltip_value_color: Color,
    pub tooltip_value_font_size_px: f64,
    pub tooltip_time_color: Color,
    pub tooltip_time_font_size_px: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        let primary = Color::rgba8(8, 140, 255, 1.0);
        Self {
            line_color: Color::rgba8(52, 122, 219, 1.0),
            line_width: 1.0,
            area_fill_top: Color::rgba8(8, 140, 255, 0.54),
            area_fill_bottom: Color::rgba8(255, 255, 255, 0.0),
            guide_active_color: primary,
            guide_active_width: 2.0,
            guide_inactive_color: None,
            guide_inactive_width: 1.0,
            marker_radius: 4.0,
            marker_fill_color: primary,
            marker_ring_color: Color::rgba8(8, 140, 255, 0.3),
            marker_ring_width: 12.0,
            marker_visibility: MarkerVisibility::ActiveOnly,
            tooltip_background: Color::rgb(1.0, 1.0, 1.0),
            tooltip_border_color: Color::rgba8(224, 224, 224, 1.0),
            tooltip_border_width: 1.0,
            tooltip_corner_radius: 9.0,
            tooltip_value_color: Color::rgba8(33, 33, 33, 1.0),
            tooltip_value_font_size_px: 16.0,
            tooltip_time_color: Color::rgba8(128, 128, 128, 1.0),
            tooltip_time_font_size_px: 12.0,
        }
    }
}

impl ChartStyle {
    pub fn validate(self) -> ChartResult<Self> {
        let mut colors = vec![
            self.line_color,
            self.area_fill_top,
            self.area_fill_bottom,
            self.guide_active_color,
            self.marker_fill_color,
            self.marker_ring_color,
            self.tooltip_background,
            self.tooltip_border_color,
            self.tooltip_value_color,
            self.tooltip_time_color,
        ];
        colors.extend(self.guide_inactive_color);
        for color in colors {
            color.validate()?;
        }

        for (name, value) in [
            ("line_width", self.line_width),
            ("guide_active_width", self.guide_active_width),
            ("guide_inactive_width", self.guide_inactive_width),
            ("marker_radius", self.marker_radius),
            ("tooltip_value_font_size_px", self.tooltip_value_font_size_px),
            ("tooltip_time_font_size_px", self.tooltip_time_font_size_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "style `{name}` must be finite and > 0"
                )));
            }
        }

        for (name, value) in [
            ("marker_ring_width", self.marker_ring_width),
            ("tooltip_border_width", self.tooltip_border_width),
            ("tooltip_corner_radius", self.tooltip_corner_radius),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "style `{name}` must be finite and >= 0"
                )));
            }
        }

        Ok(self)
    }
}
