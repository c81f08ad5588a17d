use serde::{Deserialize, Serialize};

use crate::core::PathVertex;
use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Builds a color from 8-bit channels and a 0..=1 alpha.
    #[must_use]
    pub fn rgba8(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        Self::rgba(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
            alpha,
        )
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

fn validate_stroke_width(stroke_width: f64, what: &str) -> ChartResult<()> {
    if !stroke_width.is_finite() || stroke_width <= 0.0 {
        return Err(ChartError::InvalidData(format!(
            "{what} stroke width must be finite and > 0"
        )));
    }
    Ok(())
}

fn validate_vertices(vertices: &[PathVertex], what: &str) -> ChartResult<()> {
    if vertices.iter().any(|v| !v.x.is_finite() || !v.y.is_finite()) {
        return Err(ChartError::InvalidData(format!(
            "{what} coordinates must be finite"
        )));
    }
    Ok(())
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(ChartError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        validate_stroke_width(self.stroke_width, "line")?;
        self.color.validate()
    }
}

/// Open stroked path through consecutive vertices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolylinePrimitive {
    pub vertices: Vec<PathVertex>,
    pub stroke_width: f64,
    pub color: Color,
}

impl PolylinePrimitive {
    pub fn validate(&self) -> ChartResult<()> {
        validate_vertices(&self.vertices, "polyline")?;
        validate_stroke_width(self.stroke_width, "polyline")?;
        self.color.validate()
    }
}

/// Closed filled region with a vertical gradient from `fill_top` to `fill_bottom`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolygonPrimitive {
    pub vertices: Vec<PathVertex>,
    pub fill_top: Color,
    pub fill_bottom: Color,
}

impl PolygonPrimitive {
    pub fn validate(&self) -> ChartResult<()> {
        validate_vertices(&self.vertices, "polygon")?;
        self.fill_top.validate()?;
        self.fill_bottom.validate()
    }

    /// Vertical extent `(top, bottom)` used to lay out the gradient.
    #[must_use]
    pub fn vertical_extent(&self) -> Option<(f64, f64)> {
        let first = self.vertices.first()?;
        Some(
            self.vertices
                .iter()
                .fold((first.y, first.y), |(top, bottom), v| {
                    (top.min(v.y), bottom.max(v.y))
                }),
        )
    }
}

/// Filled circle with an optional ring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CirclePrimitive {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub fill_color: Color,
    pub stroke_width: f64,
    pub stroke_color: Color,
}

impl CirclePrimitive {
    pub fn validate(self) -> ChartResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "circle center must be finite".to_owned(),
            ));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(ChartError::InvalidData(
                "circle radius must be finite and > 0".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width < 0.0 {
            return Err(ChartError::InvalidData(
                "circle stroke width must be finite and >= 0".to_owned(),
            ));
        }
        self.fill_color.validate()?;
        self.stroke_color.validate()
    }
}

/// Draw command for a filled rectangle with optional border and rounding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill_color: Color,
    pub border_width: f64,
    pub border_color: Color,
    pub corner_radius: f64,
}

impl RectPrimitive {
    pub fn validate(self) -> ChartResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "rect origin must be finite".to_owned(),
            ));
        }
        if !self.width.is_finite() || !self.height.is_finite() || self.width < 0.0 || self.height < 0.0
        {
            return Err(ChartError::InvalidData(
                "rect size must be finite and >= 0".to_owned(),
            ));
        }
        if !self.border_width.is_finite()
            || self.border_width < 0.0
            || !self.corner_radius.is_finite()
            || self.corner_radius < 0.0
        {
            return Err(ChartError::InvalidData(
                "rect border width and corner radius must be finite and >= 0".to_owned(),
            ));
        }
        self.fill_color.validate()?;
        self.border_color.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label in pixel space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}
