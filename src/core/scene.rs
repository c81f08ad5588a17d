use serde::{Deserialize, Serialize};

use crate::core::{
    AreaGeometry, LinePath, Margins, NormalizedPoint, NormalizedSeries, Sample, ScaleMapping,
    Viewport, normalize_samples, plotted_width, project_vertices,
};
use crate::error::{ChartError, ChartResult};

/// Vertical guide from a sample down to the viewport bottom.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GuideLine {
    pub index: usize,
    pub x: f64,
    pub y_top: f64,
    pub y_bottom: f64,
}

/// Dot drawn on a sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

/// Inputs to scene building that do not come from the data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneOptions {
    pub margins: Margins,
    pub marker_radius: f64,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            margins: Margins::default(),
            marker_radius: 4.0,
        }
    }
}

impl SceneOptions {
    fn validate(self) -> ChartResult<Self> {
        self.margins.validate()?;
        if !self.marker_radius.is_finite() || self.marker_radius <= 0.0 {
            return Err(ChartError::InvalidData(
                "marker radius must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Immutable geometry snapshot for one (data, viewport) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenePrimitives {
    pub viewport: Viewport,
    pub margins: Margins,
    pub plotted_width: f64,
    pub series: NormalizedSeries,
    /// `None` for an empty series.
    pub mapping: Option<ScaleMapping>,
    pub line: LinePath,
    pub area: AreaGeometry,
    pub guides: Vec<GuideLine>,
    pub markers: Vec<Marker>,
}

impl ScenePrimitives {
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.series.len()
    }

    /// True when the scene carries no drawable geometry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.line.is_empty() && self.guides.is_empty() && self.markers.is_empty()
    }

    #[must_use]
    pub fn point(&self, index: usize) -> Option<&NormalizedPoint> {
        self.series.points.get(index)
    }

    #[must_use]
    pub fn guide(&self, index: usize) -> Option<&GuideLine> {
        self.guides.get(index)
    }

    #[must_use]
    pub fn marker(&self, index: usize) -> Option<&Marker> {
        self.markers.get(index)
    }
}

/// Builds the full scene from raw samples.
///
/// Returns `Ok(None)` while the viewport has a zero dimension (container not
/// laid out yet). An empty sample slice yields an empty scene.
pub fn build_scene(
    samples: &[Sample],
    viewport: Viewport,
    options: SceneOptions,
) -> ChartResult<Option<ScenePrimitives>> {
    build_scene_from_series(normalize_samples(samples), viewport, options)
}

pub fn build_scene_from_series(
    series: NormalizedSeries,
    viewport: Viewport,
    options: SceneOptions,
) -> ChartResult<Option<ScenePrimitives>> {
    let options = options.validate()?;
    if !viewport.is_valid() {
        return Ok(None);
    }

    let plotted_width = plotted_width(viewport, options.margins);
    if series.is_empty() {
        return Ok(Some(ScenePrimitives {
            viewport,
            margins: options.margins,
            plotted_width,
            series,
            mapping: None,
            line: LinePath::default(),
            area: AreaGeometry::empty(),
            guides: Vec::new(),
            markers: Vec::new(),
        }));
    }

    let mapping = ScaleMapping::new(&series, viewport, options.margins)?;
    let vertices = project_vertices(&series.points, mapping);
    let baseline_y = f64::from(viewport.height);

    let guides = vertices
        .iter()
        .enumerate()
        .map(|(index, vertex)| GuideLine {
            index,
            x: vertex.x,
            y_top: vertex.y,
            y_bottom: baseline_y,
        })
        .collect();
    let markers = vertices
        .iter()
        .enumerate()
        .map(|(index, vertex)| Marker {
            index,
            x: vertex.x,
            y: vertex.y,
            radius: options.marker_radius,
        })
        .collect();

    let line = LinePath {
        vertices: vertices.clone(),
    };
    let area = AreaGeometry::from_line_points(vertices, baseline_y);

    Ok(Some(ScenePrimitives {
        viewport,
        margins: options.margins,
        plotted_width,
        series,
        mapping: Some(mapping),
        line,
        area,
        guides,
        markers,
    }))
}
