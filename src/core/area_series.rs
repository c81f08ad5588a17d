use serde::{Deserialize, Serialize};

use crate::core::{NormalizedPoint, PathVertex, ScaleMapping, Viewport, project_vertices};

/// Deterministic geometry for the filled area under the series line.
///
/// `line_points` follows the mapped data points.
/// `fill_polygon` is an explicitly closed polygon against the baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AreaGeometry {
    pub line_points: Vec<PathVertex>,
    pub fill_polygon: Vec<PathVertex>,
}

impl AreaGeometry {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            line_points: Vec::new(),
            fill_polygon: Vec::new(),
        }
    }

    /// Closes already-projected line vertices against `baseline_y`.
    #[must_use]
    pub fn from_line_points(line_points: Vec<PathVertex>, baseline_y: f64) -> Self {
        let (Some(first), Some(last)) = (line_points.first(), line_points.last()) else {
            return Self::empty();
        };
        let first_x = first.x;
        let last_x = last.x;

        let mut fill_polygon = Vec::with_capacity(line_points.len() + 3);
        fill_polygon.push(PathVertex {
            x: first_x,
            y: baseline_y,
        });
        fill_polygon.extend(line_points.iter().copied());
        fill_polygon.push(PathVertex {
            x: last_x,
            y: baseline_y,
        });
        // Repeat the first baseline vertex so consumers can render this as a
        // closed polygon without implicit closure rules.
        fill_polygon.push(PathVertex {
            x: first_x,
            y: baseline_y,
        });

        Self {
            line_points,
            fill_polygon,
        }
    }
}

/// Projects points into area geometry.
///
/// The baseline is the viewport bottom (`viewport.height`), independent of the
/// bottom margin.
#[must_use]
pub fn project_area_geometry(
    points: &[NormalizedPoint],
    mapping: ScaleMapping,
    viewport: Viewport,
) -> AreaGeometry {
    AreaGeometry::from_line_points(
        project_vertices(points, mapping),
        f64::from(viewport.height),
    )
}
