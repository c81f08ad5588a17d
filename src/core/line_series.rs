use serde::{Deserialize, Serialize};

use crate::core::{NormalizedPoint, ScaleMapping};

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

/// Vertex in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathVertex {
    pub x: f64,
    pub y: f64,
}

/// Open polyline through every mapped sample, in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LinePath {
    pub vertices: Vec<PathVertex>,
}

impl LinePath {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// Maps each point through `mapping`, one vertex per point.
#[must_use]
pub fn project_vertices(points: &[NormalizedPoint], mapping: ScaleMapping) -> Vec<PathVertex> {
    // Output order matches input order in both paths.
    #[cfg(feature = "parallel-projection")]
    {
        points
            .par_iter()
            .map(|point| project_single_point(*point, mapping))
            .collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        points
            .iter()
            .map(|point| project_single_point(*point, mapping))
            .collect()
    }
}

/// Projects points into the series line.
#[must_use]
pub fn project_line_path(points: &[NormalizedPoint], mapping: ScaleMapping) -> LinePath {
    LinePath {
        vertices: project_vertices(points, mapping),
    }
}

fn project_single_point(point: NormalizedPoint, mapping: ScaleMapping) -> PathVertex {
    PathVertex {
        x: mapping.time_to_x(point.time),
        y: mapping.value_to_y(point.value),
    }
}
