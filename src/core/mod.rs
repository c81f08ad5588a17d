pub mod area_series;
pub mod line_series;
pub mod normalize;
pub mod primitives;
pub mod scale;
pub mod scale_mapping;
pub mod scene;
pub mod types;

pub use area_series::{AreaGeometry, project_area_geometry};
pub use line_series::{LinePath, PathVertex, project_line_path, project_vertices};
pub use normalize::{CANONICAL_UNIT_SCALE, NormalizedSeries, normalize_samples};
pub use scale::{DegenerateFallback, LinearScale};
pub use scale_mapping::{ScaleMapping, plotted_width};
pub use scene::{
    GuideLine, Marker, SceneOptions, ScenePrimitives, build_scene, build_scene_from_series,
};
pub use types::{Margins, NormalizedPoint, Sample, ValueRange, Viewport};
