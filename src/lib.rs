//! trend-chart: headless interactive time-series chart engine.
//!
//! Samples flow through a normalizer, a pair of linear scales and a scene
//! builder into backend-agnostic render frames. Pointer input drives a small
//! state machine that selects one sample for highlighting and tooltip display.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig};
pub use error::{ChartError, ChartResult};
