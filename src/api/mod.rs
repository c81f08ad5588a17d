mod chart_style;
mod engine;
mod engine_config;
mod json_contract;
mod pointer_controller;
mod reactor;
mod render_frame_builder;

pub use chart_style::{ChartStyle, MarkerVisibility};
pub use engine::ChartEngine;
pub use engine_config::{ChartEngineConfig, ReactorDependencies};
pub use json_contract::{
    CHART_SNAPSHOT_JSON_SCHEMA_V1, ChartEngineConfigJsonContractV1, ChartSnapshot,
    ChartSnapshotJsonContractV1, ENGINE_CONFIG_JSON_SCHEMA_V1, samples_from_json_str,
};
