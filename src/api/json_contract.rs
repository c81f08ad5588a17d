use serde::{Deserialize, Serialize};

use crate::core::{Sample, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{PointerState, TooltipContent};
use crate::render::Renderer;

use super::{ChartEngine, ChartEngineConfig};

pub const ENGINE_CONFIG_JSON_SCHEMA_V1: u32 = 1;
pub const CHART_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: ChartEngineConfig,
}

/// Serializable view of the engine's observable state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub viewport: Viewport,
    pub ready: bool,
    pub item_count: usize,
    pub plotted_width: Option<f64>,
    pub pointer: PointerState,
    pub tooltip: Option<TooltipContent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: ChartSnapshot,
}

/// Wire form of one sample: `{ "time": "...", "value": n }`.
///
/// `createTime` / `currency` are accepted as field aliases.
#[derive(Debug, Clone, Deserialize)]
struct RawSample {
    #[serde(alias = "createTime")]
    time: String,
    #[serde(alias = "currency")]
    value: f64,
}

/// Parses a JSON array of samples, validating every timestamp and value.
pub fn samples_from_json_str(input: &str) -> ChartResult<Vec<Sample>> {
    let raw: Vec<RawSample> = serde_json::from_str(input)
        .map_err(|e| ChartError::InvalidData(format!("failed to parse samples json: {e}")))?;
    raw.into_iter()
        .map(|sample| Sample::parse(&sample.time, sample.value))
        .collect()
}

impl ChartEngineConfig {
    /// Bare config object, without the versioned envelope.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config json: {e}")))?;
        config.validate()
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ChartEngineConfigJsonContractV1 {
            schema_version: ENGINE_CONFIG_JSON_SCHEMA_V1,
            config: *self,
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize config contract v1: {e}"))
        })
    }

    /// Accepts either a bare config object or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config json: {e}")))?;

        // Every config field has a default, so the envelope has to be detected
        // explicitly or it would parse as an all-default bare config.
        let config = if value.get("schema_version").is_some() {
            let payload: ChartEngineConfigJsonContractV1 = serde_json::from_value(value)
                .map_err(|e| {
                    ChartError::InvalidData(format!("failed to parse config json payload: {e}"))
                })?;
            if payload.schema_version != ENGINE_CONFIG_JSON_SCHEMA_V1 {
                return Err(ChartError::InvalidData(format!(
                    "unsupported config schema version: {}",
                    payload.schema_version
                )));
            }
            payload.config
        } else {
            serde_json::from_value::<ChartEngineConfig>(value).map_err(|e| {
                ChartError::InvalidData(format!("failed to parse config json: {e}"))
            })?
        };
        config.validate()
    }
}

impl ChartSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ChartSnapshotJsonContractV1 {
            schema_version: CHART_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }
}

impl<R: Renderer> ChartEngine<R> {
    /// Replaces samples from a JSON array; see [`samples_from_json_str`].
    pub fn set_samples_from_json_str(&mut self, input: &str) -> ChartResult<bool> {
        let samples = samples_from_json_str(input)?;
        self.set_samples(samples)
    }

    #[must_use]
    pub fn snapshot(&self) -> ChartSnapshot {
        ChartSnapshot {
            viewport: self.viewport,
            ready: self.is_ready(),
            item_count: self.scene.as_ref().map_or(0, |scene| scene.item_count()),
            plotted_width: self.scene.as_ref().map(|scene| scene.plotted_width),
            pointer: self.pointer_state(),
            tooltip: self.tooltip(),
        }
    }
}
