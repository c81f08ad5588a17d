use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::normalize::CANONICAL_UNIT_SCALE;
use crate::core::primitives::{datetime_to_unix_seconds, decimal_to_f64, parse_timestamp};
use crate::error::{ChartError, ChartResult};

/// Measured pixel size of the chart's mount point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// A viewport with a zero dimension has not been laid out yet.
    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Plot insets in pixels.
///
/// `top` doubles as the upper end of the value axis: the largest value is
/// drawn at `y = top` so markers stay below the plot edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 20.0,
            right: 0.0,
            bottom: 0.0,
            left: 0.0,
        }
    }
}

impl Margins {
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            top: 0.0,
            right: 0.0,
            bottom: 0.0,
            left: 0.0,
        }
    }

    pub fn validate(self) -> ChartResult<Self> {
        for (side, value) in [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "margin `{side}` must be finite and >= 0"
                )));
            }
        }
        Ok(self)
    }
}

/// One input observation of the series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sample {
    time: DateTime<Utc>,
    value: f64,
}

impl Sample {
    pub fn new(time: DateTime<Utc>, value: f64) -> ChartResult<Self> {
        if !value.is_finite() || !(value * CANONICAL_UNIT_SCALE).is_finite() {
            return Err(ChartError::InvalidData(
                "sample value must be finite in canonical units".to_owned(),
            ));
        }
        Ok(Self { time, value })
    }

    /// Parses `time` as RFC 3339 or `YYYY-MM-DD HH:MM:SS` (UTC).
    pub fn parse(time: &str, value: f64) -> ChartResult<Self> {
        Self::new(parse_timestamp(time)?, value)
    }

    pub fn from_decimal(time: DateTime<Utc>, value: Decimal) -> ChartResult<Self> {
        Self::new(time, decimal_to_f64(value, "value")?)
    }

    #[must_use]
    pub fn time(self) -> DateTime<Utc> {
        self.time
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.value
    }
}

/// Sample tagged with its position in the input sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedPoint {
    pub index: usize,
    pub value: f64,
    pub time: DateTime<Utc>,
}

impl NormalizedPoint {
    #[must_use]
    pub fn unix_seconds(self) -> f64 {
        datetime_to_unix_seconds(self.time)
    }
}

/// Inclusive value extent of a non-empty series. `min <= max` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.min == self.max
    }
}
