use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{Margins, Sample};
use crate::error::{ChartError, ChartResult};

const TOOLTIP_TIME_PATTERN: &str = "%-m.%-d %H:%M";

/// Pixel size of the tooltip box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipSize {
    pub width: f64,
    pub height: f64,
}

impl Default for TooltipSize {
    fn default() -> Self {
        Self {
            width: 82.0,
            height: 58.0,
        }
    }
}

impl TooltipSize {
    pub fn validate(self) -> ChartResult<Self> {
        if !self.width.is_finite()
            || !self.height.is_finite()
            || self.width < 0.0
            || self.height < 0.0
        {
            return Err(ChartError::InvalidData(
                "tooltip size must be finite and >= 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Text shown for the active sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipContent {
    pub index: usize,
    pub value: f64,
    pub time: DateTime<Utc>,
    pub value_label: String,
    pub time_label: String,
}

impl TooltipContent {
    /// Labels use the sample as supplied, not its canonical-unit copy.
    #[must_use]
    pub fn for_sample(index: usize, sample: Sample, utc_offset: FixedOffset) -> Self {
        Self {
            index,
            value: sample.value(),
            time: sample.time(),
            value_label: format_value_label(sample.value()),
            time_label: format_time_label(sample.time(), utc_offset),
        }
    }
}

/// Shortest decimal that round-trips the value (`1`, `1.5`, `0.001`).
#[must_use]
pub fn format_value_label(value: f64) -> String {
    format!("{value}")
}

/// `M.D HH:mm` in the given offset, e.g. `1.9 07:05`.
#[must_use]
pub fn format_time_label(time: DateTime<Utc>, utc_offset: FixedOffset) -> String {
    time.with_timezone(&utc_offset)
        .format(TOOLTIP_TIME_PATTERN)
        .to_string()
}

/// Left edge of a tooltip centered on `mouse_x` (plot-relative).
///
/// Kept at or right of `margins.left`, and at or left of
/// `plotted_width - tooltip_width + margins.right`. When those limits cross
/// on a plot narrower than the tooltip, the left limit wins.
#[must_use]
pub fn tooltip_left(mouse_x: f64, margins: Margins, plotted_width: f64, tooltip_width: f64) -> f64 {
    let left_limit = margins.left;
    let right_limit = plotted_width - tooltip_width + margins.right;
    let centered = mouse_x + margins.left - tooltip_width / 2.0;

    if centered < left_limit {
        left_limit
    } else if centered > right_limit {
        right_limit
    } else {
        centered
    }
}
