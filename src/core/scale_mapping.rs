use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::primitives::datetime_to_unix_seconds;
use crate::core::{DegenerateFallback, LinearScale, Margins, NormalizedSeries, Viewport};
use crate::error::{ChartError, ChartResult};

/// Time→x and value→y scales for one series snapshot and viewport.
///
/// - time: `[min time, max time]` onto `[left, width - right]`; a single
///   distinct time maps to `left`.
/// - value: `[range.min, range.max]` onto `[height - bottom, top]`; a flat
///   series maps to the vertical midpoint of that span.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleMapping {
    time: LinearScale,
    value: LinearScale,
}

impl ScaleMapping {
    pub fn new(series: &NormalizedSeries, viewport: Viewport, margins: Margins) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        let margins = margins.validate()?;

        let (Some((time_min, time_max)), Some(range)) = (series.time_extent(), series.range)
        else {
            return Err(ChartError::InvalidData(
                "scale mapping cannot be built from an empty series".to_owned(),
            ));
        };

        let width = f64::from(viewport.width);
        let height = f64::from(viewport.height);

        let time = LinearScale::new(
            (time_min, time_max),
            (margins.left, width - margins.right),
            DegenerateFallback::RangeStart,
        )?;
        let value = LinearScale::new(
            (range.min, range.max),
            (height - margins.bottom, margins.top),
            DegenerateFallback::RangeMidpoint,
        )?;

        Ok(Self { time, value })
    }

    #[must_use]
    pub fn time_scale(self) -> LinearScale {
        self.time
    }

    #[must_use]
    pub fn value_scale(self) -> LinearScale {
        self.value
    }

    #[must_use]
    pub fn time_to_x(self, time: DateTime<Utc>) -> f64 {
        self.time.map(datetime_to_unix_seconds(time))
    }

    #[must_use]
    pub fn unix_seconds_to_x(self, seconds: f64) -> f64 {
        self.time.map(seconds)
    }

    #[must_use]
    pub fn value_to_y(self, value: f64) -> f64 {
        self.value.map(value)
    }
}

/// Horizontal extent used for hit-testing: width minus left/right margins.
#[must_use]
pub fn plotted_width(viewport: Viewport, margins: Margins) -> f64 {
    (f64::from(viewport.width) - margins.left - margins.right).max(0.0)
}
