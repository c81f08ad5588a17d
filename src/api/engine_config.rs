use std::time::Duration;

use chrono::FixedOffset;
use serde::{Deserialize, Serialize};

use crate::core::{Margins, SceneOptions, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::interaction::TooltipSize;

use super::ChartStyle;

/// Extra inputs, beyond data and width, that trigger a scene recompute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ReactorDependencies {
    /// Recompute on height-only viewport changes.
    #[serde(default)]
    pub height: bool,
}

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    /// Initial container size. A zero dimension defers the first computation.
    #[serde(default)]
    pub viewport: Viewport,
    #[serde(default)]
    pub margins: Margins,
    #[serde(default)]
    pub tooltip_size: TooltipSize,
    /// Vertical position of the tooltip's top edge, in container pixels.
    #[serde(default)]
    pub tooltip_top: f64,
    #[serde(default = "default_throttle_window_ms")]
    pub throttle_window_ms: u64,
    #[serde(default)]
    pub reactor_dependencies: ReactorDependencies,
    /// Offset applied to tooltip time labels.
    #[serde(default)]
    pub tooltip_utc_offset_minutes: i32,
    #[serde(default)]
    pub style: ChartStyle,
}

impl Default for ChartEngineConfig {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

impl ChartEngineConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            margins: Margins::default(),
            tooltip_size: TooltipSize::default(),
            tooltip_top: 0.0,
            throttle_window_ms: default_throttle_window_ms(),
            reactor_dependencies: ReactorDependencies::default(),
            tooltip_utc_offset_minutes: 0,
            style: ChartStyle::default(),
        }
    }

    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_tooltip_size(mut self, width: f64, height: f64) -> Self {
        self.tooltip_size = TooltipSize { width, height };
        self
    }

    #[must_use]
    pub fn with_tooltip_top(mut self, tooltip_top: f64) -> Self {
        self.tooltip_top = tooltip_top;
        self
    }

    #[must_use]
    pub fn with_throttle_window_ms(mut self, window_ms: u64) -> Self {
        self.throttle_window_ms = window_ms;
        self
    }

    #[must_use]
    pub fn with_reactor_dependencies(mut self, dependencies: ReactorDependencies) -> Self {
        self.reactor_dependencies = dependencies;
        self
    }

    #[must_use]
    pub fn with_tooltip_utc_offset_minutes(mut self, minutes: i32) -> Self {
        self.tooltip_utc_offset_minutes = minutes;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        self.margins.validate()?;
        self.tooltip_size.validate()?;
        self.style.validate()?;
        if !self.tooltip_top.is_finite() {
            return Err(ChartError::InvalidData(
                "tooltip top must be finite".to_owned(),
            ));
        }
        self.tooltip_utc_offset()?;
        Ok(self)
    }

    #[must_use]
    pub fn throttle_window(self) -> Duration {
        Duration::from_millis(self.throttle_window_ms)
    }

    pub fn tooltip_utc_offset(self) -> ChartResult<FixedOffset> {
        self.tooltip_utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| {
                ChartError::InvalidData(format!(
                    "tooltip utc offset out of range: {} minutes",
                    self.tooltip_utc_offset_minutes
                ))
            })
    }

    #[must_use]
    pub fn scene_options(self) -> SceneOptions {
        SceneOptions {
            margins: self.margins,
            marker_radius: self.style.marker_radius,
        }
    }
}

fn default_throttle_window_ms() -> u64 {
    5
}
