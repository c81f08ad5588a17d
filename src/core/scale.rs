use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// What a scale returns when its domain collapses to a single value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DegenerateFallback {
    /// Map everything to the first end of the output range.
    RangeStart,
    /// Map everything to the middle of the output range.
    RangeMidpoint,
}

/// Linear map from a data domain onto a pixel range.
///
/// The range may be inverted (`range_start > range_end`), which is how the
/// value axis puts larger values higher on screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
    fallback: DegenerateFallback,
}

impl LinearScale {
    pub fn new(
        domain: (f64, f64),
        range: (f64, f64),
        fallback: DegenerateFallback,
    ) -> ChartResult<Self> {
        if !domain.0.is_finite() || !domain.1.is_finite() {
            return Err(ChartError::InvalidData(
                "scale domain must be finite".to_owned(),
            ));
        }
        if !range.0.is_finite() || !range.1.is_finite() {
            return Err(ChartError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start: domain.0,
            domain_end: domain.1,
            range_start: range.0,
            range_end: range.1,
            fallback,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.domain_start == self.domain_end
    }

    /// Maps a domain value to pixels. Values outside the domain extrapolate.
    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        if self.is_degenerate() {
            return match self.fallback {
                DegenerateFallback::RangeStart => self.range_start,
                DegenerateFallback::RangeMidpoint => (self.range_start + self.range_end) / 2.0,
            };
        }

        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    /// Inverse of [`LinearScale::map`]; `None` for a degenerate domain or range.
    #[must_use]
    pub fn invert(self, pixel: f64) -> Option<f64> {
        let span = self.range_end - self.range_start;
        if self.is_degenerate() || span == 0.0 || !pixel.is_finite() {
            return None;
        }
        let normalized = (pixel - self.range_start) / span;
        Some(self.domain_start + normalized * (self.domain_end - self.domain_start))
    }
}

#[cfg(test)]
mod tests {
    use super::{DegenerateFallback, LinearScale};

    #[test]
    fn inverted_range_maps_larger_values_to_smaller_pixels() {
        let scale = LinearScale::new((0.0, 10.0), (100.0, 20.0), DegenerateFallback::RangeStart)
            .expect("scale");
        assert_eq!(scale.map(0.0), 100.0);
        assert_eq!(scale.map(10.0), 20.0);
        assert!(scale.map(7.0) < scale.map(3.0));
    }

    #[test]
    fn degenerate_domain_uses_configured_fallback() {
        let start = LinearScale::new((5.0, 5.0), (10.0, 90.0), DegenerateFallback::RangeStart)
            .expect("scale");
        let mid = LinearScale::new((5.0, 5.0), (10.0, 90.0), DegenerateFallback::RangeMidpoint)
            .expect("scale");

        assert_eq!(start.map(5.0), 10.0);
        assert_eq!(start.map(123.0), 10.0);
        assert_eq!(mid.map(5.0), 50.0);
        assert!(mid.invert(50.0).is_none());
    }

    #[test]
    fn invert_round_trips_inside_domain() {
        let scale = LinearScale::new((1_000.0, 2_000.0), (0.0, 800.0), DegenerateFallback::RangeStart)
            .expect("scale");
        let px = scale.map(1_250.0);
        let back = scale.invert(px).expect("invertible");
        assert!((back - 1_250.0).abs() <= 1e-9);
    }

    #[test]
    fn non_finite_bounds_are_rejected() {
        assert!(LinearScale::new((f64::NAN, 1.0), (0.0, 1.0), DegenerateFallback::RangeStart).is_err());
        assert!(
            LinearScale::new((0.0, 1.0), (0.0, f64::INFINITY), DegenerateFallback::RangeStart)
                .is_err()
        );
    }
}
