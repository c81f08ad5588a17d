use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::{NormalizedPoint, Sample, ValueRange};

/// Fixed factor values pass through on their way into the series.
///
/// Multiplying and dividing back is a no-op in exact arithmetic, but the f64
/// results keep the rounding of the scaled intermediate representation.
pub const CANONICAL_UNIT_SCALE: f64 = 1000.0;

/// Positional, immutable snapshot of the input samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedSeries {
    pub points: Vec<NormalizedPoint>,
    /// `None` iff `points` is empty.
    pub range: Option<ValueRange>,
}

impl NormalizedSeries {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            points: Vec::new(),
            range: None,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Earliest and latest sample time in unix seconds.
    #[must_use]
    pub fn time_extent(&self) -> Option<(f64, f64)> {
        let mut iter = self.points.iter().map(|point| point.unix_seconds());
        let first = iter.next()?;
        Some(iter.fold((first, first), |(min, max), t| (min.min(t), max.max(t))))
    }
}

/// Converts samples into index-tagged points and computes the value range.
///
/// Every sample yields exactly one point, in input order, with
/// `points[k].index == k`. Duplicate timestamps are kept positionally.
#[must_use]
pub fn normalize_samples(samples: &[Sample]) -> NormalizedSeries {
    if samples.is_empty() {
        return NormalizedSeries::empty();
    }

    let scaled: Vec<f64> = samples
        .iter()
        .map(|sample| sample.value() * CANONICAL_UNIT_SCALE)
        .collect();

    let range = match (
        scaled.iter().copied().map(OrderedFloat).min(),
        scaled.iter().copied().map(OrderedFloat).max(),
    ) {
        (Some(min), Some(max)) => Some(ValueRange {
            min: min.0 / CANONICAL_UNIT_SCALE,
            max: max.0 / CANONICAL_UNIT_SCALE,
        }),
        _ => None,
    };

    let points = samples
        .iter()
        .zip(&scaled)
        .enumerate()
        .map(|(index, (sample, value))| NormalizedPoint {
            index,
            value: value / CANONICAL_UNIT_SCALE,
            time: sample.time(),
        })
        .collect();

    NormalizedSeries { points, range }
}
