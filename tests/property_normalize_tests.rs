use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use trend_chart::core::{CANONICAL_UNIT_SCALE, Sample, normalize_samples};

proptest! {
    #[test]
    fn normalizer_keeps_order_indices_and_value_extremes(
        entries in proptest::collection::vec((0i64..10_000, -1.0e6f64..1.0e6), 1..128),
    ) {
        let samples: Vec<Sample> = entries
            .iter()
            .map(|&(offset, value)| {
                let time = Utc
                    .timestamp_opt(1_640_995_200 + offset, 0)
                    .single()
                    .expect("valid timestamp");
                Sample::new(time, value).expect("finite sample")
            })
            .collect();

        let series = normalize_samples(&samples);
        prop_assert_eq!(series.len(), samples.len());
        for (k, (point, sample)) in series.points.iter().zip(&samples).enumerate() {
            prop_assert_eq!(point.index, k);
            prop_assert_eq!(point.time, sample.time());
        }

        let canonical = |v: f64| v * CANONICAL_UNIT_SCALE / CANONICAL_UNIT_SCALE;
        let min = entries.iter().map(|&(_, v)| canonical(v)).fold(f64::INFINITY, f64::min);
        let max = entries.iter().map(|&(_, v)| canonical(v)).fold(f64::NEG_INFINITY, f64::max);
        let range = series.range.expect("non-empty range");
        prop_assert_eq!(range.min, min);
        prop_assert_eq!(range.max, max);
        prop_assert!(range.min <= range.max);

        let raw_min = entries.iter().map(|&(_, v)| v).fold(f64::INFINITY, f64::min);
        let raw_max = entries.iter().map(|&(_, v)| v).fold(f64::NEG_INFINITY, f64::max);
        prop_assert!((range.min - raw_min).abs() <= raw_min.abs() * 1e-12);
        prop_assert!((range.max - raw_max).abs() <= raw_max.abs() * 1e-12);
    }
}
