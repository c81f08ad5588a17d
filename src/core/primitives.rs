use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ChartError, ChartResult};

const NAIVE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

#[must_use]
pub fn datetime_to_unix_seconds(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64 / 1000.0
}

/// Parses RFC 3339 first, then the zone-less `YYYY-MM-DD HH:MM:SS` form as UTC.
pub fn parse_timestamp(input: &str) -> ChartResult<DateTime<Utc>> {
    let trimmed = input.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(parsed.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(trimmed, NAIVE_TIMESTAMP_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|err| ChartError::InvalidTimestamp {
            input: input.to_owned(),
            reason: err.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::parse_timestamp;
    use chrono::{TimeZone, Utc};

    #[test]
    fn parses_rfc3339_and_naive_forms_to_same_instant() {
        let rfc = parse_timestamp("2022-01-01T00:00:10Z").expect("rfc3339");
        let naive = parse_timestamp("2022-01-01 00:00:10").expect("naive");
        let expected = Utc
            .with_ymd_and_hms(2022, 1, 1, 0, 0, 10)
            .single()
            .expect("valid date");
        assert_eq!(rfc, expected);
        assert_eq!(naive, expected);
    }

    #[test]
    fn rfc3339_offset_is_converted_to_utc() {
        let parsed = parse_timestamp("2022-01-01T09:00:00+09:00").expect("offset");
        let expected = Utc
            .with_ymd_and_hms(2022, 1, 1, 0, 0, 0)
            .single()
            .expect("valid date");
        assert_eq!(parsed, expected);
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(parse_timestamp("yesterday").is_err());
        assert!(parse_timestamp("").is_err());
    }
}
