//! Human-readable orbit date ranges.

use chrono::{Datelike, NaiveDateTime};
use thiserror::Error;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

#[derive(Debug, Error)]
#[error("Invalid orbit timestamp '{value}': {source}")]
pub struct DateError {
    value: String,
    #[source]
    source: chrono::ParseError,
}

/// Formats two timestamps as `Mon D–D`, or `Mon D–Mon D` when the months differ.
pub fn format_date_range(start: &str, finish: &str) -> Result<String, DateError> {
    let start = parse(start)?;
    let finish = parse(finish)?;

    let start_month = start.format("%b").to_string();
    let finish_month = finish.format("%b").to_string();

    let finish_part = if finish_month != start_month {
        format!("{} {}", finish_month, finish.day())
    } else {
        finish.day().to_string()
    };

    Ok(format!("{} {}–{}", start_month, start.day(), finish_part))
}

fn parse(value: &str) -> Result<NaiveDateTime, DateError> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).map_err(|source| DateError {
        value: value.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_month() {
        let range = format_date_range("2005-01-01T00:00:00.0", "2005-01-02T00:00:00.0").unwrap();
        assert_eq!(range, "Jan 1–2");
    }

    #[test]
    fn test_different_months() {
        let range =
            format_date_range("2004-06-28T12:30:00.000", "2004-07-03T01:00:00.000").unwrap();
        assert_eq!(range, "Jun 28–Jul 3");
    }

    #[test]
    fn test_same_month_name_different_year_collapses() {
        let range = format_date_range("2004-12-30T00:00:00.0", "2005-12-31T00:00:00.0").unwrap();
        assert_eq!(range, "Dec 30–31");
    }

    #[test]
    fn test_invalid_timestamp() {
        let err = format_date_range("yesterday", "2005-01-02T00:00:00.0").unwrap_err();
        assert!(err.to_string().contains("yesterday"));
    }
}
