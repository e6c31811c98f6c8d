use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::error::{ChartError, ChartResult};

/// Parses a computed CSS length such as `"480px"` into pixels.
///
/// Only `px` lengths are accepted; computed widths from a rendered element are
/// always resolved to pixels, so `auto`, percentages or bare numbers mean the
/// element was never laid out.
pub fn parse_css_px(raw: &str) -> ChartResult<f64> {
    let unparseable = || ChartError::UnparseableWidth {
        raw: raw.to_owned(),
    };

    let number = raw.trim().strip_suffix("px").ok_or_else(unparseable)?;
    let number = number.trim_end();
    if number.is_empty() {
        return Err(unparseable());
    }
    number.parse::<f64>().map_err(|_| unparseable())
}

#[must_use]
pub fn datetime_to_unix_millis(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64
}

/// Parses an RFC 3339 datetime, a naive `YYYY-MM-DDTHH:MM:SS[.fff]` datetime
/// (taken as UTC) or a plain `YYYY-MM-DD` date into epoch milliseconds.
pub fn parse_date_to_unix_millis(raw: &str) -> ChartResult<f64> {
    let raw = raw.trim();
    if let Ok(time) = DateTime::parse_from_rfc3339(raw) {
        return Ok(datetime_to_unix_millis(time.with_timezone(&Utc)));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(datetime_to_unix_millis(naive.and_utc()));
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(datetime_to_unix_millis(midnight.and_utc()));
        }
    }
    Err(ChartError::InvalidData(format!(
        "`{raw}` is not an ISO-8601 date or datetime"
    )))
}
