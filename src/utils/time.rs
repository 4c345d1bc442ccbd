//! Time and timestamp utilities

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

/// Format of timestamps in the stored record format: `YYYYMMDDHHMMSS`, UTC.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// Get current Unix timestamp in seconds
pub fn current_timestamp() -> i64 {
    Utc::now().timestamp()
}

/// Error returned when a stored timestamp string cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTimestampError {
    input: String,
}

impl ParseTimestampError {
    pub(crate) fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }
}

impl std::fmt::Display for ParseTimestampError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid timestamp {:?}, expected 14 digits (YYYYMMDDHHMMSS)",
            self.input
        )
    }
}

impl std::error::Error for ParseTimestampError {}

/// Parse a 14-digit `YYYYMMDDHHMMSS` string into Unix seconds (UTC)
///
/// The fields are sliced at fixed offsets rather than handed to a format
/// parser, so a run of digits can never be consumed by the wrong field.
pub fn parse_timestamp(s: &str) -> Result<i64, ParseTimestampError> {
    if s.len() != 14 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseTimestampError::new(s));
    }

    let err = || ParseTimestampError::new(s);

    let year: i32 = s[0..4].parse().map_err(|_| err())?;
    let month: u32 = s[4..6].parse().map_err(|_| err())?;
    let day: u32 = s[6..8].parse().map_err(|_| err())?;
    let hour: u32 = s[8..10].parse().map_err(|_| err())?;
    let minute: u32 = s[10..12].parse().map_err(|_| err())?;
    let second: u32 = s[12..14].parse().map_err(|_| err())?;

    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(err)?;
    let time = NaiveTime::from_hms_opt(hour, minute, second).ok_or_else(err)?;

    Ok(NaiveDateTime::new(date, time).and_utc().timestamp())
}

/// Format Unix seconds as the 14-digit `YYYYMMDDHHMMSS` string (UTC)
///
/// Returns `None` for instants outside the representable calendar range.
pub fn format_timestamp(secs: i64) -> Option<String> {
    DateTime::<Utc>::from_timestamp(secs, 0).map(|dt| dt.format(TIMESTAMP_FORMAT).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trip() {
        let formatted = format_timestamp(0).unwrap();
        assert_eq!(formatted, "19700101000000");
        assert_eq!(parse_timestamp(&formatted).unwrap(), 0);

        let secs = parse_timestamp("20240215123456").unwrap();
        assert_eq!(format_timestamp(secs).unwrap(), "20240215123456");
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(parse_timestamp("").is_err());
        assert!(parse_timestamp("2024").is_err());
        assert!(parse_timestamp("2024021512345x").is_err());
        assert!(parse_timestamp("202402151234567").is_err());
        assert!(parse_timestamp("20241315123456").is_err());
    }

    #[test]
    fn test_small_unix_values_format() {
        // Instants shortly after the epoch still render as full-width strings
        assert_eq!(format_timestamp(1337).unwrap(), "19700101002217");
        assert_eq!(parse_timestamp("19700101002217").unwrap(), 1337);
    }
}
