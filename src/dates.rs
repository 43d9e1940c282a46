//! Timestamp fields
//!
//! Models keep timestamps as the strings the service sent so an unusual
//! format never fails the whole body; callers parse on demand.

use chrono::{DateTime, FixedOffset};

/// Parse an optional RFC 3339 timestamp
pub fn parse_timestamp(value: &Option<String>) -> Result<Option<DateTime<FixedOffset>>, chrono::ParseError> {
    value.as_deref().map(DateTime::parse_from_rfc3339).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn timestamps_parse_lazily() {
        let parsed = parse_timestamp(&Some("2021-06-30T12:34:56Z".to_string()))
            .unwrap()
            .unwrap();
        assert_eq!(parsed.year(), 2021);
        assert_eq!(parsed.hour(), 12);

        assert!(parse_timestamp(&None).unwrap().is_none());
        assert!(parse_timestamp(&Some("yesterday".to_string())).is_err());
    }
}
