//! Parsing of article "seen" timestamps.

use chrono::NaiveDateTime;

/// Formats tried in order; the first one that parses wins.
const SEEN_DATE_FORMATS: [&str; 3] = ["%Y%m%dT%H%M%S", "%Y-%m-%dT%H:%M:%S", "%Y%m%d%H%M%S"];

/// Parse a seen timestamp such as `20260214T120000Z` into a naive UTC datetime.
///
/// Zone designators (`Z`/`z`) are stripped before matching. Returns `None` for
/// empty or unrecognized input; callers treat that as "no timestamp".
pub fn parse_seen_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let cleaned: String = raw.chars().filter(|c| !matches!(c, 'Z' | 'z')).collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return None;
    }

    SEEN_DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(cleaned, format).ok())
}

/// Parse an optional timestamp field, treating absence like an unparseable value.
pub fn parse_optional(raw: Option<&str>) -> Option<NaiveDateTime> {
    raw.and_then(parse_seen_timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_accepted_formats() {
        let expected = at(2026, 2, 14, 12, 0, 0);
        assert_eq!(parse_seen_timestamp("20260214T120000Z"), Some(expected));
        assert_eq!(parse_seen_timestamp("20260214T120000"), Some(expected));
        assert_eq!(parse_seen_timestamp("2026-02-14T12:00:00"), Some(expected));
        assert_eq!(parse_seen_timestamp("20260214120000"), Some(expected));
        assert_eq!(parse_seen_timestamp(" 20260214T120000z "), Some(expected));
    }

    #[test]
    fn test_unparseable_values() {
        assert_eq!(parse_seen_timestamp(""), None);
        assert_eq!(parse_seen_timestamp("yesterday"), None);
        assert_eq!(parse_seen_timestamp("2026-02-14"), None);
        assert_eq!(parse_seen_timestamp("20261314T120000Z"), None);
        assert_eq!(parse_optional(None), None);
    }
}
