use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

pub struct TimeUtils;

impl TimeUtils {
    pub const STANDARD_TIME_FORMAT: &'static str = "%Y-%m-%d %H:%M UTC";
    pub const AXIS_TIME_FORMAT: &'static str = "%H:%M";
    /// Naive layouts seen in space-weather JSON feeds, read as UTC.
    const NAIVE_FORMATS: &'static [&'static str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"];
}

/// Parse a feed timestamp. RFC 3339 first, then the naive layouts (assumed UTC).
pub fn parse_utc_timestamp(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    TimeUtils::NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .map(|naive| Utc.from_utc_datetime(&naive))
}

pub fn format_utc(dt: &DateTime<Utc>) -> String {
    dt.format(TimeUtils::STANDARD_TIME_FORMAT).to_string()
}

/// Used for plot axes, which carry epoch seconds as f64.
pub fn epoch_sec_to_axis_label(epoch_sec: f64) -> String {
    match DateTime::from_timestamp(epoch_sec.round() as i64, 0) {
        Some(dt) => dt.format(TimeUtils::AXIS_TIME_FORMAT).to_string(),
        None => String::new(),
    }
}

pub fn how_many_seconds_ago(past: &DateTime<Utc>) -> i64 {
    (Utc::now() - *past).num_seconds()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rfc3339_and_naive_layouts() {
        let expected = Utc.with_ymd_and_hms(2024, 6, 1, 0, 5, 0).unwrap();
        assert_eq!(parse_utc_timestamp("2024-06-01T00:05:00Z"), Some(expected));
        assert_eq!(parse_utc_timestamp("2024-06-01T02:05:00+02:00"), Some(expected));
        assert_eq!(parse_utc_timestamp("2024-06-01T00:05:00"), Some(expected));
        assert_eq!(parse_utc_timestamp("2024-06-01 00:05:00"), Some(expected));
        assert_eq!(parse_utc_timestamp("yesterday"), None);
    }

    #[test]
    fn axis_label_is_hours_and_minutes() {
        let dt = Utc.with_ymd_and_hms(2024, 6, 1, 13, 45, 0).unwrap();
        assert_eq!(epoch_sec_to_axis_label(dt.timestamp() as f64), "13:45");
    }
}
