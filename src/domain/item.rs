use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single syndicated post, normalized from any source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedItem {
    pub title: String,
    pub link: String,
    /// Raw publication date as reported by the source. Not guaranteed to parse.
    pub pub_date: String,
    pub source_feed_url: String,
    /// Only set by post-processing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img_src: Option<String>,
}

impl FeedItem {
    pub fn new(
        title: impl Into<String>,
        link: impl Into<String>,
        pub_date: impl Into<String>,
        source_feed_url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
            pub_date: pub_date.into(),
            source_feed_url: source_feed_url.into(),
            img_src: None,
        }
    }

    pub fn with_img_src(mut self, img_src: Option<String>) -> Self {
        self.img_src = img_src;
        self
    }

    pub fn parsed_pub_date(&self) -> Option<DateTime<Utc>> {
        parse_pub_date(&self.pub_date)
    }

    /// Format: "January 5, 2024", or the raw date string if it does not parse
    pub fn display_date(&self) -> String {
        match self.parsed_pub_date() {
            Some(dt) => dt.format("%B %-d, %Y").to_string(),
            None => self.pub_date.clone(),
        }
    }
}

/// Zoneless layouts, read as UTC. `%.f` also matches a missing fraction.
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%MZ",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const OFFSET_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f %z",
    "%Y-%m-%dT%H:%M%:z",
];

/// `%B` also accepts the abbreviated month name
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%B %d, %Y"];

/// Parse a publication date in any of the formats feeds commonly emit.
///
/// Accepts RFC 2822 (RSS), RFC 3339 (Atom, JSON APIs), the same with a space
/// instead of `T`, minute precision, and plain dates such as `2024-01-15` or
/// `January 15, 2024`. Values without a zone are read as UTC.
pub fn parse_pub_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    // Feeds sometimes carry a weekday that does not match the date
    if let Some(Ok(dt)) = strip_weekday(raw).map(DateTime::parse_from_rfc2822) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in OFFSET_DATETIME_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(raw, format) {
            return Some(dt.with_timezone(&Utc));
        }
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// `"Tue, 01 Jan 2024 ..."` becomes `"01 Jan 2024 ..."`
fn strip_weekday(raw: &str) -> Option<&str> {
    let (weekday, rest) = raw.split_once(',')?;
    if weekday.is_empty() || !weekday.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    Some(rest.trim_start())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_rfc2822() {
        let parsed = parse_pub_date("Thu, 28 Dec 2023 00:00:00 +0000").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2023, 12, 28, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_rfc3339_with_offset() {
        let parsed = parse_pub_date("2024-01-15T14:00:00+02:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_bare_date_is_utc_midnight() {
        let parsed = parse_pub_date("2024-03-01").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_naive_datetime() {
        let parsed = parse_pub_date("2024-03-01T09:30:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap());
    }

    #[test]
    fn test_parse_space_separated() {
        let parsed = parse_pub_date("2024-01-15 10:00:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap());

        let parsed = parse_pub_date("2024-01-15 10:00:00+02:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 1, 15, 8, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_fractional_seconds_without_zone() {
        let parsed = parse_pub_date("2024-01-15T10:00:00.000").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap());

        let parsed = parse_pub_date("2024-01-15 10:00:00.250").unwrap();
        assert_eq!(parsed.timestamp_subsec_millis(), 250);
    }

    #[test]
    fn test_parse_minute_precision() {
        let expected = Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap();
        assert_eq!(parse_pub_date("2024-01-15T10:00Z"), Some(expected));
        assert_eq!(parse_pub_date("2024-01-15T10:00"), Some(expected));
        assert_eq!(parse_pub_date("2024-01-15T12:00+02:00"), Some(expected));
    }

    #[test]
    fn test_parse_rfc2822_ignores_wrong_weekday() {
        // 1 January 2024 was a Monday
        let parsed = parse_pub_date("Tue, 01 Jan 2024 00:00:00 GMT").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_month_name_date() {
        let expected = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        assert_eq!(parse_pub_date("January 15, 2024"), Some(expected));
        assert_eq!(parse_pub_date("Jan 15, 2024"), Some(expected));
        assert_eq!(
            parse_pub_date("March 5, 2024"),
            Some(Utc.with_ymd_and_hms(2024, 3, 5, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_unparseable_dates() {
        assert!(parse_pub_date("").is_none());
        assert!(parse_pub_date("   ").is_none());
        assert!(parse_pub_date("not-a-real-date").is_none());
        assert!(parse_pub_date("2024-13-45").is_none());
        assert!(parse_pub_date("Someday, never").is_none());
        assert!(parse_pub_date("Smarch 15, 2024").is_none());
    }

    #[test]
    fn test_display_date() {
        let item = FeedItem::new("t", "l", "2024-01-05T10:00:00Z", "s");
        assert_eq!(item.display_date(), "January 5, 2024");

        let item = FeedItem::new("t", "l", "sometime", "s");
        assert_eq!(item.display_date(), "sometime");
    }

    #[test]
    fn test_json_shape_is_camel_case() {
        let item = FeedItem::new(
            "Title",
            "https://example.com/1",
            "2024-01-01",
            "https://example.com/feed.xml",
        );
        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["pubDate"], "2024-01-01");
        assert_eq!(json["sourceFeedUrl"], "https://example.com/feed.xml");
        assert!(json.get("imgSrc").is_none(), "imgSrc should be omitted when unset");

        let annotated = item.with_img_src(Some("/images/banner.png".to_string()));
        let json = serde_json::to_value(&annotated).unwrap();
        assert_eq!(json["imgSrc"], "/images/banner.png");
    }

    #[test]
    fn test_deserialize_without_img_src() {
        let json = r#"{"title":"A","link":"https://a","pubDate":"2024-01-01","sourceFeedUrl":"https://a/feed"}"#;
        let item: FeedItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.title, "A");
        assert!(item.img_src.is_none());
    }
}
