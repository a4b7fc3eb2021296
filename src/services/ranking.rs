//! Newest-first ordering of feed items by publication date.
//!
//! Dates come straight from the sources and may not parse. Such items are
//! reported by [`find_invalid_dates`] and keep their input index. Items with
//! parseable dates are reordered among the remaining positions, so they may
//! move past an undated item.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use tracing::warn;

use crate::domain::FeedItem;

/// Newest first. `Equal` when either date does not parse.
pub fn compare_pub_dates(a: &FeedItem, b: &FeedItem) -> Ordering {
    match (a.parsed_pub_date(), b.parsed_pub_date()) {
        (Some(date_a), Some(date_b)) => date_b.cmp(&date_a),
        _ => Ordering::Equal,
    }
}

/// Items whose publication date does not parse, in input order.
pub fn find_invalid_dates(items: &[FeedItem]) -> Vec<&FeedItem> {
    items
        .iter()
        .filter(|item| item.parsed_pub_date().is_none())
        .collect()
}

pub fn sort_by_pub_date(items: Vec<FeedItem>) -> Vec<FeedItem> {
    for item in find_invalid_dates(&items) {
        warn!(
            pub_date = %item.pub_date,
            title = %item.title,
            source = %item.source_feed_url,
            "Invalid date found"
        );
    }

    let mut slots: Vec<Option<FeedItem>> = Vec::with_capacity(items.len());
    let mut dated: Vec<(DateTime<Utc>, FeedItem)> = Vec::new();

    for item in items {
        match item.parsed_pub_date() {
            Some(date) => {
                dated.push((date, item));
                slots.push(None);
            }
            None => slots.push(Some(item)),
        }
    }

    // Stable, so equal timestamps keep input order
    dated.sort_by(|(a, _), (b, _)| b.cmp(a));

    let mut dated = dated.into_iter().map(|(_, item)| item);
    slots
        .into_iter()
        .filter_map(|slot| slot.or_else(|| dated.next()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str, pub_date: &str) -> FeedItem {
        FeedItem::new(
            title,
            format!("https://example.com/{}", title),
            pub_date,
            "https://example.com/feed",
        )
    }

    fn titles(items: &[FeedItem]) -> Vec<&str> {
        items.iter().map(|i| i.title.as_str()).collect()
    }

    #[test]
    fn test_compare_newest_first() {
        let old = item("old", "2023-01-01");
        let new = item("new", "2024-01-01");

        assert_eq!(compare_pub_dates(&new, &old), Ordering::Less);
        assert_eq!(compare_pub_dates(&old, &new), Ordering::Greater);
        assert_eq!(compare_pub_dates(&old, &old), Ordering::Equal);
    }

    #[test]
    fn test_compare_invalid_is_equal() {
        let valid = item("valid", "2024-01-01");
        let invalid = item("invalid", "yesterday-ish");

        assert_eq!(compare_pub_dates(&valid, &invalid), Ordering::Equal);
        assert_eq!(compare_pub_dates(&invalid, &valid), Ordering::Equal);
    }

    #[test]
    fn test_sorts_valid_dates_descending() {
        let items = vec![
            item("a", "Mon, 01 Jan 2024 00:00:00 +0000"),
            item("b", "2024-06-15T12:00:00Z"),
            item("c", "2023-03-10"),
            item("d", "2025-01-01T00:00:00+01:00"),
        ];
        let sorted = sort_by_pub_date(items);

        assert_eq!(titles(&sorted), vec!["d", "b", "a", "c"]);

        let dates: Vec<_> = sorted.iter().map(|i| i.parsed_pub_date().unwrap()).collect();
        assert!(dates.windows(2).all(|w| w[0] >= w[1]), "output must be non-increasing");
    }

    #[test]
    fn test_ties_keep_input_order() {
        let items = vec![
            item("first", "2024-01-01"),
            item("newer", "2024-02-01"),
            item("second", "2024-01-01"),
            item("third", "2024-01-01T00:00:00Z"),
        ];
        let sorted = sort_by_pub_date(items);

        assert_eq!(titles(&sorted), vec!["newer", "first", "second", "third"]);
    }

    #[test]
    fn test_invalid_dates_keep_position() {
        let items = vec![
            item("old", "2023-01-01"),
            item("broken", "not-a-date"),
            item("new", "2024-01-01"),
            item("empty", ""),
        ];
        let sorted = sort_by_pub_date(items);

        assert_eq!(titles(&sorted), vec!["new", "broken", "old", "empty"]);

        // Dated items still move across an undated one
        let position = |title: &str| sorted.iter().position(|i| i.title == title).unwrap();
        assert!(position("broken") < position("old"));
    }

    #[test]
    fn test_all_invalid_is_identity() {
        let items = vec![item("x", "?"), item("y", "??"), item("z", "???")];
        let sorted = sort_by_pub_date(items.clone());
        assert_eq!(sorted, items);
    }

    #[test]
    fn test_find_invalid_dates() {
        let items = vec![
            item("ok", "2024-01-01"),
            item("bad", "31/12/2023"),
            item("blank", ""),
        ];
        let invalid = find_invalid_dates(&items);

        assert_eq!(invalid.len(), 2);
        assert_eq!(invalid[0].title, "bad");
        assert_eq!(invalid[1].title, "blank");
    }

    #[test]
    fn test_empty_input() {
        assert!(sort_by_pub_date(Vec::new()).is_empty());
        assert!(find_invalid_dates(&[]).is_empty());
    }
}
