use crate::domain::{FeedItem, PolicyTable};

/// Annotate every item with the presentation registered for its feed.
///
/// Length and order are preserved; items from unknown feeds pass through.
pub fn post_process(items: Vec<FeedItem>, policies: &PolicyTable) -> Vec<FeedItem> {
    items.into_iter().map(|item| policies.annotate(item)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::policy::{SOLIDITY_FEED, VITALIK_FEED, ZERO_X_PARC_FEED};

    fn item(link: &str, source: &str) -> FeedItem {
        FeedItem::new("Post", link, "2024-01-01T00:00:00Z", source)
    }

    #[test]
    fn test_vitalik_link_rewritten_and_banner_set() {
        let items = vec![item("https://blog.example.ca/post/1", VITALIK_FEED)];
        let processed = post_process(items, PolicyTable::defaults());

        assert_eq!(processed[0].link, "https://blog.example.eth.limo/post/1");
        assert_eq!(
            processed[0].img_src.as_deref(),
            Some("/images/vitalik-blog-banner.svg")
        );
    }

    #[test]
    fn test_vitalik_link_without_suffix_unchanged() {
        let items = vec![item("https://vitalik.eth.limo/general/post.html", VITALIK_FEED)];
        let processed = post_process(items, PolicyTable::defaults());

        assert_eq!(processed[0].link, "https://vitalik.eth.limo/general/post.html");
        assert!(processed[0].img_src.is_some(), "banner is set even without a rewrite");
    }

    #[test]
    fn test_solidity_and_parc_keep_links() {
        let items = vec![
            item("https://soliditylang.org/blog/release.ca", SOLIDITY_FEED),
            item("https://0xparc.org/blog/zk.ca", ZERO_X_PARC_FEED),
        ];
        let processed = post_process(items, PolicyTable::defaults());

        assert_eq!(processed[0].link, "https://soliditylang.org/blog/release.ca");
        assert_eq!(processed[0].img_src.as_deref(), Some("/images/solidity-banner.png"));
        assert_eq!(processed[1].link, "https://0xparc.org/blog/zk.ca");
        assert_eq!(processed[1].img_src.as_deref(), Some("/images/0xparc-logo.svg"));
    }

    #[test]
    fn test_preserves_length_and_order() {
        let items = vec![
            item("https://a.example/1", "https://a.example/feed"),
            item("https://blog.example.ca/2", VITALIK_FEED),
            item("https://b.example/3", "https://b.example/feed"),
        ];
        let processed = post_process(items.clone(), PolicyTable::defaults());

        assert_eq!(processed.len(), 3);
        assert_eq!(processed[0], items[0]);
        assert_eq!(processed[1].title, items[1].title);
        assert_eq!(processed[2], items[2]);
    }

    #[test]
    fn test_unknown_feed_is_idempotent() {
        let items = vec![item("https://blog.example.ca/1", "https://unknown.example/feed")];
        let once = post_process(items.clone(), PolicyTable::defaults());
        let twice = post_process(once.clone(), PolicyTable::defaults());

        assert_eq!(once, items);
        assert_eq!(twice, once);
    }

    #[test]
    fn test_empty_input() {
        assert!(post_process(Vec::new(), PolicyTable::defaults()).is_empty());
    }
}
