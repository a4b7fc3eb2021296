//! Presentation metadata for feeds the homepage knows about.
//!
//! Each known feed identifier maps to a [`Presentation`]: the banner or logo
//! shown next to its posts, and optionally a rewrite applied to post links.
//! Feeds that are not in the table are passed through untouched.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::FeedItem;

pub const VITALIK_FEED: &str = "https://vitalik.eth.limo/feed.xml";
pub const SOLIDITY_FEED: &str = "https://soliditylang.org/feed.xml";
pub const ZERO_X_PARC_FEED: &str = "https://0xparc.org/blog/rss.xml";

static DEFAULT_POLICIES: Lazy<PolicyTable> = Lazy::new(|| {
    let mut table = PolicyTable::new();
    table.insert(
        VITALIK_FEED,
        Presentation::new("/images/vitalik-blog-banner.svg")
            .with_link_rewrite(LinkRewrite::new(".ca", ".eth.limo")),
    );
    table.insert(SOLIDITY_FEED, Presentation::new("/images/solidity-banner.png"));
    table.insert(ZERO_X_PARC_FEED, Presentation::new("/images/0xparc-logo.svg"));
    table
});

/// Replaces the first occurrence of `from` in a link with `to`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRewrite {
    pub from: String,
    pub to: String,
}

impl LinkRewrite {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn apply(&self, link: &str) -> String {
        link.replacen(&self.from, &self.to, 1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentation {
    pub image_asset: String,
    pub link_rewrite: Option<LinkRewrite>,
}

impl Presentation {
    pub fn new(image_asset: impl Into<String>) -> Self {
        Self {
            image_asset: image_asset.into(),
            link_rewrite: None,
        }
    }

    pub fn with_link_rewrite(mut self, rewrite: LinkRewrite) -> Self {
        self.link_rewrite = Some(rewrite);
        self
    }

    pub fn apply(&self, mut item: FeedItem) -> FeedItem {
        item.img_src = Some(self.image_asset.clone());
        if let Some(rewrite) = &self.link_rewrite {
            item.link = rewrite.apply(&item.link);
        }
        item
    }
}

/// Lookup table from feed identifier (`source_feed_url`) to presentation.
#[derive(Debug, Clone, Default)]
pub struct PolicyTable {
    policies: HashMap<String, Presentation>,
}

impl PolicyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The table of feeds shown on the homepage.
    pub fn defaults() -> &'static PolicyTable {
        &DEFAULT_POLICIES
    }

    pub fn insert(&mut self, feed_url: impl Into<String>, presentation: Presentation) {
        self.policies.insert(feed_url.into(), presentation);
    }

    pub fn get(&self, feed_url: &str) -> Option<&Presentation> {
        self.policies.get(feed_url)
    }

    /// Apply the matching presentation, or return the item unchanged
    pub fn annotate(&self, item: FeedItem) -> FeedItem {
        match self.get(&item.source_feed_url) {
            Some(presentation) => presentation.apply(item),
            None => item,
        }
    }

    pub fn len(&self) -> usize {
        self.policies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }
}
