use std::collections::HashSet;

use opml::{Outline, OPML};

use crate::domain::Feed;
use crate::errors::{FeedError, FeedResult};

pub struct OpmlService;

impl OpmlService {
    /// Import feeds from OPML content. Duplicate URLs keep their first entry.
    pub fn import_feeds(content: &str) -> FeedResult<Vec<Feed>> {
        let opml = OPML::from_str(content).map_err(|e| FeedError::OpmlParse(e.to_string()))?;

        let mut seen = HashSet::new();
        let feeds = Self::extract_feeds(&opml.body.outlines)
            .into_iter()
            .filter(|feed| seen.insert(feed.url.clone()))
            .collect();

        Ok(feeds)
    }

    /// Recursively extract feeds from OPML outlines
    fn extract_feeds(outlines: &[Outline]) -> Vec<Feed> {
        let mut feeds = Vec::new();

        for outline in outlines {
            if let Some(url) = outline.xml_url.as_deref().map(str::trim) {
                if !url.is_empty() {
                    let title = outline
                        .title
                        .clone()
                        .or_else(|| Some(outline.text.clone()))
                        .filter(|t| !t.is_empty());
                    feeds.push(Feed::xml(url).with_title(title));
                }
            }

            feeds.extend(Self::extract_feeds(&outline.outlines));
        }

        feeds
    }

    /// Export feeds to OPML format
    pub fn export_feeds(feeds: &[Feed]) -> FeedResult<String> {
        let mut opml = OPML::default();
        opml.head = Some(opml::Head {
            title: Some("homefeed feeds".to_string()),
            ..Default::default()
        });

        for feed in feeds {
            let label = feed.label().to_string();
            let outline = Outline {
                text: label.clone(),
                r#type: Some("rss".to_string()),
                xml_url: Some(feed.url.clone()),
                title: Some(label),
                ..Default::default()
            };
            opml.body.outlines.push(outline);
        }

        opml.to_string().map_err(|e| FeedError::OpmlParse(e.to_string()))
    }
}
