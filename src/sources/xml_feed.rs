use std::time::Duration;

use feed_rs::parser;
use reqwest::blocking::Client;
use tracing::debug;

use crate::domain::{FeedItem, SourceType};
use crate::errors::{FeedError, FeedResult};
use crate::sources::traits::FeedSource;

/// RSS, Atom or JSON Feed document fetched over HTTP.
pub struct XmlFeedSource {
    url: String,
    client: Client,
}

impl XmlFeedSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            client: Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_else(|_| Client::new()),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn parse_bytes(bytes: &[u8]) -> FeedResult<feed_rs::model::Feed> {
        parser::parse(bytes).map_err(|e| FeedError::FeedParse(e.to_string()))
    }

    /// Parse items from raw feed bytes, tagging each with `source_url`
    pub fn items_from_bytes(bytes: &[u8], source_url: &str) -> FeedResult<Vec<FeedItem>> {
        let parsed = Self::parse_bytes(bytes)?;

        let items = parsed
            .entries
            .into_iter()
            .map(|entry| {
                let title = entry
                    .title
                    .map(|t| t.content)
                    .unwrap_or_else(|| "Untitled".to_string());

                let link = entry
                    .links
                    .into_iter()
                    .next()
                    .map(|l| l.href)
                    .unwrap_or_default();

                let pub_date = entry
                    .published
                    .or(entry.updated)
                    .map(|dt| dt.to_rfc3339())
                    .unwrap_or_default();

                FeedItem::new(title, link, pub_date, source_url)
            })
            .collect();

        Ok(items)
    }
}

impl FeedSource for XmlFeedSource {
    fn name(&self) -> String {
        self.url.clone()
    }

    fn source_type(&self) -> SourceType {
        SourceType::Xml
    }

    fn fetch_items(&self) -> FeedResult<Vec<FeedItem>> {
        let response = self.client.get(&self.url).send()?.error_for_status()?;
        let bytes = response.bytes()?;

        let items = Self::items_from_bytes(&bytes, &self.url)?;
        debug!(feed = %self.url, count = items.len(), "Parsed feed");
        Ok(items)
    }
}
