use std::time::Duration;

use crate::config::Config;
use crate::domain::{Feed, SourceType};
use crate::sources::posts_api::PostsApiSource;
use crate::sources::traits::FeedSource;
use crate::sources::xml_feed::XmlFeedSource;

pub struct SourceRegistry {
    sources: Vec<Box<dyn FeedSource>>,
}

impl SourceRegistry {
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// One source per configured feed, then the posts API if configured
    pub fn from_config(config: &Config) -> Self {
        let timeout = Duration::from_secs(config.timeout_secs);
        let mut registry = Self::from_feeds(&config.feeds, timeout);

        if let Some(url) = &config.posts_api_url {
            registry.register(Box::new(PostsApiSource::new(url, timeout)));
        }

        registry
    }

    pub fn from_feeds(feeds: &[Feed], timeout: Duration) -> Self {
        let mut registry = Self::new();

        for feed in feeds {
            let source: Box<dyn FeedSource> = match feed.source_type {
                SourceType::Xml => Box::new(XmlFeedSource::new(&feed.url, timeout)),
                SourceType::PostsApi => Box::new(PostsApiSource::new(&feed.url, timeout)),
            };
            registry.register(source);
        }

        registry
    }

    pub fn register(&mut self, source: Box<dyn FeedSource>) {
        self.sources.push(source);
    }

    pub fn sources(&self) -> &[Box<dyn FeedSource>] {
        &self.sources
    }

    /// Sources of one type, in registration order
    pub fn of_type(&self, source_type: SourceType) -> impl Iterator<Item = &Box<dyn FeedSource>> {
        self.sources
            .iter()
            .filter(move |s| s.source_type() == source_type)
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl Default for SourceRegistry {
    fn default() -> Self {
        Self::new()
    }
}
