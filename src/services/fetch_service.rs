use tracing::{info, warn};

use crate::domain::{FeedItem, SourceType};
use crate::services::memo::Memo;
use crate::services::polish_service::PolishService;
use crate::sources::{FeedSource, SourceRegistry};

type Collections = Vec<Vec<FeedItem>>;

pub struct FetchService {
    source_registry: SourceRegistry,
}

impl FetchService {
    pub fn new(source_registry: SourceRegistry) -> Self {
        Self { source_registry }
    }

    pub fn source_count(&self) -> usize {
        self.source_registry.len()
    }

    /// Fetch every source, one collection per source in registry order.
    /// Failing sources are logged and skipped.
    pub fn fetch_all(&self) -> Collections {
        Self::fetch_each(self.source_registry.sources().iter())
    }

    pub fn fetch_by_type(&self, source_type: SourceType) -> Collections {
        Self::fetch_each(self.source_registry.of_type(source_type))
    }

    fn fetch_each<'a, I>(sources: I) -> Collections
    where
        I: Iterator<Item = &'a Box<dyn FeedSource>>,
    {
        let mut results = Vec::new();

        for source in sources {
            match source.fetch_items() {
                Ok(items) => {
                    info!(source = %source.name(), count = items.len(), "Fetched");
                    results.push(items);
                }
                Err(e) => {
                    // Log error but continue with other sources
                    warn!(source = %source.name(), error = %e, "Error fetching source");
                }
            }
        }

        results
    }

    /// Start a homepage build whose fetches run at most once
    pub fn build(&self) -> HomepageBuild<'_> {
        let fetch_xml: Box<dyn FnOnce() -> Collections + '_> =
            Box::new(move || self.fetch_by_type(SourceType::Xml));
        let fetch_posts: Box<dyn FnOnce() -> Collections + '_> =
            Box::new(move || self.fetch_by_type(SourceType::PostsApi));

        HomepageBuild {
            xml_feeds: Memo::new(fetch_xml),
            posts: Memo::new(fetch_posts),
        }
    }
}

/// Fetch results for a single homepage build.
///
/// Each group of sources is fetched on first access and reused for the rest
/// of the build. Dropping the build drops the results.
pub struct HomepageBuild<'a> {
    xml_feeds: Memo<Collections, Box<dyn FnOnce() -> Collections + 'a>>,
    posts: Memo<Collections, Box<dyn FnOnce() -> Collections + 'a>>,
}

impl HomepageBuild<'_> {
    pub fn xml_feeds(&self) -> &Collections {
        self.xml_feeds.get()
    }

    pub fn posts(&self) -> &Collections {
        self.posts.get()
    }

    pub fn fetched_count(&self) -> usize {
        self.xml_feeds()
            .iter()
            .chain(self.posts().iter())
            .map(Vec::len)
            .sum()
    }

    pub fn polished(&self, polish_service: &PolishService) -> Vec<FeedItem> {
        let collections = self
            .xml_feeds()
            .iter()
            .chain(self.posts().iter())
            .cloned();
        polish_service.polish(collections)
    }
}
