use tracing::debug;

use crate::config::DEFAULT_DISPLAY_COUNT;
use crate::domain::{FeedItem, PolicyTable};
use crate::services::post_process::post_process;
use crate::services::ranking::sort_by_pub_date;

/// Turns per-source item collections into the list shown on the homepage.
pub struct PolishService {
    policies: PolicyTable,
    display_count: usize,
}

impl PolishService {
    pub fn new(policies: PolicyTable, display_count: usize) -> Self {
        Self {
            policies,
            display_count,
        }
    }

    /// Default presentation table with the given display count
    pub fn with_display_count(display_count: usize) -> Self {
        Self::new(PolicyTable::defaults().clone(), display_count)
    }

    pub fn display_count(&self) -> usize {
        self.display_count
    }

    pub fn policies(&self) -> &PolicyTable {
        &self.policies
    }

    /// Flatten, annotate, sort newest-first and truncate to the display count
    pub fn polish<I>(&self, collections: I) -> Vec<FeedItem>
    where
        I: IntoIterator<Item = Vec<FeedItem>>,
    {
        let all_items: Vec<FeedItem> = collections.into_iter().flatten().collect();
        let total = all_items.len();

        let annotated = post_process(all_items, &self.policies);
        let mut ranked = sort_by_pub_date(annotated);
        ranked.truncate(self.display_count);

        debug!(total, kept = ranked.len(), "Polished feed list");
        ranked
    }
}

impl Default for PolishService {
    fn default() -> Self {
        Self::with_display_count(DEFAULT_DISPLAY_COUNT)
    }
}

/// Polish with the default presentation table and display count
pub fn polish_feed_list<I>(collections: I) -> Vec<FeedItem>
where
    I: IntoIterator<Item = Vec<FeedItem>>,
{
    PolishService::default().polish(collections)
}
