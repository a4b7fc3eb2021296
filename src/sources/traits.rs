use crate::domain::{FeedItem, SourceType};
use crate::errors::FeedResult;

#[cfg_attr(test, mockall::automock)]
pub trait FeedSource: Send + Sync {
    /// Identifies this source in logs (usually its URL)
    fn name(&self) -> String;

    fn source_type(&self) -> SourceType;

    /// Fetch the current items. Sources never set `img_src`.
    fn fetch_items(&self) -> FeedResult<Vec<FeedItem>>;
}
