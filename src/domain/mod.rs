pub mod feed;
pub mod item;
pub mod policy;

pub use feed::{Feed, SourceType};
pub use item::{parse_pub_date, FeedItem};
pub use policy::{LinkRewrite, PolicyTable, Presentation};
