pub mod posts_api;
pub mod registry;
pub mod traits;
pub mod xml_feed;

pub use posts_api::PostsApiSource;
pub use registry::SourceRegistry;
pub use traits::FeedSource;
pub use xml_feed::XmlFeedSource;
