pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod services;
pub mod sources;

pub use domain::FeedItem;
pub use errors::{FeedError, FeedResult};
pub use services::{polish_feed_list, PolishService};
