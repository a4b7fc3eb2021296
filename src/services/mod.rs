pub mod fetch_service;
pub mod memo;
pub mod opml_service;
pub mod polish_service;
pub mod post_process;
pub mod ranking;

pub use fetch_service::{FetchService, HomepageBuild};
pub use memo::Memo;
pub use opml_service::OpmlService;
pub use polish_service::{polish_feed_list, PolishService};
pub use post_process::post_process;
pub use ranking::{compare_pub_dates, find_invalid_dates, sort_by_pub_date};
