use url::Url;

use crate::domain::policy::{SOLIDITY_FEED, VITALIK_FEED, ZERO_X_PARC_FEED};
use crate::domain::Feed;
use crate::errors::{FeedError, FeedResult};

pub const DEFAULT_DISPLAY_COUNT: usize = 6;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const ETHEREUM_BLOG_FEED: &str = "https://blog.ethereum.org/en/feed.xml";

const DEFAULT_FEEDS: &[&str] = &[
    VITALIK_FEED,
    SOLIDITY_FEED,
    ZERO_X_PARC_FEED,
    ETHEREUM_BLOG_FEED,
];

#[derive(Debug, Clone)]
pub struct Config {
    pub display_count: usize,
    pub feeds: Vec<Feed>,
    pub posts_api_url: Option<String>,
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            display_count: DEFAULT_DISPLAY_COUNT,
            feeds: DEFAULT_FEEDS.iter().map(|url| Feed::xml(*url)).collect(),
            posts_api_url: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Get the directory where the executable is located
    fn exe_dir() -> Option<std::path::PathBuf> {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    pub fn from_env() -> FeedResult<Self> {
        // Try to load .env from executable's directory first
        if let Some(dir) = Self::exe_dir() {
            let env_path = dir.join(".env");
            if env_path.exists() {
                dotenvy::from_path(&env_path).ok();
            }
        }
        // Fall back to current directory
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> FeedResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup("HOMEFEED_DISPLAY_COUNT") {
            config.display_count = parse_display_count(&raw)?;
        }

        if let Some(raw) = lookup("HOMEFEED_FEEDS") {
            config.feeds = parse_feed_list(&raw)?;
        }

        if let Some(raw) = lookup("HOMEFEED_POSTS_API_URL") {
            let raw = raw.trim();
            if !raw.is_empty() {
                validate_url(raw)?;
                config.posts_api_url = Some(raw.to_string());
            }
        }

        if let Some(raw) = lookup("HOMEFEED_TIMEOUT_SECS") {
            config.timeout_secs = parse_timeout_secs(&raw)?;
        }

        Ok(config)
    }
}

pub fn parse_display_count(raw: &str) -> FeedResult<usize> {
    match raw.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(FeedError::Config(format!(
            "display count must be a positive integer, got '{}'",
            raw
        ))),
    }
}

fn parse_timeout_secs(raw: &str) -> FeedResult<u64> {
    match raw.trim().parse::<u64>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(FeedError::Config(format!(
            "HOMEFEED_TIMEOUT_SECS must be a positive number of seconds, got '{}'",
            raw
        ))),
    }
}

fn parse_feed_list(raw: &str) -> FeedResult<Vec<Feed>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|url| validate_url(url).map(|_| Feed::xml(url)))
        .collect()
}

fn validate_url(raw: &str) -> FeedResult<()> {
    Url::parse(raw)
        .map(|_| ())
        .map_err(|e| FeedError::InvalidUrl(format!("{}: {}", raw, e)))
}
