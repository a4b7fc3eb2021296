use std::time::Duration;

use reqwest::blocking::Client;
use scraper::Html;
use serde::Deserialize;
use tracing::debug;

use crate::domain::{FeedItem, SourceType};
use crate::errors::FeedResult;
use crate::sources::traits::FeedSource;

/// Blog posts served as JSON by a REST endpoint rather than an XML feed.
pub struct PostsApiSource {
    url: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PostsResponse {
    List(Vec<ApiPost>),
    Wrapped { posts: Vec<ApiPost> },
}

#[derive(Debug, Deserialize)]
struct ApiPost {
    title: String,
    #[serde(alias = "url", alias = "href")]
    link: String,
    #[serde(rename = "pubDate", alias = "published", alias = "date", default)]
    pub_date: String,
}

impl PostsApiSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            client: Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_else(|_| Client::new()),
        }
    }

    /// Reduce an HTML fragment to collapsed plain text
    fn html_to_text(html: &str) -> String {
        let fragment = Html::parse_fragment(html);
        let text: String = fragment.root_element().text().collect();
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    /// Parse a JSON posts payload, either a bare array or `{"posts": [...]}`
    pub fn items_from_json(body: &str, source_url: &str) -> FeedResult<Vec<FeedItem>> {
        let posts = match serde_json::from_str::<PostsResponse>(body)? {
            PostsResponse::List(posts) => posts,
            PostsResponse::Wrapped { posts } => posts,
        };

        let items = posts
            .into_iter()
            .map(|post| {
                FeedItem::new(
                    Self::html_to_text(&post.title),
                    post.link,
                    post.pub_date,
                    source_url,
                )
            })
            .collect();

        Ok(items)
    }
}

impl FeedSource for PostsApiSource {
    fn name(&self) -> String {
        self.url.clone()
    }

    fn source_type(&self) -> SourceType {
        SourceType::PostsApi
    }

    fn fetch_items(&self) -> FeedResult<Vec<FeedItem>> {
        let body = self
            .client
            .get(&self.url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()?
            .error_for_status()?
            .text()?;

        let items = Self::items_from_json(&body, &self.url)?;
        debug!(endpoint = %self.url, count = items.len(), "Parsed posts");
        Ok(items)
    }
}
