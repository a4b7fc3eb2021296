use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    Xml,
    PostsApi,
}

impl SourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceType::Xml => "xml",
            SourceType::PostsApi => "posts_api",
        }
    }
}

impl std::str::FromStr for SourceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "xml" | "rss" | "atom" => Ok(SourceType::Xml),
            "posts_api" | "api" => Ok(SourceType::PostsApi),
            _ => Err(format!("Unknown source type: {}", s)),
        }
    }
}

impl std::fmt::Display for SourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A configured feed source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feed {
    pub url: String,
    pub title: Option<String>,
    pub source_type: SourceType,
}

impl Feed {
    pub fn new(url: impl Into<String>, source_type: SourceType) -> Self {
        Self {
            url: url.into(),
            title: None,
            source_type,
        }
    }

    pub fn xml(url: impl Into<String>) -> Self {
        Self::new(url, SourceType::Xml)
    }

    pub fn with_title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }

    /// Title if known, otherwise the URL
    pub fn label(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.url)
    }
}
