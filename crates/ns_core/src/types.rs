use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Wire format of `publishedAt` as sent by the news provider.
pub const PUBLISHED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";
const PUBLISHED_DISPLAY_FORMAT: &str = "%d %B %Y, %H:%M";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "Positive"),
            Sentiment::Negative => write!(f, "Negative"),
            Sentiment::Neutral => write!(f, "Neutral"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArticleSource {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
}

/// A single article as returned by the news provider, plus the sentiment
/// label attached during ingestion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(default)]
    pub source: ArticleSource,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub url_to_image: Option<String>,
    #[serde(default)]
    pub published_at: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<Sentiment>,
}

impl Article {
    /// Text used for sentiment scoring: the description, falling back to
    /// the title when the description is missing or empty.
    pub fn sentiment_text(&self) -> &str {
        match self.description.as_deref() {
            Some(description) if !description.is_empty() => description,
            _ => &self.title,
        }
    }

    /// Human readable publication date. Falls back to the raw value when it
    /// is not in the provider's wire format.
    pub fn published_display(&self) -> String {
        format_published(&self.published_at)
    }

    pub fn with_sentiment(mut self, sentiment: Sentiment) -> Self {
        self.sentiment = Some(sentiment);
        self
    }
}

pub fn format_published(raw: &str) -> String {
    match NaiveDateTime::parse_from_str(raw, PUBLISHED_AT_FORMAT) {
        Ok(parsed) => parsed.format(PUBLISHED_DISPLAY_FORMAT).to_string(),
        Err(_) => raw.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub query: String,
    pub from: NaiveDate,
}

impl SearchQuery {
    pub fn new(query: impl Into<String>, from: NaiveDate) -> Self {
        Self {
            query: query.into(),
            from,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    pub total_results: usize,
    pub articles: Vec<Article>,
}
