use async_trait::async_trait;
use ns_core::{Article, Error, NewsSource, Result, SearchQuery, SearchResults};
use reqwest::Client;
use serde::Deserialize;
use std::fmt;

pub const DEFAULT_BASE_URL: &str = "https://newsapi.org";
pub const DEFAULT_PAGE_SIZE: u32 = 50;
const DEFAULT_LANGUAGE: &str = "en";
const SORT_BY: &str = "publishedAt";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct EverythingResponse {
    status: String,
    #[serde(default)]
    total_results: usize,
    #[serde(default)]
    articles: Vec<Article>,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Client for the NewsAPI `/v2/everything` endpoint.
pub struct NewsApiClient {
    client: Client,
    api_key: String,
    base_url: String,
    language: String,
    page_size: u32,
}

impl fmt::Debug for NewsApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewsApiClient")
            .field("client", &"<reqwest::Client>")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("language", &self.language)
            .field("page_size", &self.page_size)
            .finish()
    }
}

impl NewsApiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl NewsSource for NewsApiClient {
    fn name(&self) -> &str {
        "NewsAPI"
    }

    async fn search(&self, query: &SearchQuery) -> Result<SearchResults> {
        let from = query.from.format("%Y-%m-%d").to_string();
        let page_size = self.page_size.to_string();

        let response = self
            .client
            .get(format!("{}/v2/everything", self.base_url))
            .header("X-Api-Key", &self.api_key)
            .query(&[
                ("q", query.query.as_str()),
                ("from", from.as_str()),
                ("sortBy", SORT_BY),
                ("language", self.language.as_str()),
                ("pageSize", page_size.as_str()),
            ])
            .send()
            .await?;

        let http_status = response.status();
        let body = response.text().await?;
        tracing::debug!("NewsAPI responded {} ({} bytes)", http_status, body.len());

        let parsed: EverythingResponse = match serde_json::from_str(&body) {
            Ok(parsed) => parsed,
            Err(_) if !http_status.is_success() => {
                return Err(Error::source_failure("error", format!("HTTP {}", http_status)));
            }
            Err(e) => return Err(e.into()),
        };

        if parsed.status != "ok" || !http_status.is_success() {
            let message = match (parsed.code, parsed.message) {
                (_, Some(message)) => message,
                (Some(code), None) => code,
                (None, None) => format!("HTTP {}", http_status),
            };
            return Err(Error::source_failure(parsed.status, message));
        }

        Ok(SearchResults {
            total_results: parsed.total_results,
            articles: parsed.articles,
        })
    }
}
