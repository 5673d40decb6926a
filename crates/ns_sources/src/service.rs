use std::sync::Arc;
use ns_core::{Error, NewsSource, Result, SearchQuery, SearchResults};
use ns_inference::SentimentClassifier;
use ns_storage::{PageView, SessionStore};
use tracing::{info, warn};

pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a search topic.";

/// Fetches articles from a news source and labels each one with its
/// sentiment.
#[derive(Clone)]
pub struct NewsService {
    source: Arc<dyn NewsSource>,
    classifier: SentimentClassifier,
}

impl NewsService {
    pub fn new(source: Arc<dyn NewsSource>, classifier: SentimentClassifier) -> Self {
        Self { source, classifier }
    }

    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    fn validate(query: &SearchQuery) -> Result<()> {
        if query.query.trim().is_empty() {
            return Err(Error::InvalidQuery(EMPTY_QUERY_MESSAGE.to_string()));
        }
        Ok(())
    }

    pub async fn search(&self, query: &SearchQuery) -> Result<SearchResults> {
        Self::validate(query)?;
        self.fetch_and_annotate(query).await
    }

    async fn fetch_and_annotate(&self, query: &SearchQuery) -> Result<SearchResults> {
        info!("🔎 Searching {} for {:?} since {}", self.source.name(), query.query, query.from);
        let results = self.source.search(query).await?;
        let articles = self.classifier.annotate(results.articles);
        info!(
            "🧠 Analyzed {} articles with {} ({} reported)",
            articles.len(),
            self.classifier.scorer_name(),
            results.total_results
        );
        Ok(SearchResults {
            total_results: results.total_results,
            articles,
        })
    }

    /// Runs a search and loads the outcome into `store`. A failed fetch
    /// leaves the session empty rather than showing the previous results.
    pub async fn search_into(&self, query: &SearchQuery, store: &SessionStore) -> Result<PageView> {
        Self::validate(query)?;
        match self.fetch_and_annotate(query).await {
            Ok(results) => Ok(store.replace(query.query.clone(), results).await),
            Err(e) => {
                warn!("⚠️ Search for {:?} failed: {}", query.query, e);
                store.clear(query.query.clone()).await;
                Err(e)
            }
        }
    }
}
