use ns_core::{Article, SearchResults};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;
use crate::pages::PageState;

/// Snapshot of the session's current page, as handed to a presentation
/// layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageView {
    pub query: String,
    pub page: usize,
    pub total_pages: usize,
    pub total_results: usize,
    pub has_previous: bool,
    pub has_next: bool,
    pub articles: Vec<Article>,
}

#[derive(Debug, Default)]
struct Session {
    query: String,
    reported_total: usize,
    pages: PageState,
}

impl Session {
    fn view(&self) -> PageView {
        PageView {
            query: self.query.clone(),
            page: self.pages.current_page(),
            total_pages: self.pages.total_pages(),
            total_results: self.reported_total,
            has_previous: self.pages.has_previous(),
            has_next: self.pages.has_next(),
            articles: self.pages.current_slice().to_vec(),
        }
    }
}

/// The one in-process search session. Loads take the write lock, so readers
/// observe either the previous search or the new one in full.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    session: Arc<RwLock<Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the results of a new search and returns its first page.
    ///
    /// Pages are counted over the articles actually held: when the provider
    /// reports more results than it returned, the extra pages would be empty,
    /// so the paged total is capped at the held length. The reported total
    /// is kept for display.
    pub async fn replace(&self, query: impl Into<String>, results: SearchResults) -> PageView {
        let page_total = results.total_results.min(results.articles.len());
        let mut session = self.session.write().await;
        session.query = query.into();
        session.reported_total = results.total_results;
        session.pages.load(results.articles, page_total);
        tracing::debug!(
            "Loaded {} articles ({} reported) for {:?}",
            session.pages.held_len(),
            session.reported_total,
            session.query
        );
        session.view()
    }

    /// Drops any held results, leaving an empty session for `query`.
    pub async fn clear(&self, query: impl Into<String>) -> PageView {
        let mut session = self.session.write().await;
        session.query = query.into();
        session.reported_total = 0;
        session.pages.load(Vec::new(), 0);
        session.view()
    }

    pub async fn view(&self) -> PageView {
        self.session.read().await.view()
    }

    pub async fn next(&self) -> PageView {
        let mut session = self.session.write().await;
        session.pages.go_next();
        session.view()
    }

    pub async fn previous(&self) -> PageView {
        let mut session = self.session.write().await;
        session.pages.go_previous();
        session.view()
    }
}
