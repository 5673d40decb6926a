use async_trait::async_trait;
use crate::types::{SearchQuery, SearchResults};
use crate::Result;

#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Name of the provider
    fn name(&self) -> &str;

    /// Search articles matching `query` published on or after `query.from`
    async fn search(&self, query: &SearchQuery) -> Result<SearchResults>;
}
