pub mod newsapi;
pub mod service;

pub use newsapi::NewsApiClient;
pub use service::NewsService;

pub mod prelude {
    pub use super::newsapi::NewsApiClient;
    pub use super::service::NewsService;
    pub use ns_core::{Article, NewsSource, Result, Error, SearchQuery, SearchResults};
}
