pub mod models;
pub mod error;
pub mod source;
pub mod types;

pub use error::{Error, Result};
pub use models::{PolarityScores, SentimentScorer};
pub use source::NewsSource;
pub use types::{format_published, Article, ArticleSource, SearchQuery, SearchResults, Sentiment};
