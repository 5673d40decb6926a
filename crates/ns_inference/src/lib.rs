use std::path::PathBuf;

pub mod classifier;
pub mod models;

pub use classifier::{label_for_score, SentimentClassifier, NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD};
pub use models::{create_scorer, FixedScorer, LexiconScorer, PolarityScores};

#[derive(Debug, Clone)]
pub struct Config {
    /// Scoring engine: `vader` (default) or `fixed`
    pub scorer: String,
    /// Score returned by the `fixed` engine
    pub fixed_score: f64,
    /// Extra lexicon file for the `vader` engine
    pub lexicon_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scorer: "vader".to_string(),
            fixed_score: 0.0,
            lexicon_path: None,
        }
    }
}

pub mod prelude {
    pub use super::Config;
    pub use super::models::create_scorer;
    pub use super::classifier::SentimentClassifier;
    pub use ns_core::{Sentiment, SentimentScorer, Result, Error};
}
