use std::sync::Arc;
use ns_core::{Error, Result, SentimentScorer};
use crate::Config;

pub mod fixed;
pub mod lexicon;

pub use fixed::FixedScorer;
pub use lexicon::LexiconScorer;
pub use ns_core::PolarityScores;

/// Builds the scoring engine named in `config`, defaulting to the lexicon
/// scorer.
pub fn create_scorer(config: Option<Config>) -> Result<Arc<dyn SentimentScorer>> {
    let config = config.unwrap_or_default();
    match config.scorer.to_lowercase().as_str() {
        "vader" | "lexicon" => match config.lexicon_path {
            Some(path) => Ok(Arc::new(LexiconScorer::from_file(path)?)),
            None => Ok(Arc::new(LexiconScorer::new())),
        },
        "fixed" => Ok(Arc::new(FixedScorer::new(config.fixed_score))),
        other => Err(Error::Config(format!(
            "Unknown sentiment scorer: {}. Available scorers: vader (default), fixed",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_scorer() {
        let scorer = create_scorer(None).unwrap();
        assert_eq!(scorer.name(), "vader");

        let scorer = create_scorer(Some(Config {
            scorer: "fixed".to_string(),
            fixed_score: -0.5,
            ..Config::default()
        }))
        .unwrap();
        assert_eq!(scorer.name(), "fixed");
        assert_eq!(scorer.score("great"), -0.5);

        let result = create_scorer(Some(Config {
            scorer: "llm".to_string(),
            ..Config::default()
        }));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_create_scorer_with_lexicon_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lexicon.txt");
        std::fs::write(&path, "bullish\t2.5\n").unwrap();

        let scorer = create_scorer(Some(Config {
            lexicon_path: Some(path),
            ..Config::default()
        }))
        .unwrap();
        assert!(scorer.score("analysts are bullish") > 0.5);

        let result = create_scorer(Some(Config {
            lexicon_path: Some(dir.path().join("missing.txt")),
            ..Config::default()
        }));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
