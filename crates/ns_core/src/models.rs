use serde::Serialize;
use std::fmt;

/// Share of positive, neutral and negative valence in a text, plus its
/// compound score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PolarityScores {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    pub compound: f64,
}

/// A sentiment engine producing a compound polarity score for free text.
pub trait SentimentScorer: Send + Sync + fmt::Debug {
    /// Name of the engine, used in logs and configuration
    fn name(&self) -> &str;

    /// Compound polarity of `text`, in `[-1.0, 1.0]`
    fn score(&self, text: &str) -> f64;

    /// Full breakdown for engines that track valence proportions
    fn polarity(&self, _text: &str) -> Option<PolarityScores> {
        None
    }
}
