use std::fmt;
use ns_core::SentimentScorer;

/// Scorer that returns the same compound score for every text.
pub struct FixedScorer {
    score: f64,
}

impl fmt::Debug for FixedScorer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedScorer").field("score", &self.score).finish()
    }
}

impl FixedScorer {
    pub fn new(score: f64) -> Self {
        Self {
            score: score.clamp(-1.0, 1.0),
        }
    }
}

impl SentimentScorer for FixedScorer {
    fn name(&self) -> &str {
        "fixed"
    }

    fn score(&self, _text: &str) -> f64 {
        self.score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_scorer() {
        let scorer = FixedScorer::new(0.3);
        assert_eq!(scorer.score("anything"), 0.3);
        assert_eq!(scorer.score(""), 0.3);
        assert_eq!(scorer.name(), "fixed");

        // Out of range scores are clamped into the compound range.
        assert_eq!(FixedScorer::new(4.0).score("x"), 1.0);
        assert_eq!(FixedScorer::new(-4.0).score("x"), -1.0);
    }
}
