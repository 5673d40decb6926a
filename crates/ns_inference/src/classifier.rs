use std::sync::Arc;
use ns_core::{Article, PolarityScores, Sentiment, SentimentScorer};
use crate::models::LexiconScorer;

/// Compound scores at or above this are positive.
pub const POSITIVE_THRESHOLD: f64 = 0.05;
/// Compound scores at or below this are negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

pub fn label_for_score(score: f64) -> Sentiment {
    if score >= POSITIVE_THRESHOLD {
        Sentiment::Positive
    } else if score <= NEGATIVE_THRESHOLD {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

/// Maps free text to a three-way sentiment label using a pluggable scorer.
#[derive(Debug, Clone)]
pub struct SentimentClassifier {
    scorer: Arc<dyn SentimentScorer>,
}

impl Default for SentimentClassifier {
    fn default() -> Self {
        Self::new(Arc::new(LexiconScorer::new()))
    }
}

impl SentimentClassifier {
    pub fn new(scorer: Arc<dyn SentimentScorer>) -> Self {
        Self { scorer }
    }

    pub fn scorer_name(&self) -> &str {
        self.scorer.name()
    }

    pub fn score(&self, text: &str) -> f64 {
        self.scorer.score(text)
    }

    /// Valence proportions from the configured scorer, when it tracks them.
    pub fn polarity(&self, text: &str) -> Option<PolarityScores> {
        self.scorer.polarity(text)
    }

    /// Empty or missing text is neutral and never reaches the scorer.
    pub fn classify(&self, text: Option<&str>) -> Sentiment {
        match text {
            Some(text) if !text.is_empty() => label_for_score(self.scorer.score(text)),
            _ => Sentiment::Neutral,
        }
    }

    pub fn classify_article(&self, article: &Article) -> Sentiment {
        self.classify(Some(article.sentiment_text()))
    }

    /// Labels every article, keeping the original order.
    pub fn annotate(&self, articles: Vec<Article>) -> Vec<Article> {
        articles
            .into_iter()
            .map(|article| {
                let sentiment = self.classify_article(&article);
                tracing::debug!("{} -> {}", article.title, sentiment);
                article.with_sentiment(sentiment)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FixedScorer;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, Default)]
    struct CountingScorer {
        calls: AtomicUsize,
    }

    impl SentimentScorer for CountingScorer {
        fn name(&self) -> &str {
            "counting"
        }

        fn score(&self, _text: &str) -> f64 {
            self.calls.fetch_add(1, Ordering::SeqCst);
            1.0
        }
    }

    fn fixed(score: f64) -> SentimentClassifier {
        SentimentClassifier::new(Arc::new(FixedScorer::new(score)))
    }

    #[test]
    fn test_empty_text_is_neutral_without_scoring() {
        let scorer = Arc::new(CountingScorer::default());
        let classifier = SentimentClassifier::new(scorer.clone());

        assert_eq!(classifier.classify(Some("")), Sentiment::Neutral);
        assert_eq!(classifier.classify(None), Sentiment::Neutral);
        assert_eq!(scorer.calls.load(Ordering::SeqCst), 0);

        assert_eq!(classifier.classify(Some("hello")), Sentiment::Positive);
        assert_eq!(scorer.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_default_classifier_labels() {
        let classifier = SentimentClassifier::default();
        assert_eq!(classifier.scorer_name(), "vader");
        assert_eq!(
            classifier.classify(Some("excellent, wonderful, amazing news")),
            Sentiment::Positive
        );
        assert_eq!(
            classifier.classify(Some("terrible, awful disaster")),
            Sentiment::Negative
        );
        assert_eq!(
            classifier.classify(Some("the meeting is on Tuesday")),
            Sentiment::Neutral
        );
    }

    #[test]
    fn test_breakdown_follows_configured_scorer() {
        let classifier = SentimentClassifier::default();
        let scores = classifier.polarity("a super result").unwrap();
        assert_eq!(scores.compound, classifier.score("a super result"));
        assert!(scores.pos > 0.0);

        let classifier = fixed(-0.4);
        assert_eq!(classifier.score("a super result"), -0.4);
        assert_eq!(classifier.polarity("a super result"), None);
    }

    #[test]
    fn test_threshold_boundaries() {
        assert_eq!(label_for_score(0.05), Sentiment::Positive);
        assert_eq!(label_for_score(-0.05), Sentiment::Negative);
        assert_eq!(label_for_score(0.0499), Sentiment::Neutral);
        assert_eq!(label_for_score(-0.0499), Sentiment::Neutral);
        assert_eq!(label_for_score(1.0), Sentiment::Positive);
        assert_eq!(label_for_score(-1.0), Sentiment::Negative);

        assert_eq!(fixed(0.05).classify(Some("x")), Sentiment::Positive);
        assert_eq!(fixed(-0.05).classify(Some("x")), Sentiment::Negative);
        assert_eq!(fixed(0.0).classify(Some("x")), Sentiment::Neutral);
    }

    #[test]
    fn test_annotate_uses_description_then_title() {
        let classifier = SentimentClassifier::default();
        let articles = vec![
            Article {
                title: "Storm hits coast".to_string(),
                description: Some("A wonderful recovery effort".to_string()),
                ..Default::default()
            },
            Article {
                title: "Terrible losses".to_string(),
                description: Some(String::new()),
                ..Default::default()
            },
            Article::default(),
        ];

        let annotated = classifier.annotate(articles);
        assert_eq!(annotated.len(), 3);
        assert_eq!(annotated[0].title, "Storm hits coast");
        assert_eq!(annotated[0].sentiment, Some(Sentiment::Positive));
        assert_eq!(annotated[1].sentiment, Some(Sentiment::Negative));
        assert_eq!(annotated[2].sentiment, Some(Sentiment::Neutral));
    }
}
