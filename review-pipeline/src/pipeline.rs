//! Classifier + resolver composition.

use crate::{PipelineResult, ReviewDataset};
use rand::Rng;
use review_actions::{ActionResolver, Decision};
use review_sentiment::{Classification, LexicalScorer, SentimentClassifier};
use tracing::debug;

/// The outcome of triaging one review.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewAnalysis {
    /// The originating review text.
    pub text: String,
    /// What the classifier said about it.
    pub classification: Classification,
    /// The business decision resolved from the classification.
    pub decision: Decision,
}

/// End-to-end triage: text in, classification and decision out.
///
/// Owns a swappable classifier behind the [`SentimentClassifier`] seam; the
/// default wiring uses the local lexical scorer.
pub struct ReviewPipeline {
    classifier: Box<dyn SentimentClassifier + Send + Sync>,
    resolver: ActionResolver,
}

impl ReviewPipeline {
    /// Build a pipeline around the local lexical scorer.
    pub fn lexical() -> Self {
        Self::with_classifier(Box::new(LexicalScorer::default()))
    }

    /// Build a pipeline around any classifier implementation.
    pub fn with_classifier(classifier: Box<dyn SentimentClassifier + Send + Sync>) -> Self {
        Self {
            classifier,
            resolver: ActionResolver::new(),
        }
    }

    /// Triage one review. Empty text degrades to the neutral default by
    /// core policy; this never fails.
    pub fn analyze(&self, text: &str) -> ReviewAnalysis {
        let classification = self.classifier.classify(text);
        let decision = self.resolver.resolve(&classification);
        debug!(
            label = classification.label.as_str(),
            confidence = classification.confidence,
            action = decision.action.as_str(),
            "analyzed review"
        );
        ReviewAnalysis {
            text: text.to_string(),
            classification,
            decision,
        }
    }

    /// Pick one review at random from a dataset and triage it.
    pub fn analyze_random<R: Rng + ?Sized>(
        &self,
        dataset: &ReviewDataset,
        rng: &mut R,
    ) -> PipelineResult<ReviewAnalysis> {
        let review = dataset.pick_random(rng)?;
        Ok(self.analyze(&review.text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use review_actions::ActionCode;
    use review_sentiment::SentimentLabel;

    #[test]
    fn test_confident_negative_review_offers_coupon() {
        let analysis = ReviewPipeline::lexical().analyze("not good");
        assert_eq!(analysis.classification.label, SentimentLabel::Negative);
        assert_eq!(analysis.decision.action, ActionCode::OfferCoupon);
    }

    #[test]
    fn test_glowing_review_asks_referral() {
        let analysis = ReviewPipeline::lexical().analyze("This product is absolutely amazing!");
        assert_eq!(analysis.classification.label, SentimentLabel::Positive);
        assert_eq!(analysis.decision.action, ActionCode::AskReferral);
    }

    #[test]
    fn test_empty_text_requests_feedback() {
        let analysis = ReviewPipeline::lexical().analyze("");
        assert_eq!(analysis.classification, Classification::neutral_default());
        assert_eq!(analysis.decision.action, ActionCode::RequestFeedback);
    }

    #[test]
    fn test_analyze_random_from_fallback() {
        let pipeline = ReviewPipeline::lexical();
        let dataset = ReviewDataset::fallback();
        let mut rng = StdRng::seed_from_u64(42);
        let analysis = pipeline.analyze_random(&dataset, &mut rng).unwrap();
        assert!(dataset.iter().any(|r| r.text == analysis.text));
    }

    #[test]
    fn test_stub_classifier_through_seam() {
        struct AlwaysNegative;
        impl SentimentClassifier for AlwaysNegative {
            fn classify(&self, _text: &str) -> Classification {
                Classification::new(SentimentLabel::Negative, 0.99)
            }
        }

        let pipeline = ReviewPipeline::with_classifier(Box::new(AlwaysNegative));
        let analysis = pipeline.analyze("whatever the text says");
        assert_eq!(analysis.decision.action, ActionCode::OfferCoupon);
    }
}
