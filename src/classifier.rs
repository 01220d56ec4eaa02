//! The classifier seam.
//!
//! Deployments choose between this crate's [`LexicalScorer`] and a remote
//! model backend. Consumers (the action resolver, the triage pipeline)
//! depend on this trait so the choice stays swappable.

use crate::{Classification, LexicalScorer};

/// Anything that can turn review text into a [`Classification`].
///
/// Implementations must be pure with respect to the text: the same input
/// always yields the same classification.
pub trait SentimentClassifier {
    fn classify(&self, text: &str) -> Classification;
}

impl SentimentClassifier for LexicalScorer {
    fn classify(&self, text: &str) -> Classification {
        self.score(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SentimentLabel;

    #[test]
    fn test_scorer_through_trait_object() {
        let classifier: Box<dyn SentimentClassifier> = Box::new(LexicalScorer::default());
        let c = classifier.classify("wonderful");
        assert_eq!(c.label, SentimentLabel::Positive);
    }
}
