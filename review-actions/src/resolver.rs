//! The normalized-score decision table.

use crate::{ActionCode, Decision};
use review_sentiment::{Classification, SentimentLabel};

/// Maps a classification onto a business decision.
///
/// Total over all valid classifications and pure: the same input always
/// resolves to the same decision.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActionResolver;

impl ActionResolver {
    pub fn new() -> Self {
        Self
    }

    /// Collapse a classification to one scalar in `[0, 1]` where 1 is the
    /// best customer outcome and 0 the worst.
    ///
    /// Neutral ignores the stated confidence: a neutral classification
    /// carries no directional signal however certain the classifier is.
    pub fn normalized_score(classification: &Classification) -> f64 {
        match classification.label {
            SentimentLabel::Positive => classification.confidence,
            SentimentLabel::Negative => 1.0 - classification.confidence,
            SentimentLabel::Neutral => 0.5,
        }
    }

    /// Resolve a classification to its business decision.
    ///
    /// Ordered table, first match wins. Boundary semantics: 0.4 itself
    /// offers a coupon, 0.7 itself asks for a referral, and the middle
    /// branch is the open interval between them.
    pub fn resolve(&self, classification: &Classification) -> Decision {
        let normalized = Self::normalized_score(classification);

        let action = if normalized <= 0.4 {
            ActionCode::OfferCoupon
        } else if normalized < 0.7 {
            ActionCode::RequestFeedback
        } else {
            ActionCode::AskReferral
        };

        Decision::for_action(action)
    }
}
