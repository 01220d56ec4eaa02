//! Sentiment classification output types.
//!
//! A [`Classification`] pairs a discrete [`SentimentLabel`] with a
//! confidence score in `[0.0, 1.0]`. The confidence invariant is enforced at
//! construction by clamping, so downstream code never has to re-validate.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Discrete sentiment label: exactly three variants, never free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Wire-format name, matching what hosted classifier models emit.
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "POSITIVE",
            SentimentLabel::Negative => "NEGATIVE",
            SentimentLabel::Neutral => "NEUTRAL",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A sentiment label with the classifier's confidence in it.
///
/// Construct through [`Classification::new`] so the confidence invariant
/// holds everywhere downstream.
#[derive(Clone, Copy, Serialize)]
pub struct Classification {
    /// The discrete label.
    pub label: SentimentLabel,
    /// Confidence score from 0.0 to 1.0.
    pub confidence: f64,
}

impl Classification {
    /// Create a classification, clamping confidence into `[0.0, 1.0]`.
    pub fn new(label: SentimentLabel, confidence: f64) -> Self {
        Self {
            label,
            confidence: confidence.clamp(0.0, 1.0),
        }
    }

    /// The policy default for text that carries no signal: neutral at 0.5.
    pub fn neutral_default() -> Self {
        Self::new(SentimentLabel::Neutral, 0.5)
    }
}

impl fmt::Debug for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Compact format for snapshot tests: Classification(Positive, conf: 0.84)
        write!(
            f,
            "Classification({:?}, conf: {:.2})",
            self.label, self.confidence
        )
    }
}

impl PartialEq for Classification {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label
            && (self.confidence - other.confidence).abs() < f64::EPSILON
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_clamping() {
        let high = Classification::new(SentimentLabel::Positive, 1.5);
        assert_eq!(high.confidence, 1.0);

        let low = Classification::new(SentimentLabel::Negative, -0.5);
        assert_eq!(low.confidence, 0.0);
    }

    #[test]
    fn test_neutral_default() {
        let neutral = Classification::neutral_default();
        assert_eq!(neutral.label, SentimentLabel::Neutral);
        assert_eq!(neutral.confidence, 0.5);
    }

    #[test]
    fn test_label_names() {
        assert_eq!(SentimentLabel::Positive.as_str(), "POSITIVE");
        assert_eq!(SentimentLabel::Negative.as_str(), "NEGATIVE");
        assert_eq!(SentimentLabel::Neutral.as_str(), "NEUTRAL");
    }

    #[test]
    fn test_debug_format() {
        let classification = Classification::new(SentimentLabel::Positive, 0.8);
        insta::assert_snapshot!(
            format!("{:?}", classification),
            @"Classification(Positive, conf: 0.80)"
        );
    }

    #[test]
    fn test_serde_wire_names() {
        let json = serde_json::to_string(&SentimentLabel::Negative).unwrap();
        assert_eq!(json, r#""NEGATIVE""#);
    }
}
