//! The lexical sentiment scorer.
//!
//! Accumulates positive/negative/neutral evidence over the tokens of a
//! review, applying negation and intensifier modifiers from the preceding
//! token, then resolves a label with neutral-precedence damping and derives
//! a confidence in `[0.5, 0.95]`.

use crate::{Classification, Lexicon, SentimentLabel};

/// The running evidence totals behind a classification.
///
/// Exposed so callers can explain *why* a review classified the way it did
/// (e.g. in a triage UI or an audit log), not just what the label was.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    /// Accumulated positive evidence.
    pub positive: f64,
    /// Accumulated negative evidence (stored as a positive magnitude).
    pub negative: f64,
    /// Accumulated neutral evidence, starting from a baseline of 1.0.
    pub neutral: f64,
    /// The classification the totals resolved to.
    pub classification: Classification,
}

/// Keyword/negation/intensifier sentiment scorer over a fixed [`Lexicon`].
///
/// Pure and deterministic: the same text always yields the same
/// classification, and scoring never mutates the lexicon.
#[derive(Debug, Clone)]
pub struct LexicalScorer {
    lexicon: Lexicon,
}

const NEUTRAL_BASELINE: f64 = 1.0;
const CONTRAST_MARKERS: &[&str] = &["but", "however", "although"];

impl LexicalScorer {
    /// Create a scorer over a custom lexicon.
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// Classify a review, returning only the label and confidence.
    pub fn score(&self, text: &str) -> Classification {
        self.score_with_breakdown(text).classification
    }

    /// Classify a review, keeping the evidence totals for explainability.
    pub fn score_with_breakdown(&self, text: &str) -> ScoreBreakdown {
        // Empty-after-trim text carries no signal: degrade to the neutral
        // default by policy rather than running the accumulator.
        if text.trim().is_empty() {
            return ScoreBreakdown {
                positive: 0.0,
                negative: 0.0,
                neutral: NEUTRAL_BASELINE,
                classification: Classification::neutral_default(),
            };
        }

        let lowered = text.to_lowercase();
        let tokens: Vec<String> = lowered.split_whitespace().map(clean_token).collect();

        let mut positive = 0.0_f64;
        let mut negative = 0.0_f64;
        let mut neutral = NEUTRAL_BASELINE;

        for (i, word) in tokens.iter().enumerate() {
            let previous = if i > 0 { Some(tokens[i - 1].as_str()) } else { None };
            let negated = previous.map_or(false, |p| self.lexicon.is_negation(p));
            let intensity = if previous.map_or(false, |p| self.lexicon.is_intensifier(p)) {
                2.0
            } else {
                1.0
            };

            if self.lexicon.is_positive(word) {
                let contribution = (if negated { -2.0 } else { 3.0 }) * intensity;
                if contribution >= 0.0 {
                    positive += contribution;
                } else {
                    negative += -contribution;
                }
            } else if self.lexicon.is_negative(word) {
                let contribution = (if negated { 2.0 } else { -3.0 }) * intensity;
                if contribution >= 0.0 {
                    positive += contribution;
                } else {
                    negative += -contribution;
                }
            } else if self.lexicon.is_neutral(word) {
                // Neutral hits apply flatly; negation/intensity do not touch them.
                neutral += 0.5;
            } else {
                neutral += 0.1;
            }
        }

        // Post-token adjustments, each at most once per review.
        //
        // The exclamation bonus runs two independent checks: when the
        // totals are exactly equal, neither side is boosted.
        if lowered.matches('!').count() > 1 {
            if positive > negative {
                positive += 2.0;
            }
            if negative > positive {
                negative += 2.0;
            }
        }
        if lowered.contains('?') {
            neutral += 1.0;
        }
        if CONTRAST_MARKERS.iter().any(|m| lowered.contains(m)) {
            neutral += 1.0;
        }

        let classification = resolve_label(positive, negative, neutral);
        ScoreBreakdown {
            positive,
            negative,
            neutral,
            classification,
        }
    }
}

impl Default for LexicalScorer {
    fn default() -> Self {
        Self::new(Lexicon::default())
    }
}

/// Strip non-word characters so punctuation never blocks a lexicon hit
/// ("amazing!" -> "amazing", "don't" -> "dont").
fn clean_token(token: &str) -> String {
    token.chars().filter(|c| c.is_alphanumeric()).collect()
}

/// Resolve the label and confidence from the accumulated totals.
///
/// Neutral wins whenever it holds the max, or whenever the positive and
/// negative totals are within 2.0 of each other; this damps false
/// positives/negatives on ambiguous text, independent of which raw score
/// is numerically largest.
fn resolve_label(positive: f64, negative: f64, neutral: f64) -> Classification {
    let max = positive.max(negative).max(neutral);

    let label = if max == neutral || (positive - negative).abs() < 2.0 {
        SentimentLabel::Neutral
    } else if positive == max {
        SentimentLabel::Positive
    } else {
        SentimentLabel::Negative
    };

    let mut total = positive + negative + neutral;
    if total == 0.0 {
        total = 1.0;
    }
    let confidence = match label {
        SentimentLabel::Neutral => 0.5 + (neutral / total) * 0.3,
        SentimentLabel::Positive => 0.6 + (positive / total) * 0.3,
        SentimentLabel::Negative => 0.6 + (negative / total) * 0.3,
    };

    Classification::new(label, confidence.clamp(0.5, 0.95))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scorer() -> LexicalScorer {
        LexicalScorer::default()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_intensified_positive() {
        let breakdown = scorer().score_with_breakdown("This product is absolutely amazing!");
        // "absolutely" doubles the "amazing" hit; the single "!" does not
        // trigger the exclamation bonus (it needs more than one).
        assert!(close(breakdown.positive, 6.0));
        assert!(close(breakdown.negative, 0.0));
        // baseline 1.0 + four misses ("this", "product", "is", "absolutely")
        assert!(close(breakdown.neutral, 1.4));

        let c = breakdown.classification;
        assert_eq!(c.label, SentimentLabel::Positive);
        assert!(close(c.confidence, 0.6 + (6.0 / 7.4) * 0.3));
    }

    #[test]
    fn test_negation_flips_positive_word() {
        let c = scorer().score("not good");
        assert_eq!(c.label, SentimentLabel::Negative);
    }

    #[test]
    fn test_negation_flips_negative_word() {
        let breakdown = scorer().score_with_breakdown("not bad at all really");
        // "not bad" contributes +2 to the positive side.
        assert!(close(breakdown.positive, 2.0));
        assert!(close(breakdown.negative, 0.0));
    }

    #[test]
    fn test_empty_text_neutral_default() {
        let c = scorer().score("");
        assert_eq!(c.label, SentimentLabel::Neutral);
        assert_eq!(c.confidence, 0.5);

        let c = scorer().score("   \t  ");
        assert_eq!(c.label, SentimentLabel::Neutral);
        assert_eq!(c.confidence, 0.5);
    }

    #[test]
    fn test_contrast_marker_damps_close_scores() {
        let breakdown = scorer().score_with_breakdown("It was good but the battery life is poor");
        assert!(close(breakdown.positive, 3.0));
        assert!(close(breakdown.negative, 3.0));
        // baseline 1.0 + seven misses + 1.0 contrast bonus
        assert!(close(breakdown.neutral, 2.7));
        assert_eq!(breakdown.classification.label, SentimentLabel::Neutral);
    }

    #[test]
    fn test_exclamation_bonus_boosts_leading_side() {
        let with_bonus = scorer().score_with_breakdown("amazing!! truly great!!");
        let without = scorer().score_with_breakdown("amazing truly great");
        assert!(close(with_bonus.positive, without.positive + 2.0));
    }

    #[test]
    fn test_exclamation_bonus_skipped_when_tied() {
        // "good" (+3) and "bad" (-3) tie exactly; neither independent check
        // fires, so the totals match the bonus-free run.
        let tied = scorer().score_with_breakdown("good stuff bad stuff!! wow!!");
        let plain = scorer().score_with_breakdown("good stuff bad stuff wow");
        assert!(close(tied.positive, plain.positive));
        assert!(close(tied.negative, plain.negative));
    }

    #[test]
    fn test_question_mark_adds_neutral_evidence() {
        let asked = scorer().score_with_breakdown("is this good?");
        let stated = scorer().score_with_breakdown("is this good");
        assert!(close(asked.neutral, stated.neutral + 1.0));
    }

    #[test]
    fn test_punctuation_stripped_before_lookup() {
        let c = scorer().score("terrible, awful, horrible experience");
        assert_eq!(c.label, SentimentLabel::Negative);
    }

    #[test]
    fn test_neutral_words_apply_flatly() {
        let breakdown = scorer().score_with_breakdown("not okay");
        // "okay" is a neutral hit; negation does not touch it.
        assert!(close(breakdown.neutral, 1.0 + 0.1 + 0.5));
        assert!(close(breakdown.positive, 0.0));
        assert!(close(breakdown.negative, 0.0));
    }

    #[test]
    fn test_confidence_always_in_range() {
        let samples = [
            "",
            "?",
            "!!!!",
            "absolutely amazing wonderful perfect best",
            "terrible awful horrible worst waste",
            "not good but not bad either, okay I guess?",
            "the quick brown fox jumps over the lazy dog",
            "love love love love love love love love love",
        ];
        for text in samples {
            let c = scorer().score(text);
            assert!(
                (0.5..=0.95).contains(&c.confidence),
                "confidence {} out of range for {:?}",
                c.confidence,
                text
            );
        }
    }

    #[test]
    fn test_deterministic() {
        let text = "Really great product, but shipping was slow!";
        assert_eq!(scorer().score(text), scorer().score(text));
        assert_eq!(
            scorer().score_with_breakdown(text),
            scorer().score_with_breakdown(text)
        );
    }

    #[test]
    fn test_custom_lexicon() {
        let lexicon = Lexicon::from_word_lists(&["lit"], &["mid"], &[], &["aint"], &["hella"]);
        let scorer = LexicalScorer::new(lexicon);
        assert_eq!(scorer.score("hella lit").label, SentimentLabel::Positive);
        assert_eq!(scorer.score("this is mid and mid").label, SentimentLabel::Negative);
    }
}
