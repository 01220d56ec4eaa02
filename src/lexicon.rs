//! The fixed word lists driving the lexical scorer.
//!
//! Five sets: positive, negative, and neutral sentiment words, plus negation
//! markers and intensifiers that modify the word that follows them. The
//! default lexicon is built once behind a [`Lazy`] and shared read-only for
//! the life of the process; scoring never mutates it.

use once_cell::sync::Lazy;
use std::collections::HashSet;

const POSITIVE_WORDS: &[&str] = &[
    "good",
    "great",
    "excellent",
    "amazing",
    "awesome",
    "fantastic",
    "wonderful",
    "superb",
    "perfect",
    "best",
    "love",
    "loved",
    "loves",
    "happy",
    "pleased",
    "satisfied",
    "delighted",
    "impressive",
    "outstanding",
    "brilliant",
    "nice",
    "enjoyable",
    "recommend",
    "recommended",
    "reliable",
    "comfortable",
    "beautiful",
    "smooth",
    "fast",
    "helpful",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad",
    "poor",
    "terrible",
    "awful",
    "horrible",
    "worst",
    "hate",
    "hated",
    "hates",
    "disappointing",
    "disappointed",
    "disappointment",
    "broken",
    "useless",
    "defective",
    "faulty",
    "waste",
    "slow",
    "flimsy",
    "annoying",
    "frustrating",
    "unreliable",
    "uncomfortable",
    "refund",
    "return",
    "cheap",
    "noisy",
    "ugly",
    "overpriced",
    "mediocre",
];

const NEUTRAL_WORDS: &[&str] = &[
    "ok",
    "okay",
    "fine",
    "average",
    "decent",
    "fair",
    "normal",
    "standard",
    "typical",
    "acceptable",
    "adequate",
    "ordinary",
    "reasonable",
];

// Contractions appear apostrophe-less because token cleaning strips
// non-word characters before lookup ("don't" -> "dont").
const NEGATION_WORDS: &[&str] = &[
    "not",
    "no",
    "never",
    "neither",
    "nor",
    "nothing",
    "cannot",
    "cant",
    "wont",
    "dont",
    "doesnt",
    "didnt",
    "isnt",
    "wasnt",
    "arent",
    "werent",
    "wouldnt",
    "shouldnt",
    "couldnt",
    "hasnt",
    "havent",
    "hadnt",
    "hardly",
    "barely",
];

const INTENSIFIER_WORDS: &[&str] = &[
    "very",
    "really",
    "extremely",
    "absolutely",
    "totally",
    "completely",
    "incredibly",
    "highly",
    "truly",
    "super",
    "so",
    "quite",
];

/// The five read-only word sets consulted during scoring.
///
/// By convention the positive/negative/neutral sets are disjoint; lookups
/// happen in that priority order so an accidental overlap resolves to the
/// first set that claims the word.
#[derive(Debug, Clone)]
pub struct Lexicon {
    positive: HashSet<String>,
    negative: HashSet<String>,
    neutral: HashSet<String>,
    negation: HashSet<String>,
    intensifier: HashSet<String>,
}

static DEFAULT_LEXICON: Lazy<Lexicon> = Lazy::new(|| {
    Lexicon::from_word_lists(
        POSITIVE_WORDS,
        NEGATIVE_WORDS,
        NEUTRAL_WORDS,
        NEGATION_WORDS,
        INTENSIFIER_WORDS,
    )
});

impl Lexicon {
    /// Build a lexicon from explicit word lists. Words are stored lowercase.
    pub fn from_word_lists(
        positive: &[&str],
        negative: &[&str],
        neutral: &[&str],
        negation: &[&str],
        intensifier: &[&str],
    ) -> Self {
        fn to_set(words: &[&str]) -> HashSet<String> {
            words.iter().map(|w| w.to_lowercase()).collect()
        }
        Self {
            positive: to_set(positive),
            negative: to_set(negative),
            neutral: to_set(neutral),
            negation: to_set(negation),
            intensifier: to_set(intensifier),
        }
    }

    /// The process-wide default lexicon, built on first use.
    pub fn default_ref() -> &'static Lexicon {
        &DEFAULT_LEXICON
    }

    pub fn is_positive(&self, word: &str) -> bool {
        self.positive.contains(word)
    }

    pub fn is_negative(&self, word: &str) -> bool {
        self.negative.contains(word)
    }

    pub fn is_neutral(&self, word: &str) -> bool {
        self.neutral.contains(word)
    }

    pub fn is_negation(&self, word: &str) -> bool {
        self.negation.contains(word)
    }

    pub fn is_intensifier(&self, word: &str) -> bool {
        self.intensifier.contains(word)
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        DEFAULT_LEXICON.clone()
    }
}
