//! Lexicon-driven sentiment scoring core for customer review triage.
//!
//! This crate turns raw review text into a [`Classification`] (a discrete
//! [`SentimentLabel`] paired with a confidence score) using a fixed
//! [`Lexicon`] of positive/negative/neutral words plus contextual negation
//! and intensifier modifiers.
//!
//! ## Pieces
//!
//! - [`Lexicon`] - the read-only word lists driving the heuristic
//! - [`LexicalScorer`] - the scorer itself, plus [`ScoreBreakdown`] for
//!   explaining how a classification was reached
//! - [`SentimentClassifier`] - the seam between this local heuristic and a
//!   remote model backend; consumers depend on the trait, not the scorer
//!
//! The scorer is pure and synchronous: no I/O, no shared mutable state, safe
//! to call from any number of threads once the lexicon is built.
//!
//! ## Example
//!
//! ```
//! use review_sentiment::{LexicalScorer, SentimentLabel};
//!
//! let scorer = LexicalScorer::default();
//! let classification = scorer.score("This product is absolutely amazing!");
//! assert_eq!(classification.label, SentimentLabel::Positive);
//! ```

mod classification;
mod classifier;
mod lexicon;
mod scorer;

pub use classification::{Classification, SentimentLabel};
pub use classifier::SentimentClassifier;
pub use lexicon::Lexicon;
pub use scorer::{LexicalScorer, ScoreBreakdown};
