//! Tab-separated review dataset loading.
//!
//! The expected shape is the classic review export: one review per line,
//! optionally followed by a tab and a numeric rating, with an optional
//! header row. Blank lines are skipped; anything else malformed is a typed
//! parse error carrying its line number.

use crate::{PipelineError, PipelineResult};
use rand::seq::SliceRandom;
use rand::Rng;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// One review row: the text plus the rating column when present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub text: String,
    pub rating: Option<u8>,
}

/// An in-memory review dataset.
#[derive(Debug, Clone, Default)]
pub struct ReviewDataset {
    reviews: Vec<Review>,
}

/// Built-in reviews used when no dataset file is supplied.
const FALLBACK_REVIEWS: &[&str] = &[
    "This product is absolutely amazing, best purchase I've made all year!",
    "Terrible quality, it broke after two days and the refund process was slow.",
    "It was good but the battery life is poor.",
    "Okay product, nothing special, does what it says.",
    "I love it! Really comfortable and the delivery was fast.",
    "Not good. Not bad either, I guess?",
];

impl ReviewDataset {
    /// Parse tab-separated dataset content.
    ///
    /// The first row is treated as a header when its second column exists
    /// and is not numeric. Extra columns beyond the second are ignored.
    pub fn parse_tsv(content: &str) -> PipelineResult<Self> {
        let mut reviews = Vec::new();

        for (index, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let line_number = index + 1;
            let mut columns = line.split('\t');
            let text = columns.next().unwrap_or("").trim();
            let rating_column = columns.next().map(str::trim);

            let rating = match rating_column {
                Some(raw) if !raw.is_empty() => match raw.parse::<u8>() {
                    Ok(value) => Some(value),
                    // Non-numeric rating on the first row is a header; skip it.
                    Err(_) if reviews.is_empty() && line_number == 1 => continue,
                    Err(_) => {
                        return Err(PipelineError::Parse {
                            line: line_number,
                            message: format!("rating column is not numeric: {:?}", raw),
                        });
                    }
                },
                _ => None,
            };

            if text.is_empty() {
                return Err(PipelineError::Parse {
                    line: line_number,
                    message: "empty review text".to_string(),
                });
            }

            reviews.push(Review {
                text: text.to_string(),
                rating,
            });
        }

        debug!(count = reviews.len(), "parsed review dataset");
        Ok(Self { reviews })
    }

    /// Load and parse a dataset file.
    pub fn load(path: &Path) -> PipelineResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| PipelineError::Load {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::parse_tsv(&content)
    }

    /// The built-in static review list used when no dataset is supplied.
    pub fn fallback() -> Self {
        warn!("no dataset supplied, using built-in fallback reviews");
        Self {
            reviews: FALLBACK_REVIEWS
                .iter()
                .map(|text| Review {
                    text: text.to_string(),
                    rating: None,
                })
                .collect(),
        }
    }

    /// Pick one review at random.
    pub fn pick_random<R: Rng + ?Sized>(&self, rng: &mut R) -> PipelineResult<&Review> {
        self.reviews
            .as_slice()
            .choose(rng)
            .ok_or(PipelineError::EmptyDataset)
    }

    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Review> {
        self.reviews.iter()
    }
}
