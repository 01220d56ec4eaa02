//! Typed validation of remote sentiment backend responses.
//!
//! Hosted sentiment models answer in a handful of near-identical shapes:
//! a nested candidate list `[[{"label", "score"}]]`, a flat list, or a bare
//! object. Instead of probing nested arrays at every call site, the payload
//! is deserialized into a tagged variant once at the boundary and anything
//! that does not fit is a typed error, never a silent neutral default.

use crate::{PipelineError, PipelineResult};
use review_sentiment::{Classification, SentimentLabel};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct LabelScore {
    label: String,
    score: f64,
}

/// The accepted response shapes, tried in order.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum BackendPayload {
    Nested(Vec<Vec<LabelScore>>),
    Flat(Vec<LabelScore>),
    Single(LabelScore),
}

/// Parse a backend response body into a [`Classification`].
///
/// Takes the first candidate (the shapes above are already ranked by the
/// model), maps its label through the known vocabulary, and rejects scores
/// outside `[0, 1]`.
pub fn parse_backend_response(body: &str) -> PipelineResult<Classification> {
    let payload: BackendPayload = serde_json::from_str(body)
        .map_err(|e| PipelineError::MalformedResponse(e.to_string()))?;

    let first = match payload {
        BackendPayload::Nested(groups) => groups.into_iter().flatten().next(),
        BackendPayload::Flat(candidates) => candidates.into_iter().next(),
        BackendPayload::Single(candidate) => Some(candidate),
    }
    .ok_or_else(|| PipelineError::MalformedResponse("no candidates in response".to_string()))?;

    let label = map_label(&first.label)?;

    if !(0.0..=1.0).contains(&first.score) {
        return Err(PipelineError::InvalidArgument(format!(
            "score {} outside [0, 1]",
            first.score
        )));
    }

    Ok(Classification::new(label, first.score))
}

/// Map a backend label string onto the three-variant vocabulary.
///
/// Accepts the plain names case-insensitively plus the `LABEL_n` aliases
/// some hosted models emit.
fn map_label(raw: &str) -> PipelineResult<SentimentLabel> {
    match raw.to_uppercase().as_str() {
        "POSITIVE" | "POS" | "LABEL_2" => Ok(SentimentLabel::Positive),
        "NEGATIVE" | "NEG" | "LABEL_0" => Ok(SentimentLabel::Negative),
        "NEUTRAL" | "LABEL_1" => Ok(SentimentLabel::Neutral),
        _ => Err(PipelineError::UnknownLabel(raw.to_string())),
    }
}
