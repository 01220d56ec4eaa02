//! The audit log record.
//!
//! One record per triaged review: when it happened, the originating text,
//! what the classifier said, and which action was selected. Transport (a
//! spreadsheet webhook in the reference deployment) is the sink's concern;
//! this module only defines the shape and its JSON rendering.

use crate::{PipelineResult, ReviewAnalysis};
use chrono::{DateTime, Utc};
use review_actions::ActionCode;
use review_sentiment::SentimentLabel;
use serde::Serialize;

/// A serializable audit record for one triaged review.
#[derive(Debug, Clone, Serialize)]
pub struct AuditRecord {
    pub timestamp: DateTime<Utc>,
    pub review_text: String,
    pub label: SentimentLabel,
    pub confidence: f64,
    pub action: ActionCode,
}

impl AuditRecord {
    /// Build a record for an analysis, stamped with the current time.
    pub fn new(analysis: &ReviewAnalysis) -> Self {
        Self::at(Utc::now(), analysis)
    }

    /// Build a record with an explicit timestamp.
    pub fn at(timestamp: DateTime<Utc>, analysis: &ReviewAnalysis) -> Self {
        Self {
            timestamp,
            review_text: analysis.text.clone(),
            label: analysis.classification.label,
            confidence: analysis.classification.confidence,
            action: analysis.decision.action,
        }
    }

    /// Render the record as a JSON object for the audit sink.
    pub fn to_json(&self) -> PipelineResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
