//! Error taxonomy for the pipeline boundaries.
//!
//! The scoring core itself never fails; errors only arise where untyped
//! data enters: dataset files, backend response payloads, and the audit
//! serialization boundary.

use thiserror::Error;

/// Errors that can occur around the triage pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Error parsing a dataset row.
    #[error("parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Error loading a dataset file.
    #[error("failed to load dataset: {path}: {message}")]
    Load { path: String, message: String },

    /// A random pick was requested from a dataset with no reviews.
    #[error("dataset contains no reviews")]
    EmptyDataset,

    /// The backend response did not match any accepted shape.
    #[error("malformed backend response: {0}")]
    MalformedResponse(String),

    /// The backend returned a label outside the known vocabulary.
    #[error("unknown sentiment label: {0:?}")]
    UnknownLabel(String),

    /// A backend field held a value the contract rules out.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Error serializing an audit record.
    #[error("failed to serialize audit record: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;
