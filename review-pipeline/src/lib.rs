//! Review triage pipeline for review-sentiment.
//!
//! The collaborators around the pure scoring core:
//!
//! - [`ReviewDataset`] - tab-separated review dataset parsing, file loading,
//!   random review selection, and the built-in fallback list
//! - [`parse_backend_response`] - typed validation of a remote sentiment
//!   model's response shape, replacing duck-typed array probing with a
//!   single boundary check
//! - [`ReviewPipeline`] - classifier + action resolver composition producing
//!   a [`ReviewAnalysis`] per review
//! - [`AuditRecord`] - the serializable log record an audit sink receives
//!
//! Errors across these boundaries share the [`PipelineError`] taxonomy.

mod audit;
mod backend;
mod dataset;
mod error;
mod pipeline;

pub use audit::AuditRecord;
pub use backend::parse_backend_response;
pub use dataset::{Review, ReviewDataset};
pub use error::{PipelineError, PipelineResult};
pub use pipeline::{ReviewAnalysis, ReviewPipeline};
