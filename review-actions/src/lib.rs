//! Business-action resolution for review-sentiment classifications.
//!
//! Maps a `(label, confidence)` pair onto one of three discrete business
//! responses via a normalized-score decision table:
//!
//! - [`ActionCode::OfferCoupon`] - churn-risk response for unhappy customers
//! - [`ActionCode::RequestFeedback`] - follow-up for ambiguous/neutral reviews
//! - [`ActionCode::AskReferral`] - referral ask for satisfied customers
//!
//! The resolver is total over all valid classifications and never fails.

mod action;
mod resolver;

pub use action::{ActionCode, Decision};
pub use resolver::ActionResolver;
