//! End-to-end coverage: dataset in, audit record out.

use crate::{AuditRecord, ReviewDataset, ReviewPipeline};
use rand::rngs::StdRng;
use rand::SeedableRng;
use review_actions::ActionCode;
use review_sentiment::SentimentLabel;

#[test]
fn test_dataset_to_audit_record() {
    let dataset = ReviewDataset::parse_tsv(
        "Review\tLiked\n\
         This product is absolutely amazing!\t1\n\
         Terrible, broke after two days, want a refund\t0\n",
    )
    .unwrap();

    let pipeline = ReviewPipeline::lexical();
    let mut rng = StdRng::seed_from_u64(1);
    let analysis = pipeline.analyze_random(&dataset, &mut rng).unwrap();

    let record = AuditRecord::new(&analysis);
    assert_eq!(record.review_text, analysis.text);
    let json = record.to_json().unwrap();
    assert!(json.contains(analysis.decision.action.as_str()));
}

#[test]
fn test_every_fallback_review_resolves() {
    let pipeline = ReviewPipeline::lexical();
    for review in ReviewDataset::fallback().iter() {
        let analysis = pipeline.analyze(&review.text);
        assert!(
            (0.5..=0.95).contains(&analysis.classification.confidence),
            "confidence out of range for {:?}",
            review.text
        );
        assert!(matches!(
            analysis.decision.action,
            ActionCode::OfferCoupon | ActionCode::RequestFeedback | ActionCode::AskReferral
        ));
    }
}

#[test]
fn test_mixed_review_lands_in_feedback_bucket() {
    // Close positive/negative evidence plus a contrast marker damps to
    // neutral, and neutral always requests feedback.
    let analysis = ReviewPipeline::lexical().analyze("It was good but the battery life is poor");
    assert_eq!(analysis.classification.label, SentimentLabel::Neutral);
    assert_eq!(analysis.decision.action, ActionCode::RequestFeedback);
}

#[test]
fn test_backend_classification_feeds_resolver() {
    use crate::parse_backend_response;
    use review_actions::ActionResolver;

    let classification =
        parse_backend_response(r#"[[{"label": "NEGATIVE", "score": 0.92}]]"#).unwrap();
    let decision = ActionResolver::new().resolve(&classification);
    assert_eq!(decision.action, ActionCode::OfferCoupon);
}
