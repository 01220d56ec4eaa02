//! Action codes and the static presentation table behind them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Discrete business response to a review: exactly three variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionCode {
    /// Churn-risk response: the customer is unhappy, offer a discount.
    OfferCoupon,
    /// Ambiguous/neutral response: ask the customer to say more.
    RequestFeedback,
    /// Satisfied-customer response: ask for a referral.
    AskReferral,
}

/// The fixed message/color/icon triple each action renders with.
struct ActionTemplate {
    message: &'static str,
    severity_color: &'static str,
    icon: &'static str,
}

const OFFER_COUPON: ActionTemplate = ActionTemplate {
    message: "We're sorry this fell short. Here's a coupon for your next \
              order. We'd love another chance.",
    severity_color: "#e74c3c",
    icon: "🎟️",
};

const REQUEST_FEEDBACK: ActionTemplate = ActionTemplate {
    message: "Thanks for your review! Could you tell us a bit more about \
              your experience?",
    severity_color: "#f39c12",
    icon: "📝",
};

const ASK_REFERRAL: ActionTemplate = ActionTemplate {
    message: "So glad you're happy! Would you recommend us to a friend?",
    severity_color: "#2ecc71",
    icon: "🌟",
};

impl ActionCode {
    /// Wire-format name of this action.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionCode::OfferCoupon => "OFFER_COUPON",
            ActionCode::RequestFeedback => "REQUEST_FEEDBACK",
            ActionCode::AskReferral => "ASK_REFERRAL",
        }
    }

    fn template(&self) -> &'static ActionTemplate {
        match self {
            ActionCode::OfferCoupon => &OFFER_COUPON,
            ActionCode::RequestFeedback => &REQUEST_FEEDBACK,
            ActionCode::AskReferral => &ASK_REFERRAL,
        }
    }
}

impl fmt::Display for ActionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved business decision, ready for a presentation layer.
///
/// Built deterministically from an [`ActionCode`] by static lookup; carries
/// no identity or lifecycle beyond the call that constructed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Decision {
    /// The selected action.
    pub action: ActionCode,
    /// Customer-facing message template for this action.
    pub message: &'static str,
    /// Display color (hex) signalling severity.
    pub severity_color: &'static str,
    /// Icon identifier for the UI.
    pub icon: &'static str,
}

impl Decision {
    /// Look up the fixed presentation triple for an action.
    pub fn for_action(action: ActionCode) -> Self {
        let template = action.template();
        Self {
            action,
            message: template.message,
            severity_color: template.severity_color,
            icon: template.icon,
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.icon, self.message)
    }
}
