use std::sync::Arc;

use axum::response::Response;
use axum::Router;
use serde_json::{json, Value};

use crate::questionnaire::codebook::{
    CrashReaction, CryptoInterest, DrawdownPain, ExpectedReturn, HoldingPeriod, NetWorthAllocation,
};
use crate::questionnaire::domain::QuestionnaireAnswer;
use crate::questionnaire::router::risk_profile_router;
use crate::questionnaire::service::RiskProfileService;

/// The mid-band submission: every scalar at code 1, no themes.
pub(super) fn moderate_payload() -> Value {
    json!({
        "crypto_interest": 1,
        "net_worth_allocation": 1,
        "holding_period": 1,
        "themes": [],
        "reaction_to_50pct_drop": 1,
        "drawdown_pain": 1,
        "expected_annual_return": 1,
    })
}

/// Moderate payload with one field overridden (or removed when `value` is
/// `None`).
pub(super) fn payload_with(field: &str, value: Option<Value>) -> Value {
    let mut payload = moderate_payload();
    let object = payload.as_object_mut().expect("payload is an object");
    match value {
        Some(value) => {
            object.insert(field.to_string(), value);
        }
        None => {
            object.remove(field);
        }
    }
    payload
}

pub(super) fn answer_from_codes(
    interest: i64,
    allocation: i64,
    holding: i64,
    reaction: i64,
    pain: i64,
    expected: i64,
) -> QuestionnaireAnswer {
    QuestionnaireAnswer {
        crypto_interest: CryptoInterest::from_code(interest).expect("valid interest code"),
        net_worth_allocation: NetWorthAllocation::from_code(allocation)
            .expect("valid allocation code"),
        holding_period: HoldingPeriod::from_code(holding).expect("valid holding code"),
        themes: Vec::new(),
        reaction_to_50pct_drop: CrashReaction::from_code(reaction).expect("valid reaction code"),
        drawdown_pain: DrawdownPain::from_code(pain).expect("valid pain code"),
        expected_annual_return: ExpectedReturn::from_code(expected).expect("valid return code"),
    }
}

pub(super) fn profile_router() -> Router {
    risk_profile_router(Arc::new(RiskProfileService::new()))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    serde_json::from_slice(&bytes).expect("body is json")
}
