use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::domain::ScoringResult;
use super::service::RiskProfileService;
use crate::error::AppError;

/// Router builder exposing the risk-profile assessment endpoint.
pub fn risk_profile_router(service: Arc<RiskProfileService>) -> Router {
    Router::new()
        .route(
            "/v1/risk-profile",
            post(assess_handler).get(method_hint_handler),
        )
        .with_state(service)
}

/// Response contract for the assessment endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskProfileResponse {
    pub risk_profile: String,
    pub risk_score: u8,
    pub confidence: f64,
    pub reasons: Vec<String>,
    pub score_breakdown: BTreeMap<String, u8>,
}

impl From<&ScoringResult> for RiskProfileResponse {
    fn from(result: &ScoringResult) -> Self {
        Self {
            risk_profile: result.profile.label().to_string(),
            risk_score: result.score,
            confidence: result.confidence,
            reasons: result.reasons(),
            score_breakdown: result
                .breakdown()
                .into_iter()
                .map(|(key, points)| (key.to_string(), points))
                .collect(),
        }
    }
}

/// The body is taken as raw JSON so the validator can name the offending
/// field and reject booleans instead of letting the extractor coerce or
/// swallow them.
pub(crate) async fn assess_handler(
    State(service): State<Arc<RiskProfileService>>,
    Json(payload): Json<Value>,
) -> Result<Json<RiskProfileResponse>, AppError> {
    let result = service.assess(&payload)?;
    Ok(Json(RiskProfileResponse::from(&result)))
}

pub(crate) async fn method_hint_handler() -> Json<Value> {
    Json(json!({
        "message": "This endpoint requires POST. Submit the questionnaire JSON in the request body.",
    }))
}
