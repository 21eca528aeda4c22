use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use super::common::*;

fn post_request(payload: &serde_json::Value) -> Request<Body> {
    Request::post("/v1/risk-profile")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(payload).expect("serializes")))
        .expect("request builds")
}

#[tokio::test]
async fn assess_route_returns_the_full_profile() {
    let response = profile_router()
        .oneshot(post_request(&moderate_payload()))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;

    assert_eq!(payload["risk_profile"], json!("Moderate"));
    assert_eq!(payload["risk_score"], json!(56));
    assert!((payload["confidence"].as_f64().expect("float") - 0.69).abs() < 1e-9);
    assert_eq!(
        payload["reasons"].as_array().map(|reasons| reasons.len()),
        Some(6)
    );
    assert_eq!(
        payload["score_breakdown"],
        json!({
            "allocation": 8,
            "crash_reaction": 10,
            "drawdown_pain": 10,
            "expected_return": 12,
            "holding_period": 8,
            "interest_style": 8,
        })
    );
}

#[tokio::test]
async fn assess_route_rejects_invalid_codes_with_422() {
    let response = profile_router()
        .oneshot(post_request(&payload_with(
            "net_worth_allocation",
            Some(json!(7)),
        )))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;

    assert_eq!(payload["field"], json!("net_worth_allocation"));
    assert_eq!(payload["allowed_codes"], json!([0, 1, 2, 3]));
    assert!(payload["error"]
        .as_str()
        .expect("message")
        .contains("net_worth_allocation"));
}

#[tokio::test]
async fn assess_route_rejects_boolean_codes_with_422() {
    let response = profile_router()
        .oneshot(post_request(&payload_with(
            "reaction_to_50pct_drop",
            Some(json!(false)),
        )))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert_eq!(payload["field"], json!("reaction_to_50pct_drop"));
}

#[tokio::test]
async fn assess_route_rejects_non_object_bodies_with_422() {
    let response = profile_router()
        .oneshot(post_request(&json!(["not", "a", "submission"])))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert_eq!(payload["field"], json!("body"));
}

#[tokio::test]
async fn get_returns_a_method_hint() {
    let response = profile_router()
        .oneshot(
            Request::get("/v1/risk-profile")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert!(payload["message"]
        .as_str()
        .expect("message")
        .contains("POST"));
}
