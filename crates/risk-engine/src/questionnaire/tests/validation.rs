use serde_json::json;

use super::common::*;
use crate::questionnaire::codebook::InvestmentTheme;
use crate::questionnaire::validate::validate;

#[test]
fn accepts_a_complete_submission() {
    let answer = validate(&moderate_payload()).expect("valid payload");
    assert!(answer.themes.is_empty());
    assert_eq!(answer.crypto_interest.code(), 1);
    assert_eq!(answer.net_worth_allocation.code(), 1);
}

#[test]
fn rejects_boolean_codes_even_though_integer_compatible() {
    let error = validate(&payload_with("crypto_interest", Some(json!(true))))
        .expect_err("boolean must be rejected");

    assert_eq!(error.field, "crypto_interest");
    assert!(error.message.contains("not true/false"));
}

#[test]
fn rejects_out_of_range_codes_naming_the_field() {
    let error = validate(&payload_with("crypto_interest", Some(json!(4))))
        .expect_err("code 4 is out of range");

    assert_eq!(error.field, "crypto_interest");
    assert_eq!(error.allowed_codes, &[0, 1, 2, 3]);
    assert!(error.message.contains("[0, 1, 2, 3]"));
}

#[test]
fn rejects_missing_required_field_naming_it() {
    let error = validate(&payload_with("drawdown_pain", None)).expect_err("field is required");

    assert_eq!(error.field, "drawdown_pain");
    assert!(error.message.contains("required"));
}

#[test]
fn rejects_non_integer_codes() {
    let error = validate(&payload_with("expected_annual_return", Some(json!("1"))))
        .expect_err("string codes are invalid");
    assert_eq!(error.field, "expected_annual_return");

    let error = validate(&payload_with("expected_annual_return", Some(json!(1.5))))
        .expect_err("fractional codes are invalid");
    assert_eq!(error.field, "expected_annual_return");
}

#[test]
fn missing_themes_defaults_to_empty() {
    let answer = validate(&payload_with("themes", None)).expect("themes are optional");
    assert!(answer.themes.is_empty());
}

#[test]
fn null_themes_defaults_to_empty() {
    let answer = validate(&payload_with("themes", Some(json!(null)))).expect("null themes allowed");
    assert!(answer.themes.is_empty());
}

#[test]
fn rejects_non_array_themes() {
    let error =
        validate(&payload_with("themes", Some(json!(2)))).expect_err("themes must be a list");

    assert_eq!(error.field, "themes");
    assert!(error.message.contains("list"));
}

#[test]
fn rejects_first_invalid_theme_element() {
    let error = validate(&payload_with("themes", Some(json!([0, 9, 1]))))
        .expect_err("theme 9 is out of range");

    assert_eq!(error.field, "themes");
    assert_eq!(error.allowed_codes, InvestmentTheme::CODES);
}

#[test]
fn rejects_boolean_theme_elements() {
    let error = validate(&payload_with("themes", Some(json!([true]))))
        .expect_err("boolean theme elements are invalid");

    assert_eq!(error.field, "themes");
    assert!(error.message.contains("not true/false"));
}

#[test]
fn keeps_duplicate_themes_in_submission_order() {
    let answer = validate(&payload_with("themes", Some(json!([3, 1, 3]))))
        .expect("duplicates are permitted");

    let codes: Vec<i64> = answer.themes.iter().map(|theme| theme.code()).collect();
    assert_eq!(codes, vec![3, 1, 3]);
}

#[test]
fn rejects_non_object_bodies() {
    let error = validate(&json!([1, 2, 3])).expect_err("arrays are not submissions");
    assert_eq!(error.field, "body");
    assert!(error.message.contains("JSON object"));
}
