use serde_json::{Map, Value};

use super::codebook::{
    CrashReaction, CryptoInterest, DrawdownPain, ExpectedReturn, HoldingPeriod, InvestmentTheme,
    NetWorthAllocation,
};
use super::domain::QuestionnaireAnswer;

/// Validation failure naming the offending field and its legal codes.
///
/// Raised by the validator only; the scorer is total over validated input.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub allowed_codes: &'static [i64],
    pub message: String,
}

impl ValidationError {
    fn missing(field: &'static str, allowed: &'static [i64]) -> Self {
        Self {
            field,
            allowed_codes: allowed,
            message: format!("{field} is required."),
        }
    }

    fn boolean(field: &'static str, allowed: &'static [i64]) -> Self {
        Self {
            field,
            allowed_codes: allowed,
            message: format!("{field} must be an integer code, not true/false."),
        }
    }

    fn not_integer(field: &'static str, allowed: &'static [i64]) -> Self {
        Self {
            field,
            allowed_codes: allowed,
            message: format!("{field} must be an integer code like {allowed:?}."),
        }
    }

    fn out_of_range(field: &'static str, allowed: &'static [i64]) -> Self {
        Self {
            field,
            allowed_codes: allowed,
            message: format!("{field} must be one of {allowed:?}."),
        }
    }

    fn themes_not_a_list() -> Self {
        Self {
            field: "themes",
            allowed_codes: InvestmentTheme::CODES,
            message: "themes must be a list of integer codes.".to_string(),
        }
    }

    /// Body-level rejection for payloads that never reach field checks.
    pub fn malformed_body(message: impl Into<String>) -> Self {
        Self {
            field: "body",
            allowed_codes: &[],
            message: message.into(),
        }
    }
}

/// Extract a raw integer code, rejecting booleans and non-integer values.
///
/// Booleans get a dedicated rejection; several client languages coerce them
/// to 0/1 and a coerced answer must not reach the rubric.
fn code_value(
    value: &Value,
    field: &'static str,
    allowed: &'static [i64],
) -> Result<i64, ValidationError> {
    match value {
        Value::Bool(_) => Err(ValidationError::boolean(field, allowed)),
        Value::Number(number) => number
            .as_i64()
            .ok_or_else(|| ValidationError::not_integer(field, allowed)),
        _ => Err(ValidationError::not_integer(field, allowed)),
    }
}

fn scalar_code(
    object: &Map<String, Value>,
    field: &'static str,
    allowed: &'static [i64],
) -> Result<i64, ValidationError> {
    let value = object
        .get(field)
        .ok_or_else(|| ValidationError::missing(field, allowed))?;
    code_value(value, field, allowed)
}

fn themes_from(object: &Map<String, Value>) -> Result<Vec<InvestmentTheme>, ValidationError> {
    match object.get("themes") {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => {
            let mut themes = Vec::with_capacity(items.len());
            for item in items {
                let code = code_value(item, "themes", InvestmentTheme::CODES)?;
                let theme = InvestmentTheme::from_code(code).ok_or_else(|| {
                    ValidationError::out_of_range("themes", InvestmentTheme::CODES)
                })?;
                themes.push(theme);
            }
            Ok(themes)
        }
        Some(_) => Err(ValidationError::themes_not_a_list()),
    }
}

/// Validate a raw submission into a codebook-checked answer record.
///
/// Every scalar field is mandatory; `themes` alone normalizes to empty when
/// missing or null. Duplicates in `themes` are kept as submitted.
pub fn validate(raw: &Value) -> Result<QuestionnaireAnswer, ValidationError> {
    let object = raw
        .as_object()
        .ok_or_else(|| ValidationError::malformed_body("request body must be a JSON object."))?;

    let crypto_interest = CryptoInterest::from_code(scalar_code(
        object,
        "crypto_interest",
        CryptoInterest::CODES,
    )?)
    .ok_or_else(|| ValidationError::out_of_range("crypto_interest", CryptoInterest::CODES))?;

    let net_worth_allocation = NetWorthAllocation::from_code(scalar_code(
        object,
        "net_worth_allocation",
        NetWorthAllocation::CODES,
    )?)
    .ok_or_else(|| {
        ValidationError::out_of_range("net_worth_allocation", NetWorthAllocation::CODES)
    })?;

    let holding_period =
        HoldingPeriod::from_code(scalar_code(object, "holding_period", HoldingPeriod::CODES)?)
            .ok_or_else(|| ValidationError::out_of_range("holding_period", HoldingPeriod::CODES))?;

    let themes = themes_from(object)?;

    let reaction_to_50pct_drop = CrashReaction::from_code(scalar_code(
        object,
        "reaction_to_50pct_drop",
        CrashReaction::CODES,
    )?)
    .ok_or_else(|| ValidationError::out_of_range("reaction_to_50pct_drop", CrashReaction::CODES))?;

    let drawdown_pain =
        DrawdownPain::from_code(scalar_code(object, "drawdown_pain", DrawdownPain::CODES)?)
            .ok_or_else(|| ValidationError::out_of_range("drawdown_pain", DrawdownPain::CODES))?;

    let expected_annual_return = ExpectedReturn::from_code(scalar_code(
        object,
        "expected_annual_return",
        ExpectedReturn::CODES,
    )?)
    .ok_or_else(|| {
        ValidationError::out_of_range("expected_annual_return", ExpectedReturn::CODES)
    })?;

    Ok(QuestionnaireAnswer {
        crypto_interest,
        net_worth_allocation,
        holding_period,
        themes,
        reaction_to_50pct_drop,
        drawdown_pain,
        expected_annual_return,
    })
}
