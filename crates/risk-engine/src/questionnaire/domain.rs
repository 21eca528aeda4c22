use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::codebook::{
    CrashReaction, CryptoInterest, DrawdownPain, ExpectedReturn, HoldingPeriod, InvestmentTheme,
    NetWorthAllocation,
};

/// The validated, codebook-checked questionnaire record.
///
/// Constructed once per request by the validator and discarded after scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionnaireAnswer {
    pub crypto_interest: CryptoInterest,
    pub net_worth_allocation: NetWorthAllocation,
    pub holding_period: HoldingPeriod,
    pub themes: Vec<InvestmentTheme>,
    pub reaction_to_50pct_drop: CrashReaction,
    pub drawdown_pain: DrawdownPain,
    pub expected_annual_return: ExpectedReturn,
}

/// Three-tier classification derived from the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskProfile {
    Conservative,
    Moderate,
    Aggressive,
}

impl RiskProfile {
    pub const fn label(self) -> &'static str {
        match self {
            RiskProfile::Conservative => "Conservative",
            RiskProfile::Moderate => "Moderate",
            RiskProfile::Aggressive => "Aggressive",
        }
    }
}

/// Factors permitted in the scoring rubric, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    Allocation,
    CrashReaction,
    DrawdownPain,
    ExpectedReturn,
    HoldingPeriod,
    InterestStyle,
}

impl ScoreFactor {
    /// Breakdown key exposed in API responses.
    pub const fn key(self) -> &'static str {
        match self {
            ScoreFactor::Allocation => "allocation",
            ScoreFactor::CrashReaction => "crash_reaction",
            ScoreFactor::DrawdownPain => "drawdown_pain",
            ScoreFactor::ExpectedReturn => "expected_return",
            ScoreFactor::HoldingPeriod => "holding_period",
            ScoreFactor::InterestStyle => "interest_style",
        }
    }
}

/// Discrete contribution to an assessment, allowing transparent audits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: ScoreFactor,
    pub points: u8,
    pub reason: String,
}

/// Assessment output describing the composite score and explanation trail.
///
/// `components` is ordered by factor evaluation order; the reasons list and
/// the breakdown map are derived views over it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringResult {
    pub profile: RiskProfile,
    pub score: u8,
    pub confidence: f64,
    pub components: Vec<ScoreComponent>,
}

impl ScoringResult {
    /// One explanation per factor, in evaluation order.
    pub fn reasons(&self) -> Vec<String> {
        self.components
            .iter()
            .map(|component| component.reason.clone())
            .collect()
    }

    /// Factor key to point contribution. The six keys sort identically to the
    /// evaluation order, so the rendered map is stable.
    pub fn breakdown(&self) -> BTreeMap<&'static str, u8> {
        self.components
            .iter()
            .map(|component| (component.factor.key(), component.points))
            .collect()
    }
}
