//! Questionnaire intake, validation, and risk scoring.
//!
//! The validator turns raw JSON into a codebook-checked [`QuestionnaireAnswer`];
//! the scoring engine maps that record to a [`ScoringResult`] with a
//! per-factor explanation trail. Both are pure and stateless.

pub mod codebook;
pub mod domain;
pub mod router;
pub(crate) mod scoring;
pub mod service;
pub(crate) mod validate;

#[cfg(test)]
mod tests;

pub use codebook::{
    CrashReaction, CryptoInterest, DrawdownPain, ExpectedReturn, HoldingPeriod, InvestmentTheme,
    NetWorthAllocation,
};
pub use domain::{QuestionnaireAnswer, RiskProfile, ScoreComponent, ScoreFactor, ScoringResult};
pub use router::{risk_profile_router, RiskProfileResponse};
pub use scoring::ScoringEngine;
pub use service::RiskProfileService;
pub use validate::{validate, ValidationError};
