use serde_json::Value;

use super::domain::ScoringResult;
use super::scoring::ScoringEngine;
use super::validate::{validate, ValidationError};

/// Facade composing the validator and the scoring engine.
///
/// Stateless; one instance can serve arbitrarily many concurrent requests
/// with no coordination.
#[derive(Debug, Clone, Copy, Default)]
pub struct RiskProfileService {
    engine: ScoringEngine,
}

impl RiskProfileService {
    pub fn new() -> Self {
        Self {
            engine: ScoringEngine::new(),
        }
    }

    /// Validate a raw submission and score it.
    ///
    /// The only failure mode is a validation rejection; scoring is total over
    /// the validated domain.
    pub fn assess(&self, raw: &Value) -> Result<ScoringResult, ValidationError> {
        let answer = validate(raw)?;
        Ok(self.engine.score(&answer))
    }
}
