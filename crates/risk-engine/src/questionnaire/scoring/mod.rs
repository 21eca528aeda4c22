pub(crate) mod rules;
pub(crate) mod tiers;

use super::domain::{QuestionnaireAnswer, ScoringResult};

/// Stateless scorer applying the fixed rubric to a validated answer record.
///
/// Deterministic and total: six table lookups, a clamped sum, the tier
/// mapping, and the boundary-distance confidence heuristic. Themes never
/// influence the outcome.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoringEngine;

impl ScoringEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn score(&self, answer: &QuestionnaireAnswer) -> ScoringResult {
        let (components, total) = rules::score_answers(answer);

        // Clamp into the published 0-100 range; maximal combinations that
        // include the dip-buying crash response sum to 104.
        let score = total.min(100) as u8;

        ScoringResult {
            profile: tiers::tier_for(score),
            score,
            confidence: tiers::confidence_for(score),
            components,
        }
    }
}
