use super::super::domain::RiskProfile;

/// Scores at or below the first boundary are Conservative, at or below the
/// second Moderate, above it Aggressive.
const TIER_BOUNDARIES: [u8; 2] = [35, 70];

const CONFIDENCE_FLOOR: f64 = 0.55;
const CONFIDENCE_CEILING: f64 = 0.90;

pub(crate) fn tier_for(score: u8) -> RiskProfile {
    if score <= TIER_BOUNDARIES[0] {
        RiskProfile::Conservative
    } else if score <= TIER_BOUNDARIES[1] {
        RiskProfile::Moderate
    } else {
        RiskProfile::Aggressive
    }
}

/// Heuristic certainty from distance to the nearest tier boundary.
///
/// Scores sitting on a boundary get the floor; the ceiling is unreachable
/// with the current tables (max distance 30 at score 100) but the clamp stays
/// in place so table edits cannot push confidence past it.
pub(crate) fn confidence_for(score: u8) -> f64 {
    let distance = TIER_BOUNDARIES
        .iter()
        .map(|boundary| (i16::from(score) - i16::from(*boundary)).abs())
        .min()
        .unwrap_or_default();

    (CONFIDENCE_FLOOR + f64::from(distance) / 100.0).clamp(CONFIDENCE_FLOOR, CONFIDENCE_CEILING)
}
