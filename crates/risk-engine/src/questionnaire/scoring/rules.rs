use super::super::codebook::{
    CrashReaction, CryptoInterest, DrawdownPain, ExpectedReturn, HoldingPeriod, NetWorthAllocation,
};
use super::super::domain::{QuestionnaireAnswer, ScoreComponent, ScoreFactor};

/// Apply the six factor tables in evaluation order.
///
/// Each lookup contributes a point value and one fixed explanation. The
/// crash-reaction and interest tables are deliberately non-monotonic in code
/// order; the weights are literal domain data and must not be replaced by a
/// formula.
pub(crate) fn score_answers(answer: &QuestionnaireAnswer) -> (Vec<ScoreComponent>, u32) {
    let mut components = Vec::with_capacity(6);
    let mut total: u32 = 0;

    let (points, reason) = match answer.net_worth_allocation {
        NetWorthAllocation::UnderOnePercent => (
            2,
            "Allocation <1% indicates testing the waters (lower risk appetite).",
        ),
        NetWorthAllocation::OneToFivePercent => (
            8,
            "Allocation 1–5% aligns with institutional standard (moderate risk).",
        ),
        NetWorthAllocation::FiveToTenPercent => (
            15,
            "Allocation 5–10% suggests aggressive/strategic exposure (higher risk).",
        ),
        NetWorthAllocation::TenPercentPlus => (
            22,
            "Allocation 10%+ suggests high conviction/crypto-native (high risk appetite).",
        ),
    };
    components.push(ScoreComponent {
        factor: ScoreFactor::Allocation,
        points,
        reason: reason.to_string(),
    });
    total += u32::from(points);

    // Not ordered by code: following a backtested plan sits between holding
    // and buying the dip.
    let (points, reason) = match answer.reaction_to_50pct_drop {
        CrashReaction::Liquidate => (
            0,
            "Liquidating immediately suggests low tolerance for volatility.",
        ),
        CrashReaction::Hold => (
            10,
            "Holding through a 50% drop suggests moderate tolerance for volatility.",
        ),
        CrashReaction::BuyTheDip => (
            18,
            "Buying the dip suggests strong tolerance for drawdowns (higher risk).",
        ),
        CrashReaction::FollowAlgo => (
            14,
            "Letting the algo decide suggests discipline with a system (moderate-to-high risk).",
        ),
    };
    components.push(ScoreComponent {
        factor: ScoreFactor::CrashReaction,
        points,
        reason: reason.to_string(),
    });
    total += u32::from(points);

    let (points, reason) = match answer.drawdown_pain {
        DrawdownPain::OverTwentyPercent => (
            6,
            "Pain threshold at >20% indicates moderate sensitivity to losses.",
        ),
        DrawdownPain::OverThirtyPercent => (
            10,
            "Pain threshold at >30% indicates moderate-to-higher tolerance.",
        ),
        DrawdownPain::OverFiftyPercent => (
            16,
            "Pain threshold at >50% indicates high tolerance for volatility.",
        ),
        DrawdownPain::NoImpact => (
            20,
            "No impact from drawdown suggests very high tolerance for volatility.",
        ),
    };
    components.push(ScoreComponent {
        factor: ScoreFactor::DrawdownPain,
        points,
        reason: reason.to_string(),
    });
    total += u32::from(points);

    let (points, reason) = match answer.expected_annual_return {
        ExpectedReturn::TwelveToTwentyFour => (
            6,
            "Expected return 12–24% aligns with moderate expectations.",
        ),
        ExpectedReturn::TwentyFourToThirtySix => (
            12,
            "Expected return 24–36% aligns with higher risk expectations.",
        ),
        ExpectedReturn::OverThirtySix => (
            18,
            "Expected return >36% implies aggressive expectations (higher risk).",
        ),
    };
    components.push(ScoreComponent {
        factor: ScoreFactor::ExpectedReturn,
        points,
        reason: reason.to_string(),
    });
    total += u32::from(points);

    let (points, reason) = match answer.holding_period {
        HoldingPeriod::Tactical => (
            4,
            "Tactical 1–2 year horizon suggests less time to recover from volatility.",
        ),
        HoldingPeriod::MidTerm => (
            8,
            "Mid-term 3–5 year horizon supports moderate risk capacity.",
        ),
        HoldingPeriod::Legacy => (
            12,
            "Legacy 5+ year horizon supports higher risk capacity (more recovery time).",
        ),
    };
    components.push(ScoreComponent {
        factor: ScoreFactor::HoldingPeriod,
        points,
        reason: reason.to_string(),
    });
    total += u32::from(points);

    // Speculative growth outranks every other motive; among the rest the
    // weights follow code order.
    let (points, reason) = match answer.crypto_interest {
        CryptoInterest::StoreOfValue => (
            6,
            "Store-of-value preference indicates more conservative positioning.",
        ),
        CryptoInterest::Diversification => (
            8,
            "Diversification motive indicates balanced risk intent.",
        ),
        CryptoInterest::FutureOfFinance => (
            10,
            "Future-of-finance exposure indicates moderate-to-higher risk preference.",
        ),
        CryptoInterest::SpeculativeGrowth => (
            14,
            "Speculative growth preference indicates higher risk preference.",
        ),
    };
    components.push(ScoreComponent {
        factor: ScoreFactor::InterestStyle,
        points,
        reason: reason.to_string(),
    });
    total += u32::from(points);

    (components, total)
}
