//! Closed option sets for every coded questionnaire field.
//!
//! Each answer arrives as a small integer index into one of these codebooks.
//! The enums keep the wire codes as explicit discriminants so the mapping can
//! never drift from the published questionnaire.

use serde::{Deserialize, Serialize};

/// Why the investor wants exposure to the asset class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CryptoInterest {
    StoreOfValue = 0,
    Diversification = 1,
    FutureOfFinance = 2,
    SpeculativeGrowth = 3,
}

impl CryptoInterest {
    pub const CODES: &'static [i64] = &[0, 1, 2, 3];

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::StoreOfValue),
            1 => Some(Self::Diversification),
            2 => Some(Self::FutureOfFinance),
            3 => Some(Self::SpeculativeGrowth),
            _ => None,
        }
    }

    pub const fn code(self) -> i64 {
        self as i64
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::StoreOfValue => {
                "Store of value (\"Digital Gold\"/ hedge against fiat debasement)."
            }
            Self::Diversification => "Diversification from traditional equity/bond correlations.",
            Self::FutureOfFinance => {
                "Direct exposure to the \"Future of Finance\" (Web3, DeFi, RWA- tokenized stocks, real estate, bonds)."
            }
            Self::SpeculativeGrowth => "Speculative growth (high risk/high reward).",
        }
    }
}

/// Portfolio percentage band allocated to the asset class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NetWorthAllocation {
    UnderOnePercent = 0,
    OneToFivePercent = 1,
    FiveToTenPercent = 2,
    TenPercentPlus = 3,
}

impl NetWorthAllocation {
    pub const CODES: &'static [i64] = &[0, 1, 2, 3];

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::UnderOnePercent),
            1 => Some(Self::OneToFivePercent),
            2 => Some(Self::FiveToTenPercent),
            3 => Some(Self::TenPercentPlus),
            _ => None,
        }
    }

    pub const fn code(self) -> i64 {
        self as i64
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::UnderOnePercent => "< 1% (Testing the waters)",
            Self::OneToFivePercent => "1-5% (Institutional standard)",
            Self::FiveToTenPercent => "5-10% (Aggressive/Strategic)",
            Self::TenPercentPlus => "10%+ (High conviction/Crypto-native)",
        }
    }
}

/// Intended time horizon for the position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HoldingPeriod {
    Tactical = 0,
    MidTerm = 1,
    Legacy = 2,
}

impl HoldingPeriod {
    pub const CODES: &'static [i64] = &[0, 1, 2];

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Tactical),
            1 => Some(Self::MidTerm),
            2 => Some(Self::Legacy),
            _ => None,
        }
    }

    pub const fn code(self) -> i64 {
        self as i64
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Tactical => "Tactical (1-2 years).",
            Self::MidTerm => "Mid-term (3-5 years).",
            Self::Legacy => "Legacy/Intergenerational (5+ years).",
        }
    }
}

/// Multi-select investment themes. Validated and preserved on the answer
/// record for echo/debug surfaces; never consumed by scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvestmentTheme {
    RealWorldAssets = 0,
    AiCrypto = 1,
    Infrastructure = 2,
    YieldGeneration = 3,
    OpenToRecommendation = 4,
}

impl InvestmentTheme {
    pub const CODES: &'static [i64] = &[0, 1, 2, 3, 4];

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::RealWorldAssets),
            1 => Some(Self::AiCrypto),
            2 => Some(Self::Infrastructure),
            3 => Some(Self::YieldGeneration),
            4 => Some(Self::OpenToRecommendation),
            _ => None,
        }
    }

    pub const fn code(self) -> i64 {
        self as i64
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::RealWorldAssets => {
                "Real World Assets Tokenization: (e.g., Tokenized stocks, treasury bills, real estate, or private credit)."
            }
            Self::AiCrypto => "AI x Crypto: (Decentralized compute and AI agents).",
            Self::Infrastructure => "Infrastructure: (Layer 1 and Layer 2 scaling solutions).",
            Self::YieldGeneration => "Yield Generation: (Staking and institutional DeFi).",
            Self::OpenToRecommendation => "Not sure, open for recommendation",
        }
    }
}

/// Declared behavior when the position loses half its value.
///
/// The codes are behavioral categories, not an ordered risk scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrashReaction {
    Liquidate = 0,
    Hold = 1,
    BuyTheDip = 2,
    FollowAlgo = 3,
}

impl CrashReaction {
    pub const CODES: &'static [i64] = &[0, 1, 2, 3];

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Liquidate),
            1 => Some(Self::Hold),
            2 => Some(Self::BuyTheDip),
            3 => Some(Self::FollowAlgo),
            _ => None,
        }
    }

    pub const fn code(self) -> i64 {
        self as i64
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Liquidate => "Liquidate immediately to protect remaining capital.",
            Self::Hold => "Maintain the position and wait for a recovery.",
            Self::BuyTheDip => "Aggressively \"buy the dip\" to lower the cost basis.",
            Self::FollowAlgo => "Let the algo decide (stick to the backtested plan)",
        }
    }
}

/// Drawdown level at which losses start to hurt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawdownPain {
    OverTwentyPercent = 0,
    OverThirtyPercent = 1,
    OverFiftyPercent = 2,
    NoImpact = 3,
}

impl DrawdownPain {
    pub const CODES: &'static [i64] = &[0, 1, 2, 3];

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::OverTwentyPercent),
            1 => Some(Self::OverThirtyPercent),
            2 => Some(Self::OverFiftyPercent),
            3 => Some(Self::NoImpact),
            _ => None,
        }
    }

    pub const fn code(self) -> i64 {
        self as i64
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::OverTwentyPercent => ">20%",
            Self::OverThirtyPercent => ">30%",
            Self::OverFiftyPercent => ">50%",
            Self::NoImpact => "% drawdown has no impact",
        }
    }
}

/// Expected annual return band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpectedReturn {
    TwelveToTwentyFour = 0,
    TwentyFourToThirtySix = 1,
    OverThirtySix = 2,
}

impl ExpectedReturn {
    pub const CODES: &'static [i64] = &[0, 1, 2];

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::TwelveToTwentyFour),
            1 => Some(Self::TwentyFourToThirtySix),
            2 => Some(Self::OverThirtySix),
            _ => None,
        }
    }

    pub const fn code(self) -> i64 {
        self as i64
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::TwelveToTwentyFour => "12% to 24%",
            Self::TwentyFourToThirtySix => "24% to 36%",
            Self::OverThirtySix => ">36%",
        }
    }
}
