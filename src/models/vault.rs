use ethers_core::types::U256;
use serde::{Deserialize, Serialize};

/// Basis points per whole unit (100%).
pub const BPS_SCALE: u64 = 10_000;

/// Pool-wide figures from `getPoolStats()`. A cache with no freshness
/// guarantee beyond "last read".
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PoolStats {
    pub total_deposits: U256,
    pub total_borrowed: U256,
    pub available_liquidity: U256,
    pub utilization_bps: U256,
}

impl PoolStats {
    pub fn utilization_percent(&self) -> f64 {
        self.utilization_bps.as_u128() as f64 / (BPS_SCALE as f64 / 100.0)
    }
}

/// Per-wallet figures from `getUserPosition(address)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserPosition {
    pub deposited: U256,
    pub borrowed: U256,
    pub collateral_value: U256,
    pub health_factor_bps: U256,
}

impl UserPosition {
    pub fn has_debt(&self) -> bool {
        !self.borrowed.is_zero()
    }

    /// Below 1.0 the contract will accept a liquidation of this position.
    pub fn is_liquidatable(&self) -> bool {
        self.has_debt() && self.health_factor_bps < U256::from(BPS_SCALE)
    }

    pub fn health_factor(&self) -> f64 {
        if !self.has_debt() {
            return f64::INFINITY;
        }
        self.health_factor_bps.as_u128() as f64 / BPS_SCALE as f64
    }
}

/// Registry profile from `getUserProfile(address)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub reputation_score: U256,
    pub joined_block: U256,
    pub active: bool,
}

/// Reputation bands from `getReputationTier(address)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReputationTier {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl ReputationTier {
    pub fn from_index(index: u8) -> Self {
        match index {
            0 => ReputationTier::Bronze,
            1 => ReputationTier::Silver,
            2 => ReputationTier::Gold,
            _ => ReputationTier::Platinum,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReputationTier::Bronze => "Bronze",
            ReputationTier::Silver => "Silver",
            ReputationTier::Gold => "Gold",
            ReputationTier::Platinum => "Platinum",
        }
    }
}

/// Fixed product card on the borrow screen. Terms are contract-side
/// constants; the card content is display data.
#[derive(Clone, Debug, PartialEq)]
pub struct BorrowTerms {
    pub collateral: &'static str,
    pub description: &'static str,
    pub max_ltv_percent: u32,
    pub interest_rate_bps: u32,
    pub liquidation_threshold_percent: u32,
}

impl BorrowTerms {
    pub fn interest_rate_percent(&self) -> f64 {
        self.interest_rate_bps as f64 / 100.0
    }
}

pub const BORROW_TERMS: &[BorrowTerms] = &[
    BorrowTerms {
        collateral: "RWA NFT",
        description: "Borrow against tokenized real estate",
        max_ltv_percent: 70,
        interest_rate_bps: 950,
        liquidation_threshold_percent: 80,
    },
    BorrowTerms {
        collateral: "WETH",
        description: "ETH-backed stable borrowing",
        max_ltv_percent: 75,
        interest_rate_bps: 820,
        liquidation_threshold_percent: 82,
    },
    BorrowTerms {
        collateral: "WBTC",
        description: "Bitcoin-collateralized loans",
        max_ltv_percent: 70,
        interest_rate_bps: 880,
        liquidation_threshold_percent: 78,
    },
];

/// Row on the liquidation screen: a position whose health factor has
/// dropped below the threshold, plus the discount a liquidator earns.
#[derive(Clone, Debug, PartialEq)]
pub struct LiquidationOpportunity {
    pub borrower: String,
    pub collateral_label: String,
    pub collateral_value: U256,
    pub debt_amount: U256,
    pub bonus: U256,
}

/// Showcase rows while the indexer feed is not deployed; the real list
/// will come from scanning `getUserPosition` over recent borrowers.
pub fn demo_opportunities() -> Vec<LiquidationOpportunity> {
    use crate::models::token::whole_tokens;

    vec![
        LiquidationOpportunity {
            borrower: "0x1234567890abcdef1234567890abcdef12345678".to_string(),
            collateral_label: "RWA NFT #001".to_string(),
            collateral_value: whole_tokens(52_000),
            debt_amount: whole_tokens(45_000),
            bonus: whole_tokens(4_160),
        },
        LiquidationOpportunity {
            borrower: "0x9876543210fedcba9876543210fedcba98765432".to_string(),
            collateral_label: "WETH".to_string(),
            collateral_value: whole_tokens(3_200),
            debt_amount: whole_tokens(2_650),
            bonus: whole_tokens(160),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::token::whole_tokens;

    #[test]
    fn position_liquidatable_below_one() {
        let position = UserPosition {
            deposited: U256::zero(),
            borrowed: whole_tokens(100),
            collateral_value: whole_tokens(110),
            health_factor_bps: U256::from(9_500u64),
        };
        assert!(position.is_liquidatable());
        assert!((position.health_factor() - 0.95).abs() < 1e-9);

        let healthy = UserPosition {
            health_factor_bps: U256::from(15_000u64),
            ..position.clone()
        };
        assert!(!healthy.is_liquidatable());
    }

    #[test]
    fn debt_free_position_never_liquidatable() {
        let position = UserPosition {
            deposited: whole_tokens(50),
            borrowed: U256::zero(),
            collateral_value: whole_tokens(50),
            health_factor_bps: U256::zero(),
        };
        assert!(!position.is_liquidatable());
        assert!(position.health_factor().is_infinite());
    }

    #[test]
    fn tier_decoding_saturates() {
        assert_eq!(ReputationTier::from_index(0), ReputationTier::Bronze);
        assert_eq!(ReputationTier::from_index(2), ReputationTier::Gold);
        assert_eq!(ReputationTier::from_index(7), ReputationTier::Platinum);
    }

    #[test]
    fn utilization_renders_as_percent() {
        let stats = PoolStats {
            total_deposits: whole_tokens(1_000),
            total_borrowed: whole_tokens(650),
            available_liquidity: whole_tokens(350),
            utilization_bps: U256::from(6_500u64),
        };
        assert!((stats.utilization_percent() - 65.0).abs() < 1e-9);
    }
}
