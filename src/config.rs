use serde::{Deserialize, Serialize};

/// A chain the app is allowed to operate on. Reads go to `rpc_url`; the
/// injected wallet stays the only path for signing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainProfile {
    pub id: u64,
    pub name: &'static str,
    pub rpc_url: &'static str,
    pub explorer_url: &'static str,
}

/// Allow-listed networks. First entry is the default switch target.
pub const SUPPORTED_CHAINS: &[ChainProfile] = &[
    ChainProfile {
        id: 11155111,
        name: "Sepolia",
        rpc_url: "https://rpc.sepolia.org",
        explorer_url: "https://sepolia.etherscan.io",
    },
    ChainProfile {
        id: 1,
        name: "Ethereum",
        rpc_url: "https://eth.llamarpc.com",
        explorer_url: "https://etherscan.io",
    },
    ChainProfile {
        id: 137,
        name: "Polygon",
        rpc_url: "https://polygon-rpc.com",
        explorer_url: "https://polygonscan.com",
    },
    ChainProfile {
        id: 10,
        name: "Optimism",
        rpc_url: "https://mainnet.optimism.io",
        explorer_url: "https://optimistic.etherscan.io",
    },
    ChainProfile {
        id: 42161,
        name: "Arbitrum",
        rpc_url: "https://arb1.arbitrum.io/rpc",
        explorer_url: "https://arbiscan.io",
    },
    ChainProfile {
        id: 8453,
        name: "Base",
        rpc_url: "https://mainnet.base.org",
        explorer_url: "https://basescan.org",
    },
];

pub fn chain_profile(chain_id: u64) -> Option<&'static ChainProfile> {
    SUPPORTED_CHAINS.iter().find(|c| c.id == chain_id)
}

pub fn is_supported_chain(chain_id: u64) -> bool {
    chain_profile(chain_id).is_some()
}

/// Deployment addresses and app-wide settings, resolved at compile time.
/// build.rs feeds overrides from .env into rustc-env.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub stablecoin_address: &'static str,
    pub lending_pool_address: &'static str,
    pub loan_vault_address: &'static str,
    pub user_registry_address: &'static str,
    pub rpc_url_override: Option<&'static str>,
    pub receipt_poll_interval_ms: u32,
    pub receipt_poll_attempts: u32,
    pub stats_cache_ttl_secs: i64,
}

impl AppConfig {
    pub const fn from_env() -> Self {
        Self {
            stablecoin_address: match option_env!("STABLECOIN_ADDRESS") {
                Some(addr) => addr,
                None => "0xb0a0bc4c23f05f714f7e2a78953836225a09a04f",
            },
            lending_pool_address: match option_env!("LENDING_POOL_ADDRESS") {
                Some(addr) => addr,
                None => "0x97b31f3370cc5c2c4ccf9e4227ad2b9b602f8b13",
            },
            loan_vault_address: match option_env!("LOAN_VAULT_ADDRESS") {
                Some(addr) => addr,
                None => "0x7ff9dcb2eb9e000e5f21a752ebd31c789e24765e",
            },
            // The current deployment serves registry calls from the vault.
            user_registry_address: match option_env!("USER_REGISTRY_ADDRESS") {
                Some(addr) => addr,
                None => "0x7ff9dcb2eb9e000e5f21a752ebd31c789e24765e",
            },
            rpc_url_override: option_env!("RPC_URL_OVERRIDE"),
            receipt_poll_interval_ms: 2_000,
            receipt_poll_attempts: 90,
            stats_cache_ttl_secs: 60,
        }
    }

    /// RPC endpoint used for the read path on the given chain.
    pub fn rpc_url(&self, chain_id: u64) -> Option<&'static str> {
        if let Some(url) = self.rpc_url_override {
            if !url.is_empty() {
                return Some(url);
            }
        }
        chain_profile(chain_id).map(|c| c.rpc_url)
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allowlist_lookup() {
        assert!(is_supported_chain(11155111));
        assert!(is_supported_chain(8453));
        assert!(!is_supported_chain(56));
        assert_eq!(chain_profile(1).unwrap().name, "Ethereum");
    }

    #[test]
    fn rpc_url_follows_chain() {
        let cfg = AppConfig::from_env();
        if cfg.rpc_url_override.is_none() {
            assert_eq!(cfg.rpc_url(10), Some("https://mainnet.optimism.io"));
            assert_eq!(cfg.rpc_url(99999), None);
        }
    }
}
