use ethers_core::abi::{self, ParamType, Token};
use ethers_core::types::{Address, U256};
use ethers_core::utils::id;
use serde::{Deserialize, Serialize};

use crate::config::CONFIG;
use crate::models::{PoolStats, ReputationTier, UserPosition, UserProfile};
use crate::services::{GatewayError, RpcClient};
use crate::utils::{load_from_storage, save_to_storage, STORAGE_KEY_POOL_STATS};

/// A prepared write, ready for `wallet_bridge::send_transaction`.
#[derive(Clone, Debug, PartialEq)]
pub struct TxRequest {
    pub to: &'static str,
    pub data: Vec<u8>,
}

fn parse_address(value: &str) -> Result<Address, GatewayError> {
    value
        .parse()
        .map_err(|_| GatewayError::Decode(format!("bad address: {}", value)))
}

/// selector ++ abi-encoded arguments.
fn encode_call(signature: &str, args: &[Token]) -> Vec<u8> {
    let mut data = id(signature).to_vec();
    data.extend(abi::encode(args));
    data
}

fn decode_return(
    types: &[ParamType],
    data: &[u8],
    context: &str,
) -> Result<Vec<Token>, GatewayError> {
    abi::decode(types, data)
        .map_err(|e| GatewayError::Decode(format!("{}: {}", context, e)))
}

fn token_uint(token: Token, context: &str) -> Result<U256, GatewayError> {
    token
        .into_uint()
        .ok_or_else(|| GatewayError::Decode(format!("{}: expected uint", context)))
}

fn decode_uint(data: &[u8], context: &str) -> Result<U256, GatewayError> {
    let mut tokens = decode_return(&[ParamType::Uint(256)], data, context)?;
    token_uint(tokens.remove(0), context)
}

fn decode_bool(data: &[u8], context: &str) -> Result<bool, GatewayError> {
    let mut tokens = decode_return(&[ParamType::Bool], data, context)?;
    tokens
        .remove(0)
        .into_bool()
        .ok_or_else(|| GatewayError::Decode(format!("{}: expected bool", context)))
}

#[derive(Serialize, Deserialize)]
struct PoolStatsCache {
    stats: PoolStats,
    timestamp: String,
}

/// Typed surface over the deployed contracts. Stateless apart from the
/// chain binding; every method mirrors one ABI entry.
#[derive(Clone)]
pub struct VaultGateway {
    rpc: RpcClient,
    chain_id: u64,
}

impl VaultGateway {
    pub fn for_chain(chain_id: u64) -> Result<Self, GatewayError> {
        Ok(Self {
            rpc: RpcClient::for_chain(chain_id)?,
            chain_id,
        })
    }

    // ---- stablecoin reads -------------------------------------------------

    pub async fn balance_of(&self, owner: &str) -> Result<U256, GatewayError> {
        let data = encode_call(
            "balanceOf(address)",
            &[Token::Address(parse_address(owner)?)],
        );
        let raw = self.rpc.eth_call(CONFIG.stablecoin_address, &data).await?;
        decode_uint(&raw, "balanceOf")
    }

    /// Allowance granted by `owner` to the lending pool.
    pub async fn pool_allowance(&self, owner: &str) -> Result<U256, GatewayError> {
        let data = encode_call(
            "allowance(address,address)",
            &[
                Token::Address(parse_address(owner)?),
                Token::Address(parse_address(CONFIG.lending_pool_address)?),
            ],
        );
        let raw = self.rpc.eth_call(CONFIG.stablecoin_address, &data).await?;
        decode_uint(&raw, "allowance")
    }

    // ---- registry reads ---------------------------------------------------

    pub async fn is_registered(&self, owner: &str) -> Result<bool, GatewayError> {
        let data = encode_call(
            "isRegistered(address)",
            &[Token::Address(parse_address(owner)?)],
        );
        let raw = self
            .rpc
            .eth_call(CONFIG.user_registry_address, &data)
            .await?;
        decode_bool(&raw, "isRegistered")
    }

    pub async fn user_profile(&self, owner: &str) -> Result<UserProfile, GatewayError> {
        let data = encode_call(
            "getUserProfile(address)",
            &[Token::Address(parse_address(owner)?)],
        );
        let raw = self
            .rpc
            .eth_call(CONFIG.user_registry_address, &data)
            .await?;
        let mut tokens = decode_return(
            &[
                ParamType::Uint(256),
                ParamType::Uint(256),
                ParamType::Bool,
            ],
            &raw,
            "getUserProfile",
        )?;
        Ok(UserProfile {
            reputation_score: token_uint(tokens.remove(0), "getUserProfile")?,
            joined_block: token_uint(tokens.remove(0), "getUserProfile")?,
            active: tokens
                .remove(0)
                .into_bool()
                .ok_or_else(|| GatewayError::Decode("getUserProfile: expected bool".into()))?,
        })
    }

    pub async fn reputation_tier(&self, owner: &str) -> Result<ReputationTier, GatewayError> {
        let data = encode_call(
            "getReputationTier(address)",
            &[Token::Address(parse_address(owner)?)],
        );
        let raw = self
            .rpc
            .eth_call(CONFIG.user_registry_address, &data)
            .await?;
        let mut tokens = decode_return(&[ParamType::Uint(8)], &raw, "getReputationTier")?;
        let index = token_uint(tokens.remove(0), "getReputationTier")?;
        Ok(ReputationTier::from_index(
            index.low_u64().min(u8::MAX as u64) as u8,
        ))
    }

    // ---- pool / vault reads -----------------------------------------------

    /// Pool stats with a short localStorage cache so the dashboard paints
    /// instantly on revisit.
    pub async fn pool_stats(&self) -> Result<PoolStats, GatewayError> {
        let cache_key = format!("{}_{}", STORAGE_KEY_POOL_STATS, self.chain_id);

        if let Some(cache) = load_from_storage::<PoolStatsCache>(&cache_key) {
            if let Ok(cached_at) = chrono::DateTime::parse_from_rfc3339(&cache.timestamp) {
                let age = chrono::Utc::now()
                    .signed_duration_since(cached_at.with_timezone(&chrono::Utc));
                if age.num_seconds() < CONFIG.stats_cache_ttl_secs {
                    log::info!("📋 Pool stats from cache ({}s old)", age.num_seconds());
                    return Ok(cache.stats);
                }
            }
        }

        let data = encode_call("getPoolStats()", &[]);
        let raw = self
            .rpc
            .eth_call(CONFIG.lending_pool_address, &data)
            .await?;
        let mut tokens = decode_return(
            &[
                ParamType::Uint(256),
                ParamType::Uint(256),
                ParamType::Uint(256),
                ParamType::Uint(256),
            ],
            &raw,
            "getPoolStats",
        )?;
        let stats = PoolStats {
            total_deposits: token_uint(tokens.remove(0), "getPoolStats")?,
            total_borrowed: token_uint(tokens.remove(0), "getPoolStats")?,
            available_liquidity: token_uint(tokens.remove(0), "getPoolStats")?,
            utilization_bps: token_uint(tokens.remove(0), "getPoolStats")?,
        };

        let cache = PoolStatsCache {
            stats: stats.clone(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        };
        if let Err(e) = save_to_storage(&cache_key, &cache) {
            log::warn!("⚠️ Could not cache pool stats: {}", e);
        }

        Ok(stats)
    }

    pub async fn user_position(&self, owner: &str) -> Result<UserPosition, GatewayError> {
        let data = encode_call(
            "getUserPosition(address)",
            &[Token::Address(parse_address(owner)?)],
        );
        let raw = self.rpc.eth_call(CONFIG.loan_vault_address, &data).await?;
        let mut tokens = decode_return(
            &[
                ParamType::Uint(256),
                ParamType::Uint(256),
                ParamType::Uint(256),
                ParamType::Uint(256),
            ],
            &raw,
            "getUserPosition",
        )?;
        Ok(UserPosition {
            deposited: token_uint(tokens.remove(0), "getUserPosition")?,
            borrowed: token_uint(tokens.remove(0), "getUserPosition")?,
            collateral_value: token_uint(tokens.remove(0), "getUserPosition")?,
            health_factor_bps: token_uint(tokens.remove(0), "getUserPosition")?,
        })
    }

    // ---- write payloads ---------------------------------------------------

    pub fn approve_request(amount: U256) -> Result<TxRequest, GatewayError> {
        Ok(TxRequest {
            to: CONFIG.stablecoin_address,
            data: encode_call(
                "approve(address,uint256)",
                &[
                    Token::Address(parse_address(CONFIG.lending_pool_address)?),
                    Token::Uint(amount),
                ],
            ),
        })
    }

    pub fn deposit_request(amount: U256) -> TxRequest {
        TxRequest {
            to: CONFIG.lending_pool_address,
            data: encode_call("deposit(uint256)", &[Token::Uint(amount)]),
        }
    }

    pub fn borrow_request(amount: U256) -> TxRequest {
        TxRequest {
            to: CONFIG.loan_vault_address,
            data: encode_call("requestLoan(uint256)", &[Token::Uint(amount)]),
        }
    }

    /// Test-token faucet, open on the current deployment.
    pub fn faucet_mint_request(to: &str, amount: U256) -> Result<TxRequest, GatewayError> {
        Ok(TxRequest {
            to: CONFIG.stablecoin_address,
            data: encode_call(
                "mint(address,uint256)",
                &[Token::Address(parse_address(to)?), Token::Uint(amount)],
            ),
        })
    }

    /// Tokenize a real-world asset with its appraised value.
    pub fn tokenize_request(asset_uri: &str, appraised_value: U256) -> TxRequest {
        TxRequest {
            to: CONFIG.loan_vault_address,
            data: encode_call(
                "mintAsset(string,uint256)",
                &[
                    Token::String(asset_uri.to_string()),
                    Token::Uint(appraised_value),
                ],
            ),
        }
    }

    pub fn register_request() -> TxRequest {
        TxRequest {
            to: CONFIG.user_registry_address,
            data: encode_call("registerUser()", &[]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::token::whole_tokens;

    #[test]
    fn selectors_match_the_erc20_abi() {
        // Well-known four-byte selectors, pinned so an ABI typo cannot
        // slip through.
        assert_eq!(id("approve(address,uint256)"), [0x09, 0x5e, 0xa7, 0xb3]);
        assert_eq!(id("balanceOf(address)"), [0x70, 0xa0, 0x82, 0x31]);
        assert_eq!(id("allowance(address,address)"), [0xdd, 0x62, 0xed, 0x3e]);
        assert_eq!(id("mint(address,uint256)"), [0x40, 0xc1, 0x0f, 0x19]);
        assert_eq!(id("deposit(uint256)"), [0xb6, 0xb5, 0x5f, 0x25]);
    }

    #[test]
    fn calldata_layout_is_selector_plus_words() {
        let deposit = VaultGateway::deposit_request(whole_tokens(100));
        assert_eq!(deposit.data.len(), 4 + 32);
        assert_eq!(&deposit.data[..4], id("deposit(uint256)").as_slice());

        let approve = VaultGateway::approve_request(whole_tokens(100)).unwrap();
        assert_eq!(approve.data.len(), 4 + 32 + 32);
        assert_eq!(approve.to, CONFIG.stablecoin_address);

        let register = VaultGateway::register_request();
        assert_eq!(register.data.len(), 4);
    }

    #[test]
    fn return_data_decoders_round_trip() {
        let encoded = abi::encode(&[Token::Uint(whole_tokens(42))]);
        assert_eq!(decode_uint(&encoded, "test").unwrap(), whole_tokens(42));

        let encoded = abi::encode(&[Token::Bool(true)]);
        assert!(decode_bool(&encoded, "test").unwrap());

        let garbage = [0u8; 3];
        assert!(decode_uint(&garbage, "test").is_err());
    }

    #[test]
    fn profile_tuple_decodes() {
        let encoded = abi::encode(&[
            Token::Uint(U256::from(100u64)),
            Token::Uint(U256::from(123_456u64)),
            Token::Bool(true),
        ]);
        let mut tokens = decode_return(
            &[
                ParamType::Uint(256),
                ParamType::Uint(256),
                ParamType::Bool,
            ],
            &encoded,
            "test",
        )
        .unwrap();
        assert_eq!(
            token_uint(tokens.remove(0), "test").unwrap(),
            U256::from(100u64)
        );
    }
}
