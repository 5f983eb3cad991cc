use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::config::CONFIG;
use crate::services::GatewayError;

#[derive(Deserialize)]
struct RpcResponse {
    result: Option<Value>,
    error: Option<RpcErrorBody>,
}

#[derive(Deserialize)]
struct RpcErrorBody {
    code: i64,
    message: String,
}

/// Stateless JSON-RPC client for the read path. Contract reads and
/// receipt polling go to the chain's public endpoint; only signing
/// touches the injected wallet.
#[derive(Clone)]
pub struct RpcClient {
    url: &'static str,
}

impl RpcClient {
    pub fn for_chain(chain_id: u64) -> Result<Self, GatewayError> {
        let url = CONFIG
            .rpc_url(chain_id)
            .ok_or(GatewayError::UnsupportedChain(chain_id))?;
        Ok(Self { url })
    }

    async fn call_rpc(&self, method: &str, params: Value) -> Result<Value, GatewayError> {
        let body = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": method,
            "params": params,
        });

        let response = Request::post(self.url)
            .json(&body)
            .map_err(|e| GatewayError::Network(format!("Request build error: {}", e)))?
            .send()
            .await
            .map_err(|e| GatewayError::Network(format!("Request error: {}", e)))?;

        if !response.ok() {
            return Err(GatewayError::Network(format!("HTTP {}", response.status())));
        }

        let rpc: RpcResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::Decode(format!("Parse error: {}", e)))?;

        if let Some(err) = rpc.error {
            return Err(GatewayError::Rpc {
                code: err.code,
                message: err.message,
            });
        }

        Ok(rpc.result.unwrap_or(Value::Null))
    }

    /// eth_call against the latest block; returns the raw return data.
    pub async fn eth_call(&self, to: &str, data: &[u8]) -> Result<Vec<u8>, GatewayError> {
        let params = json!([
            { "to": to, "data": format!("0x{}", hex::encode(data)) },
            "latest",
        ]);
        let result = self.call_rpc("eth_call", params).await?;
        let payload = result
            .as_str()
            .ok_or_else(|| GatewayError::Decode("eth_call result is not a string".into()))?;
        hex::decode(payload.trim_start_matches("0x"))
            .map_err(|e| GatewayError::Decode(format!("bad return data: {}", e)))
    }

    /// None until the transaction is mined; then whether it succeeded.
    pub async fn transaction_succeeded(&self, hash: &str) -> Result<Option<bool>, GatewayError> {
        let result = self
            .call_rpc("eth_getTransactionReceipt", json!([hash]))
            .await?;
        if result.is_null() {
            return Ok(None);
        }
        let status = result
            .get("status")
            .and_then(|s| s.as_str())
            .ok_or_else(|| GatewayError::Decode("receipt without status".into()))?;
        Ok(Some(status == "0x1"))
    }

    /// Poll until the receipt lands. Bounded, so the caller's pending
    /// flag always reaches a terminal state even on a stuck transaction.
    pub async fn wait_for_receipt(&self, hash: &str) -> Result<(), GatewayError> {
        for attempt in 0..CONFIG.receipt_poll_attempts {
            match self.transaction_succeeded(hash).await? {
                Some(true) => {
                    log::info!("✅ Transaction {} confirmed after {} polls", hash, attempt + 1);
                    return Ok(());
                }
                Some(false) => return Err(GatewayError::Reverted),
                None => TimeoutFuture::new(CONFIG.receipt_poll_interval_ms).await,
            }
        }
        Err(GatewayError::Timeout)
    }
}
