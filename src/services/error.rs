use thiserror::Error;

/// Everything that can go wrong between a click and a mined receipt.
/// All variants are handled the same way: surfaced inline, pending flag
/// cleared, nothing retried.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum GatewayError {
    #[error("No wallet extension detected in this browser")]
    WalletUnavailable,

    #[error("Request rejected in the wallet")]
    Rejected,

    #[error("Transaction reverted on-chain")]
    Reverted,

    #[error("Confirmation timed out, check the explorer for the final status")]
    Timeout,

    #[error("Network {0} is not supported")]
    UnsupportedChain(u64),

    #[error("Network error: {0}")]
    Network(String),

    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("Unexpected response: {0}")]
    Decode(String),
}
