pub mod error;
pub mod rpc_client;
pub mod vault_gateway;
pub mod wallet_bridge;

pub use error::GatewayError;
pub use rpc_client::RpcClient;
pub use vault_gateway::{TxRequest, VaultGateway};
