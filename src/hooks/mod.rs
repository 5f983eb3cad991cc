pub mod use_balances;
pub mod use_pool;
pub mod use_registration;
pub mod use_tx_flow;
pub mod use_wallet;
pub mod wallet_context;

pub use use_balances::{use_balances, BalanceSnapshots, UseBalancesHandle};
pub use use_pool::{use_pool, PoolSnapshots, UsePoolHandle};
pub use use_registration::{use_registration, UseRegistrationHandle};
pub use use_tx_flow::{use_tx_flow, UseTxFlowHandle};
pub use use_wallet::{use_wallet, UseWalletHandle};
pub use wallet_context::{use_wallet_context, WalletProvider};
