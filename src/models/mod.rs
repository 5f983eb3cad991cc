pub mod flow;
pub mod token;
pub mod vault;
pub mod wallet;

pub use flow::{
    act_button, approve_button, ActionKind, ButtonState, FlowPhase, GateInput, TxFlow,
};
pub use token::{format_amount, parse_amount, AmountError};
pub use vault::{
    BorrowTerms, LiquidationOpportunity, PoolStats, ReputationTier, UserPosition, UserProfile,
};
pub use wallet::{short_hex, ConnectionStatus, WalletSession};
