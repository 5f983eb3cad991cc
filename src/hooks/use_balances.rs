use ethers_core::types::U256;
use yew::prelude::*;

use crate::models::WalletSession;
use crate::services::VaultGateway;

/// Stablecoin balance and pool allowance for the connected wallet.
/// `None` until the first fetch lands; re-fetched after every confirmed
/// transaction. Last-read caches, nothing fresher is guaranteed.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct BalanceSnapshots {
    pub balance: Option<U256>,
    pub allowance: Option<U256>,
}

#[derive(Clone, PartialEq)]
pub struct UseBalancesHandle {
    pub snapshots: UseStateHandle<BalanceSnapshots>,
    pub refresh: Callback<()>,
}

fn fetch(
    address: Option<String>,
    chain_id: Option<u64>,
    snapshots: UseStateHandle<BalanceSnapshots>,
) {
    let (Some(address), Some(chain_id)) = (address, chain_id) else {
        snapshots.set(BalanceSnapshots::default());
        return;
    };

    wasm_bindgen_futures::spawn_local(async move {
        let gateway = match VaultGateway::for_chain(chain_id) {
            Ok(gateway) => gateway,
            Err(e) => {
                log::warn!("⚠️ Balance fetch skipped: {}", e);
                snapshots.set(BalanceSnapshots::default());
                return;
            }
        };

        let balance = match gateway.balance_of(&address).await {
            Ok(balance) => Some(balance),
            Err(e) => {
                log::error!("❌ balanceOf failed: {}", e);
                None
            }
        };
        let allowance = match gateway.pool_allowance(&address).await {
            Ok(allowance) => Some(allowance),
            Err(e) => {
                log::error!("❌ allowance failed: {}", e);
                None
            }
        };

        snapshots.set(BalanceSnapshots { balance, allowance });
    });
}

#[hook]
pub fn use_balances(session: WalletSession) -> UseBalancesHandle {
    let snapshots = use_state(BalanceSnapshots::default);

    {
        let snapshots = snapshots.clone();
        use_effect_with(
            (session.address.clone(), session.chain_id),
            move |(address, chain_id)| {
                fetch(address.clone(), *chain_id, snapshots);
                || ()
            },
        );
    }

    let refresh = {
        let snapshots = snapshots.clone();
        Callback::from(move |_| {
            fetch(
                session.address.clone(),
                session.chain_id,
                snapshots.clone(),
            )
        })
    };

    UseBalancesHandle { snapshots, refresh }
}
