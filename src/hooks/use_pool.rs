use yew::prelude::*;

use crate::models::{PoolStats, ReputationTier, UserPosition, UserProfile};
use crate::services::VaultGateway;

/// Dashboard snapshots: pool-wide stats plus the connected wallet's
/// position and registry profile.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct PoolSnapshots {
    pub stats: Option<PoolStats>,
    pub position: Option<UserPosition>,
    pub profile: Option<UserProfile>,
    pub tier: Option<ReputationTier>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Clone, PartialEq)]
pub struct UsePoolHandle {
    pub snapshots: UseStateHandle<PoolSnapshots>,
    pub refresh: Callback<()>,
}

fn fetch(
    address: Option<String>,
    chain_id: Option<u64>,
    snapshots: UseStateHandle<PoolSnapshots>,
) {
    let Some(chain_id) = chain_id else {
        snapshots.set(PoolSnapshots::default());
        return;
    };

    let mut loading = (*snapshots).clone();
    loading.loading = true;
    loading.error = None;
    snapshots.set(loading);

    wasm_bindgen_futures::spawn_local(async move {
        let gateway = match VaultGateway::for_chain(chain_id) {
            Ok(gateway) => gateway,
            Err(e) => {
                snapshots.set(PoolSnapshots {
                    error: Some(e.to_string()),
                    ..PoolSnapshots::default()
                });
                return;
            }
        };

        let mut next = PoolSnapshots::default();

        match gateway.pool_stats().await {
            Ok(stats) => next.stats = Some(stats),
            Err(e) => {
                log::error!("❌ getPoolStats failed: {}", e);
                next.error = Some(e.to_string());
            }
        }

        if let Some(address) = address {
            match gateway.user_position(&address).await {
                Ok(position) => next.position = Some(position),
                Err(e) => log::error!("❌ getUserPosition failed: {}", e),
            }
            match gateway.user_profile(&address).await {
                Ok(profile) => next.profile = Some(profile),
                Err(e) => log::error!("❌ getUserProfile failed: {}", e),
            }
            match gateway.reputation_tier(&address).await {
                Ok(tier) => next.tier = Some(tier),
                Err(e) => log::error!("❌ getReputationTier failed: {}", e),
            }
        }

        snapshots.set(next);
    });
}

#[hook]
pub fn use_pool(address: Option<String>, chain_id: Option<u64>) -> UsePoolHandle {
    let snapshots = use_state(PoolSnapshots::default);

    {
        let snapshots = snapshots.clone();
        use_effect_with((address.clone(), chain_id), move |(address, chain_id)| {
            fetch(address.clone(), *chain_id, snapshots);
            || ()
        });
    }

    let refresh = {
        let snapshots = snapshots.clone();
        Callback::from(move |_| fetch(address.clone(), chain_id, snapshots.clone()))
    };

    UsePoolHandle { snapshots, refresh }
}
