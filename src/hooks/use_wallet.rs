use yew::prelude::*;

use crate::config::SUPPORTED_CHAINS;
use crate::models::{ConnectionStatus, WalletSession};
use crate::services::wallet_bridge;
use crate::utils::{
    load_from_storage, remove_from_storage, save_to_storage, STORAGE_KEY_WALLET_CONNECTED,
};

#[derive(Clone, PartialEq)]
pub struct UseWalletHandle {
    pub session: UseStateHandle<WalletSession>,
    pub connect: Callback<()>,
    pub disconnect: Callback<()>,
    pub switch_network: Callback<()>,
}

/// Rebuild the session from provider truth instead of patching whatever
/// the closure captured; wallet events can arrive long after the render
/// that registered them.
async fn refresh_session(session: UseStateHandle<WalletSession>) {
    let accounts = match wallet_bridge::current_accounts().await {
        Ok(accounts) => accounts,
        Err(e) => {
            log::error!("❌ Could not read wallet accounts: {}", e);
            session.set(WalletSession::disconnected());
            return;
        }
    };

    if accounts.is_empty() {
        let _ = remove_from_storage(STORAGE_KEY_WALLET_CONNECTED);
        session.set(WalletSession::disconnected());
        return;
    }

    let chain_id = wallet_bridge::chain_id().await.ok();
    session.set(WalletSession {
        address: accounts.into_iter().next(),
        chain_id,
        status: ConnectionStatus::Connected,
    });
}

#[hook]
pub fn use_wallet() -> UseWalletHandle {
    let session = use_state(|| {
        if wallet_bridge::has_injected_provider() {
            WalletSession::disconnected()
        } else {
            WalletSession::unavailable()
        }
    });

    // Eager reconnect on mount, gated on the storage flag so a user who
    // explicitly disconnected stays disconnected.
    {
        let session = session.clone();
        use_effect_with((), move |_| {
            let previously_connected =
                load_from_storage::<bool>(STORAGE_KEY_WALLET_CONNECTED).unwrap_or(false);

            if previously_connected && wallet_bridge::has_injected_provider() {
                log::info!("💾 Wallet flag found, restoring session...");
                wasm_bindgen_futures::spawn_local(async move {
                    refresh_session(session).await;
                });
            }
            || ()
        });
    }

    // Wallet event subscriptions. Registered once on mount; the leaked
    // closures are intentional for listeners that live as long as the app.
    {
        let session = session.clone();
        use_effect_with((), move |_| {
            let for_accounts = session.clone();
            wallet_bridge::on_accounts_changed(move |accounts| {
                log::info!("🔄 accountsChanged: {} account(s)", accounts.len());
                let session = for_accounts.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    refresh_session(session).await;
                });
            });

            let for_chain = session.clone();
            wallet_bridge::on_chain_changed(move |chain_id| {
                log::info!("🔄 chainChanged: {}", chain_id);
                let session = for_chain.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    refresh_session(session).await;
                });
            });
            || ()
        });
    }

    let connect = {
        let session = session.clone();
        Callback::from(move |_| {
            if !wallet_bridge::has_injected_provider() {
                session.set(WalletSession::unavailable());
                return;
            }

            let mut connecting = (*session).clone();
            connecting.status = ConnectionStatus::Connecting;
            session.set(connecting);

            let session = session.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match wallet_bridge::request_accounts().await {
                    Ok(accounts) if !accounts.is_empty() => {
                        let chain_id = wallet_bridge::chain_id().await.ok();
                        let _ = save_to_storage(STORAGE_KEY_WALLET_CONNECTED, &true);
                        log::info!("✅ Wallet connected: {}", accounts[0]);
                        session.set(WalletSession {
                            address: accounts.into_iter().next(),
                            chain_id,
                            status: ConnectionStatus::Connected,
                        });
                    }
                    Ok(_) => {
                        session.set(WalletSession::disconnected());
                    }
                    Err(e) => {
                        log::error!("❌ Wallet connection failed: {}", e);
                        session.set(WalletSession::disconnected());
                    }
                }
            });
        })
    };

    let disconnect = {
        let session = session.clone();
        Callback::from(move |_| {
            // EIP-1193 has no programmatic disconnect; dropping the flag
            // and the view state is all a dapp can do.
            let _ = remove_from_storage(STORAGE_KEY_WALLET_CONNECTED);
            log::info!("👋 Wallet disconnected");
            session.set(WalletSession::disconnected());
        })
    };

    let switch_network = Callback::from(move |_| {
        let target = &SUPPORTED_CHAINS[0];
        log::info!("🔄 Requesting switch to {} ({})", target.name, target.id);
        let chain_id = target.id;
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = wallet_bridge::switch_chain(chain_id).await {
                log::error!("❌ Network switch failed: {}", e);
            }
            // The chainChanged event drives the state update on success.
        });
    });

    UseWalletHandle {
        session,
        connect,
        disconnect,
        switch_network,
    }
}
