use yew::prelude::*;

use crate::services::VaultGateway;

#[derive(Clone, PartialEq)]
pub struct UseRegistrationHandle {
    /// None while the lookup is in flight.
    pub registered: UseStateHandle<Option<bool>>,
    pub refetch: Callback<()>,
}

fn fetch(address: Option<String>, chain_id: Option<u64>, registered: UseStateHandle<Option<bool>>) {
    let (Some(address), Some(chain_id)) = (address, chain_id) else {
        registered.set(None);
        return;
    };

    wasm_bindgen_futures::spawn_local(async move {
        let result = async {
            VaultGateway::for_chain(chain_id)?
                .is_registered(&address)
                .await
        }
        .await;

        match result {
            Ok(flag) => {
                log::info!("🪪 isRegistered({}) = {}", address, flag);
                registered.set(Some(flag));
            }
            Err(e) => {
                log::error!("❌ isRegistered failed: {}", e);
                registered.set(None);
            }
        }
    });
}

/// Registry membership for the connected wallet, re-checked whenever the
/// account or chain changes and after a confirmed registration.
#[hook]
pub fn use_registration(address: Option<String>, chain_id: Option<u64>) -> UseRegistrationHandle {
    let registered = use_state(|| None);

    {
        let registered = registered.clone();
        use_effect_with((address.clone(), chain_id), move |(address, chain_id)| {
            fetch(address.clone(), *chain_id, registered);
            || ()
        });
    }

    let refetch = {
        let registered = registered.clone();
        Callback::from(move |_| fetch(address.clone(), chain_id, registered.clone()))
    };

    UseRegistrationHandle {
        registered,
        refetch,
    }
}
