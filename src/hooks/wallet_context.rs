use yew::prelude::*;

use crate::hooks::use_wallet::{use_wallet, UseWalletHandle};

#[derive(Properties, PartialEq)]
pub struct WalletProviderProps {
    pub children: Children,
}

/// Wraps the app and shares one wallet session with every component, so
/// the provider listeners are registered exactly once.
#[function_component(WalletProvider)]
pub fn wallet_provider(props: &WalletProviderProps) -> Html {
    let wallet = use_wallet();

    html! {
        <ContextProvider<UseWalletHandle> context={wallet}>
            {props.children.clone()}
        </ContextProvider<UseWalletHandle>>
    }
}

#[hook]
pub fn use_wallet_context() -> UseWalletHandle {
    use_context::<UseWalletHandle>().expect("use_wallet_context outside WalletProvider")
}
