use yew::prelude::*;

use crate::components::Route;
use crate::config::chain_profile;
use crate::hooks::use_wallet_context;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub active: Route,
    pub on_navigate: Callback<Route>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let wallet = use_wallet_context();

    let chain_name = wallet
        .session
        .chain_id
        .and_then(chain_profile)
        .map(|chain| chain.name)
        .unwrap_or("Unknown network");

    let account = wallet
        .session
        .short_address()
        .unwrap_or_else(|| "—".to_string());

    let disconnect = wallet.disconnect.reform(|_: MouseEvent| ());

    html! {
        <header class="navbar">
            <div class="navbar-brand">
                <span class="brand-mark">{"⚡"}</span>
                <div>
                    <span class="brand-name">{"RWA Vault"}</span>
                    <span class="brand-tagline">{"PROFESSIONAL DEFI"}</span>
                </div>
            </div>

            <nav class="navbar-links">
                { for Route::NAV_ITEMS.iter().map(|item| {
                    let class = if *item == props.active { "nav-link active" } else { "nav-link" };
                    let target = *item;
                    let onclick = props.on_navigate.reform(move |_: MouseEvent| target);
                    html! {
                        <button {class} {onclick}>{item.label()}</button>
                    }
                }) }
            </nav>

            <div class="navbar-account">
                <span class="chain-chip">{chain_name}</span>
                <span class="account-chip" title={wallet.session.address.clone().unwrap_or_default()}>
                    {account}
                </span>
                <button class="btn-secondary" onclick={disconnect}>{"Disconnect"}</button>
            </div>
        </header>
    }
}
