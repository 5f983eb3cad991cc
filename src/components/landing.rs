use yew::prelude::*;

use crate::components::RegisterModal;
use crate::hooks::{use_registration, use_wallet_context};
use crate::models::ConnectionStatus;

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    /// Fired once a connected, registered wallet launches the app.
    pub on_enter: Callback<()>,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let wallet = use_wallet_context();
    let registration = use_registration(
        wallet.session.address.clone(),
        wallet.session.chain_id,
    );
    let show_register = use_state(|| false);

    let on_launch = {
        let registered = registration.registered.clone();
        let show_register = show_register.clone();
        let on_enter = props.on_enter.clone();
        Callback::from(move |_: MouseEvent| match *registered {
            Some(true) => on_enter.emit(()),
            Some(false) => show_register.set(true),
            None => log::info!("⏳ Registration status still loading"),
        })
    };

    let cta = match wallet.session.status {
        ConnectionStatus::Unavailable => html! {
            <p class="notice">
                {"No wallet extension detected. Install MetaMask or a compatible wallet to continue."}
            </p>
        },
        ConnectionStatus::Disconnected => {
            let onclick = wallet.connect.reform(|_: MouseEvent| ());
            html! {
                <button class="btn-primary btn-large" {onclick}>{"Connect Wallet"}</button>
            }
        }
        ConnectionStatus::Connecting => html! {
            <button class="btn-primary btn-large" disabled=true>{"Connecting..."}</button>
        },
        ConnectionStatus::Connected => html! {
            <button class="btn-primary btn-large" onclick={on_launch}>{"Launch App"}</button>
        },
    };

    let on_registered = {
        let refetch = registration.refetch.clone();
        let show_register = show_register.clone();
        let on_enter = props.on_enter.clone();
        Callback::from(move |_| {
            refetch.emit(());
            show_register.set(false);
            on_enter.emit(());
        })
    };

    let on_close = {
        let show_register = show_register.clone();
        Callback::from(move |_| show_register.set(false))
    };

    html! {
        <section class="landing">
            <div class="hero">
                <span class="badge">{"⚡ Professional DeFi Protocol"}</span>
                <h1>
                    {"The Future of "}
                    <span class="gradient-text">{"Real World Assets"}</span>
                </h1>
                <p class="hero-subtitle">
                    {"Bridge traditional finance with decentralized protocols. Unlock liquidity \
                      from real estate, commodities, and bonds through tokenization."}
                </p>

                <div class="feature-pills">
                    <span class="pill">{"🛡 Bank-Grade Security"}</span>
                    <span class="pill">{"⚡ Instant Settlements"}</span>
                    <span class="pill">{"📈 Competitive Returns"}</span>
                </div>

                <div class="cta">{cta}</div>

                <div class="stat-grid">
                    <div class="card stat-card">
                        <div class="stat-value">{"$2.1B+"}</div>
                        <div class="stat-label">{"Total Value Locked"}</div>
                    </div>
                    <div class="card stat-card">
                        <div class="stat-value">{"1,250+"}</div>
                        <div class="stat-label">{"Assets Tokenized"}</div>
                    </div>
                    <div class="card stat-card">
                        <div class="stat-value">{"150K+"}</div>
                        <div class="stat-label">{"Active Users"}</div>
                    </div>
                </div>
            </div>

            if *show_register {
                <RegisterModal {on_close} {on_registered} />
            }
        </section>
    }
}
