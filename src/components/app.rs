use yew::prelude::*;

use crate::components::{Borrow, Dashboard, Landing, Lend, Liquidate, Navbar, Tokenize};
use crate::config::SUPPORTED_CHAINS;
use crate::hooks::{use_wallet_context, WalletProvider};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Landing,
    Dashboard,
    Lend,
    Borrow,
    Tokenize,
    Liquidate,
}

impl Route {
    pub const NAV_ITEMS: [Route; 5] = [
        Route::Dashboard,
        Route::Lend,
        Route::Borrow,
        Route::Tokenize,
        Route::Liquidate,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Route::Landing => "Home",
            Route::Dashboard => "Dashboard",
            Route::Lend => "Lend",
            Route::Borrow => "Borrow",
            Route::Tokenize => "Tokenize",
            Route::Liquidate => "Liquidate",
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <WalletProvider>
            <AppShell />
        </WalletProvider>
    }
}

#[function_component(AppShell)]
fn app_shell() -> Html {
    let wallet = use_wallet_context();
    let route = use_state(|| Route::Landing);

    let connected = wallet.session.is_connected();

    // Route guard: losing the wallet (disconnect, account revoked) drops
    // the user back onto the landing page.
    {
        let route = route.clone();
        use_effect_with(connected, move |connected| {
            if !*connected {
                route.set(Route::Landing);
            }
            || ()
        });
    }

    let active = if connected { *route } else { Route::Landing };

    let on_navigate = {
        let route = route.clone();
        Callback::from(move |target: Route| route.set(target))
    };

    let on_enter = on_navigate.reform(|_: ()| Route::Dashboard);

    let view = match active {
        Route::Landing => html! { <Landing {on_enter} /> },
        Route::Dashboard => html! { <Dashboard /> },
        Route::Lend => html! { <Lend /> },
        Route::Borrow => html! { <Borrow /> },
        Route::Tokenize => html! { <Tokenize /> },
        Route::Liquidate => html! { <Liquidate /> },
    };

    html! {
        <div class="app-shell">
            if connected {
                <Navbar {active} on_navigate={on_navigate.clone()} />
            }
            if wallet.session.wrong_network() {
                <NetworkBanner />
            }
            { view }
        </div>
    }
}

#[function_component(NetworkBanner)]
fn network_banner() -> Html {
    let wallet = use_wallet_context();
    let target = &SUPPORTED_CHAINS[0];

    let onclick = wallet.switch_network.reform(|_: MouseEvent| ());

    html! {
        <div class="banner banner-warning">
            <span>{"This network is not supported by RWA Vault."}</span>
            <button class="btn-secondary" {onclick}>
                {format!("Switch to {}", target.name)}
            </button>
        </div>
    }
}
