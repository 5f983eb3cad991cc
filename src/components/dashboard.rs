use yew::prelude::*;

use crate::hooks::{use_pool, use_wallet_context};
use crate::models::token::TOKEN_SYMBOL;
use crate::models::format_amount;

/// Dashboard: pool-wide figures plus the connected wallet's position
/// and registry profile.
#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let wallet = use_wallet_context();
    let session = (*wallet.session).clone();

    let pool = use_pool(session.address.clone(), session.chain_id);
    let snapshots = (*pool.snapshots).clone();

    let refresh = pool.refresh.reform(|_: MouseEvent| ());

    let amount_cell = |value| format!("{} {}", format_amount(value), TOKEN_SYMBOL);

    html! {
        <section class="screen">
            <div class="page-header">
                <h1 class="gradient-text">{"Your Dashboard"}</h1>
                <p>{"All your RWA DeFi activity in one place."}</p>
                <button class="btn-secondary" onclick={refresh} disabled={snapshots.loading}>
                    { if snapshots.loading { "Refreshing..." } else { "Refresh" } }
                </button>
            </div>

            if let Some(error) = &snapshots.error {
                <div class="inline-error">{error.clone()}</div>
            }

            <div class="stat-grid">
                {
                    match &snapshots.stats {
                        Some(stats) => html! {
                            <>
                                <div class="card stat-card">
                                    <div class="stat-value">{amount_cell(stats.total_deposits)}</div>
                                    <div class="stat-label">{"Total Deposits"}</div>
                                </div>
                                <div class="card stat-card">
                                    <div class="stat-value">{amount_cell(stats.total_borrowed)}</div>
                                    <div class="stat-label">{"Total Borrowed"}</div>
                                </div>
                                <div class="card stat-card">
                                    <div class="stat-value">{amount_cell(stats.available_liquidity)}</div>
                                    <div class="stat-label">{"Available Liquidity"}</div>
                                </div>
                                <div class="card stat-card">
                                    <div class="stat-value">{format!("{:.1}%", stats.utilization_percent())}</div>
                                    <div class="stat-label">{"Utilization"}</div>
                                </div>
                            </>
                        },
                        None => html! {
                            <div class="card stat-card">
                                <div class="stat-label">{"Loading pool stats..."}</div>
                            </div>
                        },
                    }
                }
            </div>

            <div class="panel-grid">
                <div class="card">
                    <h2>{"Your Position"}</h2>
                    {
                        match &snapshots.position {
                            Some(position) => html! {
                                <div class="position-row">
                                    <div>
                                        <span class="muted">{"Deposited"}</span>
                                        <strong>{amount_cell(position.deposited)}</strong>
                                    </div>
                                    <div>
                                        <span class="muted">{"Borrowed"}</span>
                                        <strong>{amount_cell(position.borrowed)}</strong>
                                    </div>
                                    <div>
                                        <span class="muted">{"Collateral Value"}</span>
                                        <strong>{amount_cell(position.collateral_value)}</strong>
                                    </div>
                                    <div>
                                        <span class="muted">{"Health Factor"}</span>
                                        <strong class={ if position.is_liquidatable() { "danger" } else { "ok" } }>
                                            { if position.has_debt() {
                                                format!("{:.2}", position.health_factor())
                                              } else {
                                                "∞".to_string()
                                              } }
                                        </strong>
                                    </div>
                                </div>
                            },
                            None => html! { <p class="muted">{"No position data yet."}</p> },
                        }
                    }
                </div>

                <div class="card">
                    <h2>{"Your Profile"}</h2>
                    {
                        match &snapshots.profile {
                            Some(profile) => html! {
                                <div class="position-row">
                                    <div>
                                        <span class="muted">{"Reputation"}</span>
                                        <strong>{profile.reputation_score.to_string()}</strong>
                                    </div>
                                    <div>
                                        <span class="muted">{"Tier"}</span>
                                        <strong>
                                            { snapshots.tier.map(|t| t.label()).unwrap_or("—") }
                                        </strong>
                                    </div>
                                    <div>
                                        <span class="muted">{"Status"}</span>
                                        <strong>{ if profile.active { "Active" } else { "Inactive" } }</strong>
                                    </div>
                                </div>
                            },
                            None => html! { <p class="muted">{"Register to build an on-chain profile."}</p> },
                        }
                    }
                </div>
            </div>
        </section>
    }
}
