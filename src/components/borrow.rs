use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::{use_pool, use_tx_flow, use_wallet_context};
use crate::models::token::TOKEN_SYMBOL;
use crate::models::vault::BORROW_TERMS;
use crate::models::{act_button, format_amount, parse_amount, ActionKind, GateInput};
use crate::services::VaultGateway;

/// Borrow screen: fixed collateral products, the requestLoan form and
/// the caller's open position.
#[function_component(Borrow)]
pub fn borrow() -> Html {
    let wallet = use_wallet_context();
    let session = (*wallet.session).clone();

    let pool = use_pool(session.address.clone(), session.chain_id);
    let on_confirmed = {
        let refresh = pool.refresh.clone();
        Callback::from(move |_: ActionKind| refresh.emit(()))
    };
    let tx = use_tx_flow(session.clone(), on_confirmed);

    // Loans draw against posted collateral; the stablecoin balance and
    // allowance gates do not apply here.
    let gate = GateInput {
        amount: tx.flow.amount(),
        balance: None,
        allowance: None,
        phase: tx.flow.phase(),
    };
    let borrow_state = act_button(ActionKind::Borrow, &gate);

    let oninput = {
        let set_amount = tx.set_amount.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            set_amount.emit(input.value());
        })
    };

    let on_borrow = {
        let submit = tx.submit.clone();
        let amount = tx.flow.amount().to_string();
        Callback::from(move |_: MouseEvent| {
            let Ok(value) = parse_amount(&amount) else {
                return;
            };
            submit.emit((ActionKind::Borrow, VaultGateway::borrow_request(value)));
        })
    };

    let snapshots = (*pool.snapshots).clone();

    html! {
        <section class="screen">
            <div class="page-header">
                <h1 class="gradient-text">{"Borrow Assets"}</h1>
                <p>{"Access liquidity by borrowing against your crypto and RWA collateral."}</p>
            </div>

            <div class="banner banner-warning">
                <strong>{"Borrowing risks: "}</strong>
                {"borrowing involves liquidation risk. Keep your collateralization ratio \
                  above the threshold or your assets may be liquidated."}
            </div>

            <div class="terms-grid">
                { for BORROW_TERMS.iter().map(|terms| html! {
                    <div class="card terms-card">
                        <div class="terms-head">
                            <h3>{format!("{} → {}", terms.collateral, TOKEN_SYMBOL)}</h3>
                            <span class="rate">{format!("{:.1}%", terms.interest_rate_percent())}</span>
                        </div>
                        <p class="muted">{terms.description}</p>
                        <div class="terms-facts">
                            <div>
                                <span class="muted">{"Max LTV"}</span>
                                <strong>{format!("{}%", terms.max_ltv_percent)}</strong>
                            </div>
                            <div>
                                <span class="muted">{"Liquidation"}</span>
                                <strong>{format!("{}%", terms.liquidation_threshold_percent)}</strong>
                            </div>
                        </div>
                    </div>
                }) }
            </div>

            <div class="card form-card">
                <h2>{"Request a Loan"}</h2>
                <div class="form-group">
                    <label>{"Amount"}</label>
                    <input
                        type="number"
                        min="0"
                        placeholder="Enter amount to borrow"
                        value={tx.flow.amount().to_string()}
                        {oninput}
                    />
                </div>

                <button
                    class="btn-primary"
                    disabled={!borrow_state.enabled()}
                    onclick={on_borrow}
                >
                    {borrow_state.label().to_string()}
                </button>

                if let Some(error) = tx.flow.error() {
                    <div class="inline-error">{error.to_string()}</div>
                }
            </div>

            <div class="card">
                <h2>{"Your Active Loans"}</h2>
                {
                    match &snapshots.position {
                        Some(position) if position.has_debt() => html! {
                            <div class="position-row">
                                <div>
                                    <span class="muted">{"Borrowed"}</span>
                                    <strong>{format!("{} {}", format_amount(position.borrowed), TOKEN_SYMBOL)}</strong>
                                </div>
                                <div>
                                    <span class="muted">{"Collateral Value"}</span>
                                    <strong>{format!("{} {}", format_amount(position.collateral_value), TOKEN_SYMBOL)}</strong>
                                </div>
                                <div>
                                    <span class="muted">{"Health Factor"}</span>
                                    <strong class={ if position.is_liquidatable() { "danger" } else { "ok" } }>
                                        {format!("{:.2}", position.health_factor())}
                                    </strong>
                                </div>
                            </div>
                        },
                        _ => html! {
                            <div class="empty-state">
                                <p>{"No active loans found"}</p>
                                <p class="muted">{"Your loans will appear here once you borrow assets"}</p>
                            </div>
                        },
                    }
                }
            </div>
        </section>
    }
}
