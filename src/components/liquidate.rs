use yew::prelude::*;

use crate::models::token::TOKEN_SYMBOL;
use crate::models::vault::demo_opportunities;
use crate::models::{format_amount, short_hex};

/// Liquidation screen. Eligibility, discounting and execution all live
/// in the loan vault; this view only lists what is currently seizable.
#[function_component(Liquidate)]
pub fn liquidate() -> Html {
    let opportunities = demo_opportunities();

    // TODO: wire this to the loan vault's liquidation entry point once
    // the deployed ABI exposes it.
    let on_liquidate = Callback::from(|_: MouseEvent| {
        log::warn!("⚠️ Liquidation call not available on this deployment yet");
    });

    html! {
        <section class="screen">
            <div class="card form-card wide">
                <h2 class="gradient-text">{"Liquidation Opportunities"}</h2>

                <div class="opportunity-list">
                    { for opportunities.iter().map(|op| html! {
                        <div class="card opportunity-row">
                            <div class="opportunity-info">
                                <div class="opportunity-icon">{"⚡"}</div>
                                <div>
                                    <strong>{op.collateral_label.clone()}</strong>
                                    <div class="muted">{format!("Borrower: {}", short_hex(&op.borrower))}</div>
                                    <div class="muted">
                                        {format!(
                                            "Collateral: {} {} | Debt: {} {}",
                                            format_amount(op.collateral_value), TOKEN_SYMBOL,
                                            format_amount(op.debt_amount), TOKEN_SYMBOL,
                                        )}
                                    </div>
                                    <div class="bonus">
                                        {format!("Bonus: {} {}", format_amount(op.bonus), TOKEN_SYMBOL)}
                                    </div>
                                </div>
                            </div>
                            <button class="btn-primary" onclick={on_liquidate.clone()}>
                                {"Liquidate"}
                            </button>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
