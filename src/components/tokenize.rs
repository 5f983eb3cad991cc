use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::{use_tx_flow, use_wallet_context};
use crate::models::{act_button, parse_amount, ActionKind, ButtonState, GateInput};
use crate::services::VaultGateway;

/// Tokenize screen: mint an RWA token for an off-chain asset with its
/// appraised value. The appraisal itself happens off-chain.
#[function_component(Tokenize)]
pub fn tokenize() -> Html {
    let wallet = use_wallet_context();
    let session = (*wallet.session).clone();

    let asset_label = use_state(String::new);

    let on_confirmed = {
        let asset_label = asset_label.clone();
        Callback::from(move |_: ActionKind| asset_label.set(String::new()))
    };
    let tx = use_tx_flow(session, on_confirmed);

    let gate = GateInput {
        amount: tx.flow.amount(),
        balance: None,
        allowance: None,
        phase: tx.flow.phase(),
    };
    let mint_state = if asset_label.trim().is_empty() {
        ButtonState::Blocked("Name the Asset".to_string())
    } else {
        act_button(ActionKind::Mint, &gate)
    };

    let on_label_input = {
        let asset_label = asset_label.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            asset_label.set(input.value());
        })
    };

    let on_value_input = {
        let set_amount = tx.set_amount.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            set_amount.emit(input.value());
        })
    };

    let on_mint = {
        let submit = tx.submit.clone();
        let asset_label = asset_label.clone();
        let amount = tx.flow.amount().to_string();
        Callback::from(move |_: MouseEvent| {
            let label = asset_label.trim().to_string();
            if label.is_empty() {
                return;
            }
            let Ok(value) = parse_amount(&amount) else {
                return;
            };
            submit.emit((
                ActionKind::Mint,
                VaultGateway::tokenize_request(&label, value),
            ));
        })
    };

    html! {
        <section class="screen">
            <div class="card form-card">
                <h2 class="gradient-text">{"Tokenize an Asset"}</h2>
                <p class="muted">
                    {"Mint an on-chain representation of a real-world asset. The minted \
                      token can be posted as loan collateral."}
                </p>

                <div class="form-group">
                    <label>{"Asset"}</label>
                    <input
                        type="text"
                        placeholder="e.g. Warehouse deed #4281"
                        value={(*asset_label).clone()}
                        oninput={on_label_input}
                    />
                </div>

                <div class="form-group">
                    <label>{"Appraised Value"}</label>
                    <input
                        type="number"
                        min="0"
                        placeholder="Enter appraised value"
                        value={tx.flow.amount().to_string()}
                        oninput={on_value_input}
                    />
                </div>

                <button
                    class="btn-primary"
                    disabled={!mint_state.enabled()}
                    onclick={on_mint}
                >
                    {mint_state.label().to_string()}
                </button>

                if let Some(error) = tx.flow.error() {
                    <div class="inline-error">{error.to_string()}</div>
                }
            </div>
        </section>
    }
}
