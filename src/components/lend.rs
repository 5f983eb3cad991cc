use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config::{chain_profile, CONFIG};
use crate::hooks::{use_balances, use_tx_flow, use_wallet_context};
use crate::models::token::{whole_tokens, TOKEN_SYMBOL};
use crate::models::{
    act_button, approve_button, format_amount, parse_amount, ActionKind, GateInput,
};
use crate::services::VaultGateway;

const FAUCET_AMOUNT: u64 = 1_000;

/// Lend screen: the approve-then-deposit form against the lending pool,
/// plus the open test-token faucet.
#[function_component(Lend)]
pub fn lend() -> Html {
    let wallet = use_wallet_context();
    let session = (*wallet.session).clone();

    let balances = use_balances(session.clone());
    let on_confirmed = {
        // Every confirmation invalidates the snapshots: approvals change
        // the allowance, deposits and mints change the balance.
        let refresh = balances.refresh.clone();
        Callback::from(move |_: ActionKind| refresh.emit(()))
    };
    let tx = use_tx_flow(session.clone(), on_confirmed);

    let snapshots = (*balances.snapshots).clone();
    let gate = GateInput {
        amount: tx.flow.amount(),
        balance: snapshots.balance,
        allowance: snapshots.allowance,
        phase: tx.flow.phase(),
    };
    let approve_state = approve_button(&gate);
    let deposit_state = act_button(ActionKind::Deposit, &gate);

    let oninput = {
        let set_amount = tx.set_amount.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            set_amount.emit(input.value());
        })
    };

    let on_approve = {
        let submit = tx.submit.clone();
        let amount = tx.flow.amount().to_string();
        Callback::from(move |_: MouseEvent| {
            let Ok(value) = parse_amount(&amount) else {
                return;
            };
            match VaultGateway::approve_request(value) {
                Ok(request) => submit.emit((ActionKind::Approve, request)),
                Err(e) => log::error!("❌ Could not build approval: {}", e),
            }
        })
    };

    let on_deposit = {
        let submit = tx.submit.clone();
        let amount = tx.flow.amount().to_string();
        Callback::from(move |_: MouseEvent| {
            let Ok(value) = parse_amount(&amount) else {
                return;
            };
            submit.emit((ActionKind::Deposit, VaultGateway::deposit_request(value)));
        })
    };

    let minting = tx.flow.in_flight() == Some(ActionKind::Mint);
    let on_faucet = {
        let submit = tx.submit.clone();
        let address = session.address.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(address) = address.clone() else {
                return;
            };
            match VaultGateway::faucet_mint_request(&address, whole_tokens(FAUCET_AMOUNT)) {
                Ok(request) => submit.emit((ActionKind::Mint, request)),
                Err(e) => log::error!("❌ Could not build faucet mint: {}", e),
            }
        })
    };

    let balance_text = snapshots
        .balance
        .map(|balance| format!("{} {}", format_amount(balance), TOKEN_SYMBOL))
        .unwrap_or_else(|| "—".to_string());

    let explorer_link = tx.flow.pending_hash().and_then(|hash| {
        session
            .chain_id
            .and_then(chain_profile)
            .map(|chain| (format!("{}/tx/{}", chain.explorer_url, hash), hash.to_string()))
    });

    html! {
        <section class="screen">
            <div class="card form-card">
                <h2 class="gradient-text">{"Lend Stablecoin"}</h2>

                <div class="form-group">
                    <label>{"Stablecoin Address"}</label>
                    <div class="address-box">{CONFIG.stablecoin_address}</div>
                </div>

                <div class="form-group">
                    <label>{"Amount"}</label>
                    <input
                        type="number"
                        min="0"
                        placeholder="Enter amount to lend"
                        value={tx.flow.amount().to_string()}
                        {oninput}
                    />
                    <div class="hint">{format!("Balance: {}", balance_text)}</div>
                </div>

                <button
                    class="btn-primary"
                    disabled={!approve_state.enabled()}
                    onclick={on_approve}
                >
                    {approve_state.label().to_string()}
                </button>

                <button
                    class="btn-primary"
                    disabled={!deposit_state.enabled()}
                    onclick={on_deposit}
                >
                    {deposit_state.label().to_string()}
                </button>

                <button
                    class="btn-faucet"
                    disabled={tx.flow.is_busy()}
                    onclick={on_faucet}
                >
                    { if minting { "Minting...".to_string() }
                      else { format!("Mint {} {} (Test)", FAUCET_AMOUNT, TOKEN_SYMBOL) } }
                </button>

                if let Some(error) = tx.flow.error() {
                    <div class="inline-error">{error.to_string()}</div>
                }

                if let Some((url, hash)) = explorer_link {
                    <a class="tx-link" href={url} target="_blank" rel="noreferrer">
                        {format!("Waiting for confirmation: {}", crate::models::short_hex(&hash))}
                    </a>
                }
            </div>
        </section>
    }
}
