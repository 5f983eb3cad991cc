use yew::prelude::*;

use crate::hooks::{use_tx_flow, use_wallet_context};
use crate::models::{ActionKind, FlowPhase};
use crate::services::VaultGateway;

#[derive(Properties, PartialEq)]
pub struct RegisterModalProps {
    pub on_close: Callback<()>,
    pub on_registered: Callback<()>,
}

/// One-time wallet registration against the user registry. Creates the
/// on-chain profile with its initial reputation score of 100.
#[function_component(RegisterModal)]
pub fn register_modal(props: &RegisterModalProps) -> Html {
    let wallet = use_wallet_context();

    let on_confirmed = {
        let on_registered = props.on_registered.clone();
        Callback::from(move |_: ActionKind| on_registered.emit(()))
    };
    let tx = use_tx_flow((*wallet.session).clone(), on_confirmed);

    let busy = tx.flow.is_busy();
    let register_label = match tx.flow.phase() {
        FlowPhase::Idle => "Register".to_string(),
        FlowPhase::Submitting(kind) => kind.in_flight_label().to_string(),
        FlowPhase::Confirming { kind, .. } => kind.confirming_label(),
    };

    let on_register = {
        let submit = tx.submit.clone();
        Callback::from(move |_: MouseEvent| {
            submit.emit((ActionKind::Register, VaultGateway::register_request()));
        })
    };

    let close = props.on_close.clone();
    let close_overlay = props.on_close.clone();

    html! {
        <div class="modal active">
            <div class="modal-overlay" onclick={Callback::from(move |_| close_overlay.emit(()))}></div>
            <div class="modal-content modal-small" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <div class="modal-header">
                    <h2>{"🛡 Registration Required"}</h2>
                    <button class="btn-close" onclick={Callback::from(move |_| close.emit(()))}>
                        {"✕"}
                    </button>
                </div>
                <div class="modal-body">
                    <p>
                        {"To access the RWA Vault platform you need to register your wallet \
                          address. This creates your user profile with an initial reputation \
                          score of 100."}
                    </p>
                    <div class="card benefits">
                        <h4>{"Registration benefits"}</h4>
                        <ul>
                            <li>{"Initial reputation score of 100"}</li>
                            <li>{"Access to lending and borrowing"}</li>
                            <li>{"Reputation-tiered borrowing terms"}</li>
                            <li>{"On-chain transaction history"}</li>
                        </ul>
                    </div>

                    if let Some(error) = tx.flow.error() {
                        <div class="inline-error">{format!("Registration failed: {}", error)}</div>
                    }
                </div>
                <div class="modal-actions">
                    <button
                        class="btn-secondary"
                        disabled={busy}
                        onclick={props.on_close.reform(|_: MouseEvent| ())}
                    >
                        {"Cancel"}
                    </button>
                    <button class="btn-primary" disabled={busy} onclick={on_register}>
                        {register_label}
                    </button>
                </div>
            </div>
        </div>
    }
}
