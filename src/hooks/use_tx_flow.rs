use std::rc::Rc;

use yew::prelude::*;

use crate::models::{ActionKind, TxFlow, WalletSession};
use crate::services::{wallet_bridge, GatewayError, RpcClient, TxRequest};

pub enum FlowAction {
    SetAmount(String),
    Begin(ActionKind),
    Submitted(String),
    Settled(Result<(), String>),
}

impl Reducible for TxFlow {
    type Action = FlowAction;

    fn reduce(self: Rc<Self>, action: FlowAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FlowAction::SetAmount(value) => next.set_amount(value),
            FlowAction::Begin(kind) => {
                next.begin(kind);
            }
            FlowAction::Submitted(hash) => next.submitted(hash),
            FlowAction::Settled(Ok(())) => next.settle_success(),
            FlowAction::Settled(Err(message)) => next.settle_error(message),
        }
        next.into()
    }
}

#[derive(Clone, PartialEq)]
pub struct UseTxFlowHandle {
    pub flow: UseReducerHandle<TxFlow>,
    pub set_amount: Callback<String>,
    pub submit: Callback<(ActionKind, TxRequest)>,
}

/// Drives one form's transaction lifecycle: claim the form, hand the
/// payload to the wallet, watch the receipt, settle, tell the screen to
/// refresh its snapshots.
///
/// Submitted transactions cannot be withdrawn; on navigation only the
/// pending flag is abandoned.
#[hook]
pub fn use_tx_flow(session: WalletSession, on_confirmed: Callback<ActionKind>) -> UseTxFlowHandle {
    let flow = use_reducer(TxFlow::new);
    // Synchronous in-flight guard. Render state lags a tick behind rapid
    // double-clicks; this flag does not.
    let busy = use_mut_ref(|| false);

    let set_amount = {
        let flow = flow.clone();
        Callback::from(move |value: String| {
            flow.dispatch(FlowAction::SetAmount(value));
        })
    };

    let submit = {
        let flow = flow.clone();
        Callback::from(move |(kind, request): (ActionKind, TxRequest)| {
            if *busy.borrow() {
                log::warn!("⚠️ {} ignored: another action is in flight", kind.verb());
                return;
            }

            let (address, chain_id) = match (session.address.clone(), session.chain_id) {
                (Some(address), Some(chain_id)) => (address, chain_id),
                _ => {
                    log::error!("❌ {} without a connected wallet", kind.verb());
                    return;
                }
            };

            *busy.borrow_mut() = true;
            flow.dispatch(FlowAction::Begin(kind));
            log::info!("📤 {} transaction to {}", kind.verb(), request.to);

            let flow = flow.clone();
            let busy = busy.clone();
            let on_confirmed = on_confirmed.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = run_transaction(&flow, &address, chain_id, request).await;

                *busy.borrow_mut() = false;
                match result {
                    Ok(()) => {
                        log::info!("✅ {} confirmed", kind.verb());
                        flow.dispatch(FlowAction::Settled(Ok(())));
                        on_confirmed.emit(kind);
                    }
                    Err(e) => {
                        log::error!("❌ {} failed: {}", kind.verb(), e);
                        flow.dispatch(FlowAction::Settled(Err(e.to_string())));
                    }
                }
            });
        })
    };

    UseTxFlowHandle {
        flow,
        set_amount,
        submit,
    }
}

async fn run_transaction(
    flow: &UseReducerHandle<TxFlow>,
    address: &str,
    chain_id: u64,
    request: TxRequest,
) -> Result<(), GatewayError> {
    let hash = wallet_bridge::send_transaction(address, request.to, &request.data).await?;
    flow.dispatch(FlowAction::Submitted(hash.clone()));

    let rpc = RpcClient::for_chain(chain_id)?;
    rpc.wait_for_receipt(&hash).await
}
