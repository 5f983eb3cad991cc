use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::services::GatewayError;

#[wasm_bindgen]
extern "C" {
    /// The injected EIP-1193 provider (MetaMask and friends).
    pub type Eip1193Provider;

    #[wasm_bindgen(method, catch)]
    async fn request(this: &Eip1193Provider, args: &JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method)]
    fn on(this: &Eip1193Provider, event: &str, listener: &Function);
}

pub fn has_injected_provider() -> bool {
    injected_provider().is_ok()
}

fn injected_provider() -> Result<Eip1193Provider, GatewayError> {
    let win = web_sys::window().ok_or(GatewayError::WalletUnavailable)?;
    let ethereum = Reflect::get(&win, &JsValue::from_str("ethereum"))
        .map_err(|_| GatewayError::WalletUnavailable)?;
    if ethereum.is_undefined() || ethereum.is_null() {
        return Err(GatewayError::WalletUnavailable);
    }
    Ok(ethereum.unchecked_into())
}

/// EIP-1193 code 4001 is the user clicking "reject" in the wallet popup.
fn classify_provider_error(err: JsValue) -> GatewayError {
    let code = Reflect::get(&err, &JsValue::from_str("code"))
        .ok()
        .and_then(|v| v.as_f64())
        .map(|c| c as i64);
    let message = Reflect::get(&err, &JsValue::from_str("message"))
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_else(|| "Unknown provider error".to_string());

    match code {
        Some(4001) => GatewayError::Rejected,
        Some(code) => GatewayError::Rpc { code, message },
        None => GatewayError::Network(message),
    }
}

async fn provider_request(method: &str, params: JsValue) -> Result<JsValue, GatewayError> {
    let provider = injected_provider()?;

    let args = Object::new();
    let _ = Reflect::set(&args, &JsValue::from_str("method"), &JsValue::from_str(method));
    if !params.is_undefined() {
        let _ = Reflect::set(&args, &JsValue::from_str("params"), &params);
    }

    provider
        .request(&args)
        .await
        .map_err(classify_provider_error)
}

fn js_accounts(value: JsValue) -> Vec<String> {
    Array::from(&value)
        .iter()
        .filter_map(|entry| entry.as_string())
        .collect()
}

fn parse_hex_u64(value: &str) -> Result<u64, GatewayError> {
    u64::from_str_radix(value.trim_start_matches("0x"), 16)
        .map_err(|_| GatewayError::Decode(format!("bad hex quantity: {}", value)))
}

/// Open the wallet's connect dialog.
pub async fn request_accounts() -> Result<Vec<String>, GatewayError> {
    let result = provider_request("eth_requestAccounts", JsValue::UNDEFINED).await?;
    Ok(js_accounts(result))
}

/// Silent query of already-authorized accounts (eager reconnect on load).
pub async fn current_accounts() -> Result<Vec<String>, GatewayError> {
    let result = provider_request("eth_accounts", JsValue::UNDEFINED).await?;
    Ok(js_accounts(result))
}

pub async fn chain_id() -> Result<u64, GatewayError> {
    let result = provider_request("eth_chainId", JsValue::UNDEFINED).await?;
    let hex_id = result
        .as_string()
        .ok_or_else(|| GatewayError::Decode("eth_chainId did not return a string".into()))?;
    parse_hex_u64(&hex_id)
}

/// Submit a transaction through the wallet; returns the transaction hash.
/// Once this resolves, the transaction is out of our hands.
pub async fn send_transaction(
    from: &str,
    to: &str,
    data: &[u8],
) -> Result<String, GatewayError> {
    let tx = Object::new();
    let _ = Reflect::set(&tx, &JsValue::from_str("from"), &JsValue::from_str(from));
    let _ = Reflect::set(&tx, &JsValue::from_str("to"), &JsValue::from_str(to));
    let _ = Reflect::set(
        &tx,
        &JsValue::from_str("data"),
        &JsValue::from_str(&format!("0x{}", hex::encode(data))),
    );

    let params = Array::new();
    params.push(&tx);

    let result = provider_request("eth_sendTransaction", params.into()).await?;
    result
        .as_string()
        .ok_or_else(|| GatewayError::Decode("eth_sendTransaction did not return a hash".into()))
}

pub async fn switch_chain(chain_id: u64) -> Result<(), GatewayError> {
    let target = Object::new();
    let _ = Reflect::set(
        &target,
        &JsValue::from_str("chainId"),
        &JsValue::from_str(&format!("0x{:x}", chain_id)),
    );

    let params = Array::new();
    params.push(&target);

    provider_request("wallet_switchEthereumChain", params.into()).await?;
    Ok(())
}

/// Wallet event subscriptions. Registered once at app start, so the
/// leaked closures never accumulate.
pub fn on_accounts_changed(mut callback: impl FnMut(Vec<String>) + 'static) {
    let Ok(provider) = injected_provider() else {
        return;
    };
    let closure = Closure::wrap(Box::new(move |accounts: JsValue| {
        callback(js_accounts(accounts));
    }) as Box<dyn FnMut(JsValue)>);
    provider.on("accountsChanged", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn on_chain_changed(mut callback: impl FnMut(u64) + 'static) {
    let Ok(provider) = injected_provider() else {
        return;
    };
    let closure = Closure::wrap(Box::new(move |chain: JsValue| {
        if let Some(hex_id) = chain.as_string() {
            match parse_hex_u64(&hex_id) {
                Ok(id) => callback(id),
                Err(e) => log::error!("❌ chainChanged with bad payload: {}", e),
            }
        }
    }) as Box<dyn FnMut(JsValue)>);
    provider.on("chainChanged", closure.as_ref().unchecked_ref());
    closure.forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_quantities_parse() {
        assert_eq!(parse_hex_u64("0x1").unwrap(), 1);
        assert_eq!(parse_hex_u64("0xaa36a7").unwrap(), 11155111);
        assert!(parse_hex_u64("0xzz").is_err());
    }
}
