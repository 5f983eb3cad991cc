use serde::{Deserialize, Serialize};

use crate::config::is_supported_chain;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum ConnectionStatus {
    /// No injected provider was found in this browser.
    Unavailable,
    Disconnected,
    Connecting,
    Connected,
}

/// Wallet view state. Created on connect, cleared on disconnect; the
/// wallet hook is the only writer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WalletSession {
    pub address: Option<String>,
    pub chain_id: Option<u64>,
    pub status: ConnectionStatus,
}

impl WalletSession {
    pub fn disconnected() -> Self {
        Self {
            address: None,
            chain_id: None,
            status: ConnectionStatus::Disconnected,
        }
    }

    pub fn unavailable() -> Self {
        Self {
            address: None,
            chain_id: None,
            status: ConnectionStatus::Unavailable,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.status == ConnectionStatus::Connected && self.address.is_some()
    }

    /// Connected to a chain outside the allow-list.
    pub fn wrong_network(&self) -> bool {
        match (self.is_connected(), self.chain_id) {
            (true, Some(id)) => !is_supported_chain(id),
            _ => false,
        }
    }

    /// "0x1234…abcd" display form for the navbar.
    pub fn short_address(&self) -> Option<String> {
        self.address.as_deref().map(short_hex)
    }
}

/// Truncate a hex address for display.
pub fn short_hex(value: &str) -> String {
    if value.len() > 10 {
        format!("{}…{}", &value[..6], &value[value.len() - 4..])
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn connected(chain_id: u64) -> WalletSession {
        WalletSession {
            address: Some("0x1234567890abcdef1234567890abcdef12345678".into()),
            chain_id: Some(chain_id),
            status: ConnectionStatus::Connected,
        }
    }

    #[test]
    fn short_address_truncates() {
        let session = connected(1);
        assert_eq!(session.short_address().unwrap(), "0x1234…5678");
        assert_eq!(WalletSession::disconnected().short_address(), None);
    }

    #[test]
    fn wrong_network_only_when_connected() {
        assert!(connected(56).wrong_network());
        assert!(!connected(11155111).wrong_network());

        let mut idle = WalletSession::disconnected();
        idle.chain_id = Some(56);
        assert!(!idle.wrong_network());
    }
}
