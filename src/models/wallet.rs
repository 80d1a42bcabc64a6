use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

use crate::config::SolAmount;

/// Session-unique wallet key. Immutable once seeded.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WalletId(String);

impl WalletId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for WalletId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for WalletId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter, Default,
)]
pub enum WalletGroup {
    #[default]
    Trading,
    Sniping,
    Bundler,
    Storage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum WalletStatus {
    #[strum(to_string = "active")]
    Active,
    #[strum(to_string = "paused")]
    Paused,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wallet {
    pub id: WalletId,
    pub address: String,
    pub name: String,
    /// Display text; parsed through [`SolAmount::parse_lossy`] wherever a
    /// number is needed.
    pub balance: String,
    pub group: WalletGroup,
    pub status: WalletStatus,
}

impl Wallet {
    pub fn balance_sol(&self) -> SolAmount {
        SolAmount::parse_lossy(&self.balance)
    }

    pub fn is_active(&self) -> bool {
        self.status == WalletStatus::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wallet_id_serializes_as_a_bare_string() {
        let id = WalletId::from("13");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"13\"");
        let back: WalletId = serde_json::from_str("\"13\"").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn balance_text_drives_the_parsed_amount() {
        let wallet = Wallet {
            id: WalletId::from("x"),
            address: "addr".to_string(),
            name: "X".to_string(),
            balance: "0.775".to_string(),
            group: WalletGroup::Trading,
            status: WalletStatus::Active,
        };
        assert_eq!(wallet.balance_sol().value(), 0.775);
        assert!(wallet.is_active());
    }
}
