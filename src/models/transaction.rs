use serde::{Deserialize, Serialize};
use strum_macros::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum TxKind {
    #[strum(to_string = "buy")]
    Buy,
    #[strum(to_string = "sell")]
    Sell,
    #[strum(to_string = "swap")]
    Swap,
    #[strum(to_string = "deploy")]
    Deploy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum TxStatus {
    #[strum(to_string = "success")]
    Success,
    #[strum(to_string = "pending")]
    Pending,
    #[strum(to_string = "failed")]
    Failed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub kind: TxKind,
    pub token: String,
    pub amount: String,
    pub status: TxStatus,
    pub time: String,
    pub wallet: String,
    pub tx_hash: String,
}
