use serde::{Deserialize, Serialize};

/// Portfolio row on the holdings screen. Values are display strings from the
/// seed; only the PnL number feeds the profit/loss filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    pub id: String,
    pub token: String,
    pub symbol: String,
    pub balance: String,
    pub value_usd: f64,
    pub price: String,
    pub change_24h: f64,
    pub pnl_usd: f64,
    pub wallet: String,
}

impl Holding {
    pub fn in_profit(&self) -> bool {
        self.pnl_usd > 0.0
    }
}
