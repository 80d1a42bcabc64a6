use serde::{Deserialize, Serialize};

/// The single trading subject the dashboard revolves around. Absent when no
/// token is chosen; dependent panels show a placeholder instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub address: String,
    pub symbol: String,
    pub name: String,
    pub price: f64,
    pub price_change_24h: f64,
    pub volume_24h: String,
    pub market_cap: String,
}

impl Token {
    pub fn is_up_24h(&self) -> bool {
        self.price_change_24h >= 0.0
    }
}
