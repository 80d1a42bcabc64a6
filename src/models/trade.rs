use serde::{Deserialize, Serialize};
use strum_macros::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, Default)]
pub enum TradeMode {
    #[default]
    #[strum(to_string = "buy")]
    Buy,
    #[strum(to_string = "sell")]
    Sell,
}

/// One row of the live-trades tape under the chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeTick {
    pub time: String,
    pub mode: TradeMode,
    pub market_cap: String,
    pub amount: String,
    pub total_sol: String,
    pub trader: String,
}
