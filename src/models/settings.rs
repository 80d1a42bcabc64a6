//! User-configured execution parameters. Configuration only: nothing here is
//! validated against a live network.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

use crate::config::SolAmount;

/// Slippage bounds enforced by the settings slider.
pub const SLIPPAGE_RANGE_PCT: (f64, f64) = (0.1, 15.0);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter, Default,
)]
pub enum JitoTipMode {
    #[default]
    #[strum(to_string = "auto")]
    Auto,
    #[strum(to_string = "manual")]
    Manual,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradingSettings {
    pub slippage_pct: f64,
    pub priority_fee_sol: SolAmount,
    pub compute_units: u32,
    pub jito_tip: JitoTipMode,
    /// Only meaningful when `jito_tip` is `Manual`.
    pub jito_tip_sol: Option<f64>,
}

impl Default for TradingSettings {
    fn default() -> Self {
        Self {
            slippage_pct: 1.0,
            priority_fee_sol: SolAmount::new(0.0001),
            compute_units: 200_000,
            jito_tip: JitoTipMode::Auto,
            jito_tip_sol: None,
        }
    }
}

/// Partial update for [`TradingSettings`]: every `Some` field is merged in,
/// every `None` field leaves the current value untouched.
#[derive(Debug, Clone, Default)]
pub struct TradingSettingsUpdate {
    pub slippage_pct: Option<f64>,
    pub priority_fee_sol: Option<SolAmount>,
    pub compute_units: Option<u32>,
    pub jito_tip: Option<JitoTipMode>,
    pub jito_tip_sol: Option<Option<f64>>,
}

impl TradingSettings {
    pub fn apply(&mut self, update: TradingSettingsUpdate) {
        if let Some(v) = update.slippage_pct {
            self.slippage_pct = v;
        }
        if let Some(v) = update.priority_fee_sol {
            self.priority_fee_sol = v;
        }
        if let Some(v) = update.compute_units {
            self.compute_units = v;
        }
        if let Some(v) = update.jito_tip {
            self.jito_tip = v;
        }
        if let Some(v) = update.jito_tip_sol {
            self.jito_tip_sol = v;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NotificationSettings {
    pub trades: bool,
    pub price_alerts: bool,
    pub transactions: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            trades: true,
            price_alerts: true,
            transactions: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AppearanceSettings {
    pub compact_mode: bool,
    pub animations: bool,
}

impl Default for AppearanceSettings {
    fn default() -> Self {
        Self {
            compact_mode: false,
            animations: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    pub rpc_endpoint: String,
    pub custom_rpc: String,
    pub trading: TradingSettings,
    pub notifications: NotificationSettings,
    pub appearance: AppearanceSettings,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            rpc_endpoint: "mainnet".to_string(),
            custom_rpc: String::new(),
            trading: TradingSettings::default(),
            notifications: NotificationSettings::default(),
            appearance: AppearanceSettings::default(),
        }
    }
}

/// Top-level shallow merge. `trading` is patched through its own update type
/// so a slippage change cannot clobber the fee fields.
#[derive(Debug, Clone, Default)]
pub struct AppSettingsUpdate {
    pub rpc_endpoint: Option<String>,
    pub custom_rpc: Option<String>,
    pub notifications: Option<NotificationSettings>,
    pub appearance: Option<AppearanceSettings>,
}

impl AppSettings {
    pub fn apply(&mut self, update: AppSettingsUpdate) {
        if let Some(v) = update.rpc_endpoint {
            self.rpc_endpoint = v;
        }
        if let Some(v) = update.custom_rpc {
            self.custom_rpc = v;
        }
        if let Some(v) = update.notifications {
            self.notifications = v;
        }
        if let Some(v) = update.appearance {
            self.appearance = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trading_update_merges_only_provided_fields() {
        let mut settings = TradingSettings::default();
        settings.apply(TradingSettingsUpdate {
            slippage_pct: Some(5.0),
            ..Default::default()
        });

        assert_eq!(settings.slippage_pct, 5.0);
        assert_eq!(settings.priority_fee_sol, SolAmount::new(0.0001));
        assert_eq!(settings.compute_units, 200_000);
        assert_eq!(settings.jito_tip, JitoTipMode::Auto);
        assert_eq!(settings.jito_tip_sol, None);
    }

    #[test]
    fn manual_tip_amount_can_be_set_and_cleared() {
        let mut settings = TradingSettings::default();
        settings.apply(TradingSettingsUpdate {
            jito_tip: Some(JitoTipMode::Manual),
            jito_tip_sol: Some(Some(0.005)),
            ..Default::default()
        });
        assert_eq!(settings.jito_tip_sol, Some(0.005));

        settings.apply(TradingSettingsUpdate {
            jito_tip: Some(JitoTipMode::Auto),
            jito_tip_sol: Some(None),
            ..Default::default()
        });
        assert_eq!(settings.jito_tip_sol, None);
    }

    #[test]
    fn app_update_keeps_trading_intact() {
        let mut settings = AppSettings::default();
        settings.trading.slippage_pct = 7.5;

        settings.apply(AppSettingsUpdate {
            rpc_endpoint: Some("custom".to_string()),
            ..Default::default()
        });

        assert_eq!(settings.rpc_endpoint, "custom");
        assert_eq!(settings.trading.slippage_pct, 7.5);
        assert!(settings.notifications.trades);
    }
}
