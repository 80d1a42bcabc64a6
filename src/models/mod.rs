mod bundle;
mod candle;
mod holding;
mod security;
mod settings;
mod token;
mod trade;
mod transaction;
mod wallet;

pub use {
    bundle::{BundleConfig, BundleStatus},
    candle::Candle,
    holding::Holding,
    security::{CheckStatus, SecurityCheck},
    settings::{
        AppSettings, AppSettingsUpdate, AppearanceSettings, JitoTipMode, NotificationSettings,
        SLIPPAGE_RANGE_PCT, TradingSettings, TradingSettingsUpdate,
    },
    token::Token,
    trade::{TradeMode, TradeTick},
    transaction::{Transaction, TxKind, TxStatus},
    wallet::{Wallet, WalletGroup, WalletId, WalletStatus},
};
