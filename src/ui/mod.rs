mod chart_area;
mod header;
mod sidebar;
mod token_info;
mod trading_panel;
mod wallet_panel;

pub mod config;
pub mod screens;
pub mod styles;
pub mod ui_text;

pub(crate) use {
    header::Header, sidebar::Sidebar, trading_panel::TradingPanel, wallet_panel::WalletPanel,
};
