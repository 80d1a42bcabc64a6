use eframe::egui::{RichText, Ui};

use crate::ui::config::UI_CONFIG;
use crate::ui::styles::UiStyleExt;

mod bundles;
mod deploy;
mod holdings;
mod monitor;
mod security;
mod settings;
mod trading;
mod wallets;

pub use {
    bundles::BundlesScreen, deploy::DeployScreen, holdings::HoldingsScreen,
    monitor::MonitorScreen, security::SecurityScreen, settings::SettingsScreen,
    trading::TradingScreen, wallets::WalletsScreen,
};

fn page_header(ui: &mut Ui, title: &str, subtitle: &str) {
    ui.label(
        RichText::new(title)
            .strong()
            .size(18.0)
            .color(UI_CONFIG.colors.heading),
    );
    ui.label_subdued(subtitle);
    ui.add_space(8.0);
}
