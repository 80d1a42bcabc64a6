use eframe::egui::{Frame, RichText, Ui};

use crate::data::seed;
use crate::models::{BundleConfig, BundleStatus};
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;

/// Saved multi-wallet execution presets. "Run" only flips the mock status.
pub struct BundlesScreen {
    bundles: Vec<BundleConfig>,
}

impl Default for BundlesScreen {
    fn default() -> Self {
        Self {
            bundles: seed::bundles(),
        }
    }
}

impl BundlesScreen {
    pub fn render(&mut self, ui: &mut Ui) {
        super::page_header(ui, UI_TEXT.bundles_title, UI_TEXT.bundles_subtitle);

        for bundle in &mut self.bundles {
            Frame {
                fill: UI_CONFIG.colors.side_panel,
                inner_margin: eframe::egui::Margin::same(8),
                corner_radius: eframe::egui::CornerRadius::same(4),
                ..Default::default()
            }
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(&bundle.name)
                            .strong()
                            .color(UI_CONFIG.colors.heading),
                    );
                    let (text, color) = match bundle.status {
                        BundleStatus::Ready => ("READY", UI_CONFIG.colors.buy),
                        BundleStatus::Running => ("RUNNING", UI_CONFIG.colors.warning),
                        BundleStatus::Completed => ("COMPLETED", UI_CONFIG.colors.subdued),
                    };
                    ui.status_chip(text, color);
                });
                ui.horizontal(|ui| {
                    ui.metric(
                        "Wallets",
                        &bundle.wallet_count.to_string(),
                        UI_CONFIG.colors.label,
                    );
                    ui.metric(
                        "Per Wallet",
                        &format!("{} SOL", bundle.amount_per_wallet),
                        UI_CONFIG.colors.label,
                    );
                    ui.metric(
                        "Delay",
                        &format!("{}-{} ms", bundle.delay_ms.0, bundle.delay_ms.1),
                        UI_CONFIG.colors.label,
                    );
                    ui.metric(
                        "Anti-Detection",
                        if bundle.anti_detection { "on" } else { "off" },
                        UI_CONFIG.colors.label,
                    );
                });
                if bundle.status == BundleStatus::Ready && ui.small_button("Run").clicked() {
                    bundle.status = BundleStatus::Running;
                    log::info!("bundle {} started (mock)", bundle.id);
                }
            });
            ui.add_space(6.0);
        }
    }
}
