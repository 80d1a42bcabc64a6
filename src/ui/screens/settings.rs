use eframe::egui::{ComboBox, DragValue, Slider, TextEdit, Ui};
use strum::IntoEnumIterator;

use crate::app::AppStore;
use crate::config::SolAmount;
use crate::models::{
    AppSettingsUpdate, JitoTipMode, SLIPPAGE_RANGE_PCT, TradingSettingsUpdate,
};
use crate::ui::config::UI_TEXT;
use crate::ui::styles::UiStyleExt;

const RPC_PRESETS: [&str; 3] = ["mainnet", "devnet", "custom"];

/// Settings form. Every widget edits a local copy of the current value and
/// pushes a partial update into the store on change, so untouched fields are
/// never rewritten.
pub struct SettingsScreen;

impl SettingsScreen {
    pub fn render(ui: &mut Ui, store: &mut AppStore) {
        super::page_header(ui, UI_TEXT.settings_title, "");

        Self::rpc_section(ui, store);
        ui.separator();
        Self::trading_section(ui, store);
        ui.separator();
        Self::notifications_section(ui, store);
        ui.separator();
        Self::appearance_section(ui, store);
    }

    fn rpc_section(ui: &mut Ui, store: &mut AppStore) {
        ui.label_subheader("RPC");
        let mut endpoint = store.settings().rpc_endpoint.clone();
        let mut changed = false;
        ComboBox::from_label("Endpoint")
            .selected_text(endpoint.clone())
            .show_ui(ui, |ui| {
                for preset in RPC_PRESETS {
                    changed |= ui
                        .selectable_value(&mut endpoint, preset.to_string(), preset)
                        .changed();
                }
            });
        if changed {
            store.update_settings(AppSettingsUpdate {
                rpc_endpoint: Some(endpoint.clone()),
                ..Default::default()
            });
        }

        if endpoint == "custom" {
            let mut custom = store.settings().custom_rpc.clone();
            if ui
                .add(TextEdit::singleline(&mut custom).hint_text("https://..."))
                .changed()
            {
                store.update_settings(AppSettingsUpdate {
                    custom_rpc: Some(custom),
                    ..Default::default()
                });
            }
        }
    }

    fn trading_section(ui: &mut Ui, store: &mut AppStore) {
        ui.label_subheader("Trading");
        let trading = store.settings().trading.clone();

        let mut slippage = trading.slippage_pct;
        if ui
            .add(
                Slider::new(&mut slippage, SLIPPAGE_RANGE_PCT.0..=SLIPPAGE_RANGE_PCT.1)
                    .text(UI_TEXT.label_slippage)
                    .suffix("%"),
            )
            .changed()
        {
            store.update_trading_settings(TradingSettingsUpdate {
                slippage_pct: Some(slippage),
                ..Default::default()
            });
        }

        let mut fee = trading.priority_fee_sol.value();
        ui.horizontal(|ui| {
            if ui
                .add(DragValue::new(&mut fee).speed(0.0001).range(0.0..=1.0))
                .changed()
            {
                store.update_trading_settings(TradingSettingsUpdate {
                    priority_fee_sol: Some(SolAmount::new(fee)),
                    ..Default::default()
                });
            }
            ui.label_subdued(UI_TEXT.label_priority_fee);
        });

        let mut units = trading.compute_units;
        ui.horizontal(|ui| {
            if ui
                .add(DragValue::new(&mut units).speed(1000).range(0..=1_400_000))
                .changed()
            {
                store.update_trading_settings(TradingSettingsUpdate {
                    compute_units: Some(units),
                    ..Default::default()
                });
            }
            ui.label_subdued(UI_TEXT.label_compute_units);
        });

        ui.horizontal(|ui| {
            ui.label_subdued(UI_TEXT.label_jito_tip);
            for mode in JitoTipMode::iter() {
                let mut current = trading.jito_tip;
                if ui
                    .selectable_value(&mut current, mode, mode.to_string())
                    .clicked()
                {
                    // Switching back to auto also clears the manual amount.
                    store.update_trading_settings(TradingSettingsUpdate {
                        jito_tip: Some(mode),
                        jito_tip_sol: (mode == JitoTipMode::Auto).then_some(None),
                        ..Default::default()
                    });
                }
            }
        });
        if trading.jito_tip == JitoTipMode::Manual {
            let mut tip = trading.jito_tip_sol.unwrap_or(0.001);
            if ui
                .add(DragValue::new(&mut tip).speed(0.0001).range(0.0..=1.0))
                .changed()
            {
                store.update_trading_settings(TradingSettingsUpdate {
                    jito_tip_sol: Some(Some(tip)),
                    ..Default::default()
                });
            }
        }
    }

    fn notifications_section(ui: &mut Ui, store: &mut AppStore) {
        ui.label_subheader("Notifications");
        let mut notifications = store.settings().notifications;
        let changed = ui.checkbox(&mut notifications.trades, "Trade confirmations").changed()
            | ui.checkbox(&mut notifications.price_alerts, "Price alerts").changed()
            | ui.checkbox(&mut notifications.transactions, "Transaction results").changed();
        if changed {
            store.update_settings(AppSettingsUpdate {
                notifications: Some(notifications),
                ..Default::default()
            });
        }
    }

    fn appearance_section(ui: &mut Ui, store: &mut AppStore) {
        ui.label_subheader("Appearance");
        let mut appearance = store.settings().appearance;
        let changed = ui.checkbox(&mut appearance.compact_mode, "Compact mode").changed()
            | ui.checkbox(&mut appearance.animations, "Animations").changed();
        if changed {
            store.update_settings(AppSettingsUpdate {
                appearance: Some(appearance),
                ..Default::default()
            });
        }
    }
}
