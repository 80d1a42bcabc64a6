use eframe::egui::{Button, Context, RichText, SidePanel, TextEdit, Vec2};

use crate::app::AppStore;
use crate::models::{JitoTipMode, TradeMode};
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::{ModeColor, UiStyleExt};
use crate::utils::{format_price, format_sol};

const QUICK_AMOUNTS: [&str; 4] = ["0.01", "0.05", "0.1", "0.5"];

/// Right-hand order panel. The draft (mode + amount text) lives in the store;
/// this panel only renders and mutates it.
pub struct TradingPanel;

impl TradingPanel {
    pub fn render(ctx: &Context, store: &mut AppStore) {
        SidePanel::right("trading_panel")
            .frame(UI_CONFIG.side_panel_frame())
            .exact_width(UI_CONFIG.trading_panel_width)
            .resizable(false)
            .show(ctx, |ui| {
                Self::mode_toggle(ui, store);
                ui.add_space(8.0);

                ui.label_subdued(UI_TEXT.label_amount_sol);
                let mut amount = store.trade_amount().to_string();
                if ui
                    .add(TextEdit::singleline(&mut amount).desired_width(f32::INFINITY))
                    .changed()
                {
                    store.set_trade_amount(amount);
                }

                ui.horizontal(|ui| {
                    for quick in QUICK_AMOUNTS {
                        if ui.small_button(quick).clicked() {
                            store.set_trade_amount(quick);
                        }
                    }
                });
                ui.add_space(8.0);

                Self::submit_button(ui, store);
                ui.add_space(12.0);
                ui.separator();

                Self::settings_summary(ui, store);
            });
    }

    fn mode_toggle(ui: &mut eframe::egui::Ui, store: &mut AppStore) {
        ui.horizontal(|ui| {
            let half = (ui.available_width() - ui.spacing().item_spacing.x) / 2.0;
            for (mode, label) in [(TradeMode::Buy, UI_TEXT.label_buy), (TradeMode::Sell, UI_TEXT.label_sell)] {
                let active = store.trade_mode() == mode;
                let text = RichText::new(label).strong().color(if active {
                    mode.color()
                } else {
                    UI_CONFIG.colors.subdued
                });
                let button = Button::new(text)
                    .min_size(Vec2::new(half, 28.0))
                    .frame(active);
                if ui.add(button).clicked() {
                    store.set_trade_mode(mode);
                }
            }
        });
    }

    fn submit_button(ui: &mut eframe::egui::Ui, store: &mut AppStore) {
        let mode = store.trade_mode();
        let symbol = store
            .current_token()
            .map(|t| t.symbol.as_str())
            .unwrap_or("---");
        let label = match store.draft_amount() {
            Some(amount) => format!("{mode} {} SOL of {symbol}", format_sol(amount.value())),
            None => format!("{mode} {symbol}"),
        };
        let ready = store.draft_amount().is_some()
            && !store.selected_wallet_ids().is_empty()
            && store.current_token().is_some();

        let button = Button::new(RichText::new(label.to_uppercase()).strong())
            .fill(mode.color().gamma_multiply(if ready { 1.0 } else { 0.3 }))
            .min_size(Vec2::new(ui.available_width(), 32.0));
        if ui.add_enabled(ready, button).clicked() {
            // Mock terminal: an order never leaves the process.
            log::info!(
                "submit {mode} draft: {} SOL x {} wallets",
                store.trade_amount(),
                store.selected_wallet_ids().len()
            );
        }
        if store.selected_wallet_ids().is_empty() {
            ui.label_subdued("Select at least one wallet");
        } else if store.draft_amount().is_none() {
            ui.label_subdued("Enter a positive amount");
        }
    }

    fn settings_summary(ui: &mut eframe::egui::Ui, store: &AppStore) {
        let trading = &store.settings().trading;
        ui.metric(
            UI_TEXT.label_slippage,
            &format!("{:.1}%", trading.slippage_pct),
            UI_CONFIG.colors.label,
        );
        ui.metric(
            UI_TEXT.label_priority_fee,
            &format!("{} SOL", format_price(trading.priority_fee_sol.value())),
            UI_CONFIG.colors.label,
        );
        ui.metric(
            UI_TEXT.label_compute_units,
            &trading.compute_units.to_string(),
            UI_CONFIG.colors.label,
        );
        let tip = match (trading.jito_tip, trading.jito_tip_sol) {
            (JitoTipMode::Manual, Some(sol)) => format!("{} SOL", format_price(sol)),
            _ => "Auto".to_string(),
        };
        ui.metric(UI_TEXT.label_jito_tip, &tip, UI_CONFIG.colors.label);
    }
}
