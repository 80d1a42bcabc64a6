use eframe::egui::{Align, Checkbox, ComboBox, Context, Layout, RichText, ScrollArea, SidePanel};
use strum::IntoEnumIterator;

use crate::app::AppStore;
use crate::models::{Wallet, WalletGroup};
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::utils::format_sol;

const HIDDEN_BALANCE: &str = "••••";

/// Left wallet rail: selection checkboxes, group filter, selected-balance
/// footer. Selection itself lives in the store; only presentation state
/// (filter, hide toggle) is local.
#[derive(Default)]
pub struct WalletPanel {
    group_filter: Option<WalletGroup>,
    hide_balances: bool,
}

impl WalletPanel {
    pub fn render(&mut self, ctx: &Context, store: &mut AppStore) {
        SidePanel::left("wallet_panel")
            .frame(UI_CONFIG.side_panel_frame())
            .exact_width(UI_CONFIG.wallet_panel_width)
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label_subheader(UI_TEXT.label_wallets);
                    ui.label_subdued(format!(
                        "{} {}",
                        store.selected_wallet_ids().len(),
                        UI_TEXT.label_selected
                    ));
                });

                ui.horizontal(|ui| {
                    if ui.small_button(UI_TEXT.label_select_all).clicked() {
                        store.select_all_wallets();
                    }
                    if ui.small_button(UI_TEXT.label_clear).clicked() {
                        store.clear_wallet_selection();
                    }
                });

                ui.horizontal(|ui| {
                    ComboBox::from_id_salt("wallet_group_filter")
                        .selected_text(match self.group_filter {
                            Some(g) => g.to_string(),
                            None => "All Groups".to_string(),
                        })
                        .show_ui(ui, |ui| {
                            ui.selectable_value(&mut self.group_filter, None, "All Groups");
                            for g in WalletGroup::iter() {
                                ui.selectable_value(&mut self.group_filter, Some(g), g.to_string());
                            }
                        });
                    ui.checkbox(&mut self.hide_balances, UI_TEXT.label_hide_balances);
                });
                ui.separator();

                ScrollArea::vertical().show(ui, |ui| {
                    let ids: Vec<_> = store
                        .wallets()
                        .iter()
                        .filter(|w| self.group_filter.is_none_or(|g| w.group == g))
                        .map(|w| w.id.clone())
                        .collect();
                    for id in ids {
                        let Some(wallet) = store.wallet(&id) else {
                            continue;
                        };
                        if self.wallet_row(ui, wallet, store.is_selected(&id)) {
                            store.toggle_wallet_selection(&id);
                        }
                    }
                });

                ui.separator();
                ui.metric(
                    UI_TEXT.label_selected,
                    &format!("{} SOL", format_sol(store.selected_balance().value())),
                    UI_CONFIG.colors.accent,
                );
            });
    }

    /// Returns true when the row's checkbox was clicked.
    fn wallet_row(&self, ui: &mut eframe::egui::Ui, wallet: &Wallet, selected: bool) -> bool {
        let mut toggled = false;
        ui.horizontal(|ui| {
            let mut checked = selected;
            let checkbox = ui.add_enabled(wallet.is_active(), Checkbox::without_text(&mut checked));
            if checkbox.clicked() {
                toggled = true;
            }

            ui.vertical(|ui| {
                let name_color = if wallet.is_active() {
                    UI_CONFIG.colors.heading
                } else {
                    UI_CONFIG.colors.subdued
                };
                ui.label(RichText::new(&wallet.name).small().color(name_color));
                ui.label_subdued(wallet.group.to_string());
            });

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                let balance = if self.hide_balances {
                    HIDDEN_BALANCE.to_string()
                } else {
                    format_sol(wallet.balance_sol().value())
                };
                ui.label(RichText::new(balance).small().color(UI_CONFIG.colors.label));
            });
        });
        toggled
    }
}
