use eframe::egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};
use strum::IntoEnumIterator;

use crate::app::AppStore;
use crate::models::{WalletGroup, WalletId, WalletStatus};
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::utils::{format_address, format_sol};

/// Wallet management table: group filter, status flips, per-row detail.
#[derive(Default)]
pub struct WalletsScreen {
    group_filter: Option<WalletGroup>,
}

impl WalletsScreen {
    pub fn render(&mut self, ui: &mut Ui, store: &mut AppStore) {
        super::page_header(ui, UI_TEXT.wallets_title, UI_TEXT.wallets_subtitle);

        ui.horizontal(|ui| {
            ui.selectable_value(&mut self.group_filter, None, "All");
            for g in WalletGroup::iter() {
                ui.selectable_value(&mut self.group_filter, Some(g), g.to_string());
            }
        });
        ui.add_space(6.0);

        let mut status_flip: Option<(WalletId, WalletStatus)> = None;

        TableBuilder::new(ui)
            .striped(true)
            .column(Column::auto().at_least(110.0)) // name
            .column(Column::auto().at_least(70.0)) // group
            .column(Column::remainder()) // address
            .column(Column::auto().at_least(80.0)) // balance
            .column(Column::auto().at_least(60.0)) // status
            .column(Column::auto().at_least(70.0)) // action
            .header(18.0, |mut header| {
                for title in ["Name", "Group", "Address", "Balance", "Status", ""] {
                    header.col(|ui| {
                        ui.label_subdued(title);
                    });
                }
            })
            .body(|mut body| {
                for wallet in store
                    .wallets()
                    .iter()
                    .filter(|w| self.group_filter.is_none_or(|g| w.group == g))
                {
                    body.row(22.0, |mut row| {
                        row.col(|ui| {
                            ui.label(
                                RichText::new(&wallet.name).color(UI_CONFIG.colors.heading),
                            );
                        });
                        row.col(|ui| {
                            ui.label_subdued(wallet.group.to_string());
                        });
                        row.col(|ui| {
                            ui.label_subdued(format_address(&wallet.address, 6));
                        });
                        row.col(|ui| {
                            ui.label(format!("{} SOL", format_sol(wallet.balance_sol().value())));
                        });
                        row.col(|ui| {
                            let (text, color) = match wallet.status {
                                WalletStatus::Active => ("ACTIVE", UI_CONFIG.colors.buy),
                                WalletStatus::Paused => ("PAUSED", UI_CONFIG.colors.warning),
                            };
                            ui.status_chip(text, color);
                        });
                        row.col(|ui| {
                            let (label, next) = match wallet.status {
                                WalletStatus::Active => (UI_TEXT.label_pause, WalletStatus::Paused),
                                WalletStatus::Paused => (UI_TEXT.label_resume, WalletStatus::Active),
                            };
                            if ui.small_button(label).clicked() {
                                status_flip = Some((wallet.id.clone(), next));
                            }
                        });
                    });
                }
            });

        if let Some((id, status)) = status_flip {
            store.set_wallet_status(&id, status);
        }
    }
}
