use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::data::seed;
use crate::models::{Transaction, TxStatus};
use crate::ui::config::UI_TEXT;
use crate::ui::styles::{ModeColor, UiStyleExt};

/// Transaction feed with a status filter. Rows are the fixed seed set.
pub struct MonitorScreen {
    transactions: Vec<Transaction>,
    status_filter: Option<TxStatus>,
}

impl Default for MonitorScreen {
    fn default() -> Self {
        Self {
            transactions: seed::transactions(),
            status_filter: None,
        }
    }
}

impl MonitorScreen {
    pub fn render(&mut self, ui: &mut Ui) {
        super::page_header(ui, UI_TEXT.monitor_title, UI_TEXT.monitor_subtitle);

        ui.horizontal(|ui| {
            for status in [TxStatus::Success, TxStatus::Pending, TxStatus::Failed] {
                let count = self
                    .transactions
                    .iter()
                    .filter(|t| t.status == status)
                    .count();
                ui.metric(&status.to_string(), &count.to_string(), status.color());
            }
        });
        ui.horizontal(|ui| {
            ui.selectable_value(&mut self.status_filter, None, "All");
            for status in [TxStatus::Success, TxStatus::Pending, TxStatus::Failed] {
                ui.selectable_value(
                    &mut self.status_filter,
                    Some(status),
                    status.to_string(),
                );
            }
        });
        ui.add_space(6.0);

        TableBuilder::new(ui)
            .striped(true)
            .column(Column::auto().at_least(60.0)) // kind
            .column(Column::auto().at_least(90.0)) // token
            .column(Column::auto().at_least(80.0)) // amount
            .column(Column::auto().at_least(70.0)) // status
            .column(Column::auto().at_least(90.0)) // time
            .column(Column::auto().at_least(90.0)) // wallet
            .column(Column::remainder()) // hash
            .header(18.0, |mut header| {
                for title in ["Type", "Token", "Amount", "Status", "Time", "Wallet", "Tx"] {
                    header.col(|ui| {
                        ui.label_subdued(title);
                    });
                }
            })
            .body(|mut body| {
                for tx in self
                    .transactions
                    .iter()
                    .filter(|t| self.status_filter.is_none_or(|s| t.status == s))
                {
                    body.row(22.0, |mut row| {
                        row.col(|ui| {
                            ui.label(tx.kind.to_string().to_uppercase());
                        });
                        row.col(|ui| {
                            ui.label(&tx.token);
                        });
                        row.col(|ui| {
                            ui.label(&tx.amount);
                        });
                        row.col(|ui| {
                            ui.status_chip(&tx.status.to_string().to_uppercase(), tx.status.color());
                        });
                        row.col(|ui| {
                            ui.label_subdued(&tx.time);
                        });
                        row.col(|ui| {
                            ui.label_subdued(&tx.wallet);
                        });
                        row.col(|ui| {
                            ui.label_subdued(&tx.tx_hash);
                        });
                    });
                }
            });
    }
}
