use eframe::egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::seed;
use crate::models::Holding;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::{UiStyleExt, get_change_color};
use crate::utils::{format_number, format_percent};

#[derive(Clone, Copy, PartialEq, Eq, Default)]
enum PnlFilter {
    #[default]
    All,
    Profit,
    Loss,
}

impl PnlFilter {
    fn keeps(self, holding: &Holding) -> bool {
        match self {
            Self::All => true,
            Self::Profit => holding.in_profit(),
            Self::Loss => !holding.in_profit(),
        }
    }
}

/// Portfolio table with value/PnL totals over the whole set, filter or not.
pub struct HoldingsScreen {
    holdings: Vec<Holding>,
    filter: PnlFilter,
}

impl Default for HoldingsScreen {
    fn default() -> Self {
        Self {
            holdings: seed::holdings(),
            filter: PnlFilter::default(),
        }
    }
}

impl HoldingsScreen {
    pub fn render(&mut self, ui: &mut Ui) {
        super::page_header(ui, UI_TEXT.holdings_title, UI_TEXT.holdings_subtitle);

        let total_value: f64 = self.holdings.iter().map(|h| h.value_usd).sum();
        let total_pnl: f64 = self.holdings.iter().map(|h| h.pnl_usd).sum();
        ui.horizontal(|ui| {
            ui.metric(
                "Total Value",
                &format!("${}", format_number(total_value)),
                UI_CONFIG.colors.heading,
            );
            ui.add_space(12.0);
            ui.metric(
                "Total PnL",
                &format!("${}", format_number(total_pnl)),
                get_change_color(total_pnl),
            );
        });

        ui.horizontal(|ui| {
            ui.selectable_value(&mut self.filter, PnlFilter::All, "All");
            ui.selectable_value(&mut self.filter, PnlFilter::Profit, "In Profit");
            ui.selectable_value(&mut self.filter, PnlFilter::Loss, "In Loss");
        });
        ui.add_space(6.0);

        TableBuilder::new(ui)
            .striped(true)
            .column(Column::auto().at_least(100.0)) // token
            .column(Column::auto().at_least(80.0)) // balance
            .column(Column::auto().at_least(80.0)) // price
            .column(Column::auto().at_least(90.0)) // value
            .column(Column::auto().at_least(70.0)) // 24h
            .column(Column::auto().at_least(90.0)) // pnl
            .column(Column::remainder()) // wallet
            .header(18.0, |mut header| {
                for title in ["Token", "Balance", "Price", "Value", "24h", "PnL", "Wallet"] {
                    header.col(|ui| {
                        ui.label_subdued(title);
                    });
                }
            })
            .body(|mut body| {
                for holding in self.holdings.iter().filter(|h| self.filter.keeps(h)) {
                    body.row(22.0, |mut row| {
                        row.col(|ui| {
                            ui.horizontal(|ui| {
                                ui.label(
                                    RichText::new(&holding.symbol)
                                        .strong()
                                        .color(UI_CONFIG.colors.heading),
                                );
                                ui.label_subdued(&holding.token);
                            });
                        });
                        row.col(|ui| {
                            ui.label(&holding.balance);
                        });
                        row.col(|ui| {
                            ui.label(&holding.price);
                        });
                        row.col(|ui| {
                            ui.label(format!("${}", format_number(holding.value_usd)));
                        });
                        row.col(|ui| {
                            ui.status_chip(
                                &format_percent(holding.change_24h),
                                get_change_color(holding.change_24h),
                            );
                        });
                        row.col(|ui| {
                            ui.status_chip(
                                &format!("${}", format_number(holding.pnl_usd)),
                                get_change_color(holding.pnl_usd),
                            );
                        });
                        row.col(|ui| {
                            ui.label_subdued(&holding.wallet);
                        });
                    });
                }
            });
    }
}
