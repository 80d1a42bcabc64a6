use eframe::egui::{Grid, RichText, ScrollArea, Ui};

use crate::models::{Token, TradeTick};
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::{ModeColor, UiStyleExt, get_change_color};
use crate::utils::{format_address, format_percent, format_price};

/// Stats strip above the chart: symbol, price, 24h change, volume, cap.
pub fn token_strip(ui: &mut Ui, token: Option<&Token>) {
    let Some(token) = token else {
        ui.label_subdued(UI_TEXT.label_no_token);
        return;
    };

    ui.horizontal(|ui| {
        ui.label(
            RichText::new(&token.symbol)
                .strong()
                .size(16.0)
                .color(UI_CONFIG.colors.heading),
        );
        ui.label_subdued(&token.name);
        ui.label_subdued(format_address(&token.address, 4));
        ui.add_space(12.0);

        ui.metric(
            UI_TEXT.label_price,
            &format!("${}", format_price(token.price)),
            UI_CONFIG.colors.heading,
        );
        ui.metric(
            UI_TEXT.label_change_24h,
            &format_percent(token.price_change_24h),
            get_change_color(token.price_change_24h),
        );
        ui.metric(
            UI_TEXT.label_volume_24h,
            &token.volume_24h,
            UI_CONFIG.colors.label,
        );
        ui.metric(
            UI_TEXT.label_market_cap,
            &token.market_cap,
            UI_CONFIG.colors.label,
        );
    });
}

/// Recent-trades tape below the chart. Static seed rows; newest first.
pub fn trades_tape(ui: &mut Ui, ticks: &[TradeTick]) {
    ScrollArea::vertical().max_height(110.0).show(ui, |ui| {
        Grid::new("trades_tape")
            .num_columns(6)
            .spacing([16.0, 2.0])
            .show(ui, |ui| {
                for tick in ticks {
                    ui.label_subdued(&tick.time);
                    ui.status_chip(&tick.mode.to_string().to_uppercase(), tick.mode.color());
                    ui.label_subdued(&tick.market_cap);
                    ui.label(
                        RichText::new(&tick.amount)
                            .small()
                            .color(UI_CONFIG.colors.label),
                    );
                    ui.label(
                        RichText::new(format!("{} SOL", tick.total_sol))
                            .small()
                            .color(UI_CONFIG.colors.label),
                    );
                    ui.label_subdued(format_address(&tick.trader, 4));
                    ui.end_row();
                }
            });
    });
}
