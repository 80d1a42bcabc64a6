use chrono::Local;
use eframe::egui::{Align, Color32, Context, Layout, RichText, TextEdit, TopBottomPanel};

use crate::app::AppStore;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::utils::{format_sol, format_time};

/// Top brand bar: logo, token search stub, connection dot, store aggregates.
#[derive(Default)]
pub struct Header {
    search_text: String,
}

impl Header {
    pub fn render(&mut self, ctx: &Context, store: &AppStore) {
        TopBottomPanel::top("header")
            .frame(UI_CONFIG.top_panel_frame())
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(UI_TEXT.brand)
                            .strong()
                            .size(18.0)
                            .color(UI_CONFIG.colors.accent),
                    );
                    ui.label_subdued(UI_TEXT.tagline);

                    ui.add_space(16.0);
                    ui.add(
                        TextEdit::singleline(&mut self.search_text)
                            .hint_text(UI_TEXT.search_hint)
                            .desired_width(220.0),
                    );

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label_subdued(format_time(Local::now()));
                        ui.add_space(8.0);
                        // Mockup is always "connected"
                        ui.label(RichText::new("●").color(UI_CONFIG.colors.buy));
                        ui.label_subdued(UI_TEXT.label_connected);
                        ui.add_space(12.0);

                        ui.metric(
                            UI_TEXT.label_active_wallets,
                            &store.active_wallets_count().to_string(),
                            Color32::WHITE,
                        );
                        ui.add_space(8.0);
                        ui.metric(
                            UI_TEXT.label_total_balance,
                            &format!("{} SOL", format_sol(store.total_balance().value())),
                            UI_CONFIG.colors.accent,
                        );
                    });
                });
            });
    }
}
