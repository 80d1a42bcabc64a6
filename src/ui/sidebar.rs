use eframe::egui::{Button, Context, RichText, SidePanel, Vec2};
use strum::IntoEnumIterator;

use crate::app::Page;
use crate::ui::config::UI_CONFIG;

/// Icon-only navigation rail on the far left.
pub struct Sidebar;

impl Sidebar {
    pub fn render(ctx: &Context, page: &mut Page) {
        SidePanel::left("sidebar")
            .frame(UI_CONFIG.side_panel_frame())
            .exact_width(UI_CONFIG.sidebar_width)
            .resizable(false)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    for p in Page::iter() {
                        let selected = p == *page;
                        let icon = RichText::new(p.icon()).size(18.0).color(if selected {
                            UI_CONFIG.colors.accent
                        } else {
                            UI_CONFIG.colors.subdued
                        });
                        let button = Button::new(icon)
                            .min_size(Vec2::splat(36.0))
                            .frame(selected);
                        if ui.add(button).on_hover_text(p.to_string()).clicked() {
                            *page = p;
                        }
                        ui.add_space(2.0);
                    }
                });
            });
    }
}
