use eframe::egui::{RichText, Ui};

use crate::data::seed;
use crate::models::{CheckStatus, SecurityCheck};
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::{ModeColor, UiStyleExt};

/// Static checklist of vault and session protections.
pub struct SecurityScreen {
    checks: Vec<SecurityCheck>,
    session_locked: bool,
}

impl Default for SecurityScreen {
    fn default() -> Self {
        Self {
            checks: seed::security_checks(),
            session_locked: false,
        }
    }
}

impl SecurityScreen {
    pub fn render(&mut self, ui: &mut Ui) {
        super::page_header(ui, UI_TEXT.security_title, UI_TEXT.security_subtitle);

        let passing = self
            .checks
            .iter()
            .filter(|c| c.status == CheckStatus::Pass)
            .count();
        ui.metric(
            "Checks Passing",
            &format!("{passing}/{}", self.checks.len()),
            UI_CONFIG.colors.heading,
        );
        ui.add_space(6.0);

        for check in &self.checks {
            ui.horizontal(|ui| {
                let glyph = match check.status {
                    CheckStatus::Pass => "✔",
                    CheckStatus::Warning => "⚠",
                    CheckStatus::Fail => "✘",
                };
                ui.status_chip(glyph, check.status.color());
                ui.vertical(|ui| {
                    ui.label(RichText::new(&check.name).color(UI_CONFIG.colors.heading));
                    ui.label_subdued(&check.description);
                });
            });
            ui.add_space(4.0);
        }

        ui.separator();
        let label = if self.session_locked {
            "Unlock Session"
        } else {
            "Lock Session"
        };
        if ui.button(label).clicked() {
            self.session_locked = !self.session_locked;
            log::info!("session locked: {}", self.session_locked);
        }
    }
}
