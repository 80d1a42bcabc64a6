use std::collections::BTreeSet;

use eframe::egui::{Button, Checkbox, RichText, TextEdit, Ui};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use crate::app::AppStore;
use crate::config::SolAmount;
use crate::models::WalletId;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::utils::format_sol;

#[derive(Clone, Copy, PartialEq, Eq, Display, EnumIter, Default)]
enum LaunchPlatform {
    #[default]
    #[strum(to_string = "PUMP.FUN")]
    PumpFun,
    #[strum(to_string = "BONK.FUN")]
    BonkFun,
    #[strum(to_string = "METEORA")]
    Meteora,
}

#[derive(Clone, Copy, PartialEq, Eq, Display, Default)]
enum LaunchMode {
    #[default]
    #[strum(to_string = "SIMPLE")]
    Simple,
    #[strum(to_string = "ADVANCED")]
    Advanced,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Step {
    Details,
    Wallets,
    Review,
}

/// Three-step launch wizard. Keeps its own wallet set so picking launch
/// wallets never disturbs the trading selection in the store.
pub struct DeployScreen {
    step: Step,
    platform: LaunchPlatform,
    mode: LaunchMode,
    token_name: String,
    token_symbol: String,
    token_description: String,
    dev_buy_sol: String,
    launch_wallets: BTreeSet<WalletId>,
}

impl Default for DeployScreen {
    fn default() -> Self {
        Self {
            step: Step::Details,
            platform: LaunchPlatform::default(),
            mode: LaunchMode::default(),
            token_name: String::new(),
            token_symbol: String::new(),
            token_description: String::new(),
            dev_buy_sol: "0.1".to_string(),
            launch_wallets: BTreeSet::new(),
        }
    }
}

impl DeployScreen {
    pub fn render(&mut self, ui: &mut Ui, store: &AppStore) {
        super::page_header(ui, UI_TEXT.deploy_title, UI_TEXT.deploy_subtitle);

        ui.horizontal(|ui| {
            for (i, (step, label)) in [
                (Step::Details, "1. Platform & Token"),
                (Step::Wallets, "2. Select Wallets"),
                (Step::Review, "3. Review"),
            ]
            .into_iter()
            .enumerate()
            {
                if i > 0 {
                    ui.label_subdued("›");
                }
                let color = if self.step == step {
                    UI_CONFIG.colors.accent
                } else {
                    UI_CONFIG.colors.subdued
                };
                ui.label(RichText::new(label).small().color(color));
            }
        });
        ui.separator();

        match self.step {
            Step::Details => self.render_details(ui),
            Step::Wallets => self.render_wallets(ui, store),
            Step::Review => self.render_review(ui, store),
        }
    }

    fn render_details(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            for mode in [LaunchMode::Simple, LaunchMode::Advanced] {
                ui.selectable_value(&mut self.mode, mode, mode.to_string());
            }
        });
        ui.add_space(4.0);

        ui.label_subdued("Platform");
        ui.horizontal(|ui| {
            for platform in LaunchPlatform::iter() {
                ui.selectable_value(&mut self.platform, platform, platform.to_string());
            }
        });
        ui.add_space(4.0);

        ui.label_subdued("Token Name");
        ui.add(TextEdit::singleline(&mut self.token_name).desired_width(260.0));
        ui.label_subdued("Symbol");
        ui.add(TextEdit::singleline(&mut self.token_symbol).desired_width(120.0));
        if self.mode == LaunchMode::Advanced {
            ui.label_subdued("Description");
            ui.add(TextEdit::multiline(&mut self.token_description).desired_width(260.0));
        }
        ui.label_subdued("Dev Buy (SOL)");
        ui.add(TextEdit::singleline(&mut self.dev_buy_sol).desired_width(120.0));
        ui.add_space(8.0);

        let ready = !self.token_name.trim().is_empty()
            && !self.token_symbol.trim().is_empty()
            && SolAmount::parse_positive(&self.dev_buy_sol).is_some();
        if ui.add_enabled(ready, Button::new("Next")).clicked() {
            self.step = Step::Wallets;
        }
    }

    fn render_wallets(&mut self, ui: &mut Ui, store: &AppStore) {
        ui.label_subdued("Buy wallets for the launch (active only)");
        for wallet in store.wallets().iter().filter(|w| w.is_active()) {
            ui.horizontal(|ui| {
                let mut checked = self.launch_wallets.contains(&wallet.id);
                if ui.add(Checkbox::without_text(&mut checked)).clicked() {
                    if checked {
                        self.launch_wallets.insert(wallet.id.clone());
                    } else {
                        self.launch_wallets.remove(&wallet.id);
                    }
                }
                ui.label(&wallet.name);
                ui.label_subdued(format!("{} SOL", format_sol(wallet.balance_sol().value())));
            });
        }
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            if ui.button("Back").clicked() {
                self.step = Step::Details;
            }
            let ready = !self.launch_wallets.is_empty();
            if ui.add_enabled(ready, Button::new("Next")).clicked() {
                self.step = Step::Review;
            }
        });
    }

    fn render_review(&mut self, ui: &mut Ui, store: &AppStore) {
        ui.metric("Platform", &self.platform.to_string(), UI_CONFIG.colors.heading);
        ui.metric("Mode", &self.mode.to_string(), UI_CONFIG.colors.label);
        ui.metric(
            "Token",
            &format!("{} ({})", self.token_name, self.token_symbol),
            UI_CONFIG.colors.heading,
        );
        ui.metric("Dev Buy", &format!("{} SOL", self.dev_buy_sol), UI_CONFIG.colors.label);
        ui.metric(
            "Buy Wallets",
            &self.launch_wallets.len().to_string(),
            UI_CONFIG.colors.label,
        );
        let combined: SolAmount = store
            .wallets()
            .iter()
            .filter(|w| self.launch_wallets.contains(&w.id))
            .map(|w| w.balance_sol())
            .sum();
        ui.metric(
            "Combined Balance",
            &format!("{} SOL", format_sol(combined.value())),
            UI_CONFIG.colors.accent,
        );
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            if ui.button("Back").clicked() {
                self.step = Step::Wallets;
            }
            if ui
                .button(RichText::new("Launch Token").strong().color(UI_CONFIG.colors.buy))
                .clicked()
            {
                // Mock launch, then reset the wizard.
                log::info!(
                    "deploy (mock): {} on {} with {} wallets",
                    self.token_symbol,
                    self.platform,
                    self.launch_wallets.len()
                );
                *self = Self::default();
            }
        });
    }
}
