use eframe::egui::{Color32, RichText, Ui};

use crate::config::CHART_CONFIG;
use crate::models::{CheckStatus, TradeMode, TxStatus};
use crate::ui::config::UI_CONFIG;

pub fn colored_subsection_heading(text: impl Into<String>) -> RichText {
    RichText::new(text.into()).color(UI_CONFIG.colors.subsection_heading)
}

/// Green/red for signed quantities (PnL, 24h change).
pub fn get_change_color(value: f64) -> Color32 {
    if value >= 0.0 {
        CHART_CONFIG.color_profit
    } else {
        CHART_CONFIG.color_loss
    }
}

pub trait ModeColor {
    fn color(&self) -> Color32;
}

impl ModeColor for TradeMode {
    fn color(&self) -> Color32 {
        match self {
            Self::Buy => UI_CONFIG.colors.buy,
            Self::Sell => UI_CONFIG.colors.sell,
        }
    }
}

impl ModeColor for TxStatus {
    fn color(&self) -> Color32 {
        match self {
            Self::Success => UI_CONFIG.colors.buy,
            Self::Pending => UI_CONFIG.colors.warning,
            Self::Failed => UI_CONFIG.colors.sell,
        }
    }
}

impl ModeColor for CheckStatus {
    fn color(&self) -> Color32 {
        match self {
            Self::Pass => UI_CONFIG.colors.buy,
            Self::Warning => UI_CONFIG.colors.warning,
            Self::Fail => UI_CONFIG.colors.sell,
        }
    }
}

pub trait UiStyleExt {
    fn label_subdued(&mut self, text: impl Into<String>);
    fn label_subheader(&mut self, text: impl Into<String>);
    fn metric(&mut self, label: &str, value: &str, color: Color32);
    fn status_chip(&mut self, text: &str, color: Color32);
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(UI_CONFIG.colors.subdued));
    }

    fn label_subheader(&mut self, text: impl Into<String>) {
        self.label(colored_subsection_heading(text));
    }

    fn metric(&mut self, label: &str, value: &str, color: Color32) {
        self.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0; // Tight spacing
            ui.label_subdued(format!("{}:", label));
            ui.label(RichText::new(value).small().color(color));
        });
    }

    fn status_chip(&mut self, text: &str, color: Color32) {
        self.label(RichText::new(text).small().strong().color(color));
    }
}
