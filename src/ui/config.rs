use eframe::egui::{Color32, Frame, Margin, Stroke};

pub use crate::ui::ui_text::UI_TEXT;

/// UI Colors for consistent theming
#[derive(Clone, Copy)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub accent: Color32,
    pub buy: Color32,
    pub sell: Color32,
    pub warning: Color32,
    pub subdued: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub sidebar_width: f32,
    pub wallet_panel_width: f32,
    pub trading_panel_width: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::from_rgb(170, 170, 180),
        heading: Color32::from_rgb(235, 235, 245),
        subsection_heading: Color32::from_rgb(240, 185, 11),
        central_panel: Color32::from_rgb(13, 13, 18),
        side_panel: Color32::from_rgb(20, 20, 27),
        accent: Color32::from_rgb(240, 185, 11),
        buy: Color32::from_rgb(14, 203, 129),
        sell: Color32::from_rgb(246, 70, 93),
        warning: Color32::from_rgb(255, 165, 0),
        subdued: Color32::from_rgb(110, 110, 120),
    },
    sidebar_width: 52.0,
    wallet_panel_width: 240.0,
    trading_panel_width: 260.0,
};

impl UiConfig {
    /// Frame for Left/Right panels (Standard padding)
    pub fn side_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(8),
            ..Default::default()
        }
    }

    /// Frame for the Top header bar (Standard padding)
    pub fn top_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(8),
            ..Default::default()
        }
    }

    /// Frame for the bottom trades tape (Tighter vertical padding)
    pub fn bottom_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(8, 4),
            ..Default::default()
        }
    }

    /// Frame for page content
    pub fn central_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.central_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(12),
            ..Default::default()
        }
    }
}
