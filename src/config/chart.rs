use eframe::egui::Color32;

pub struct ChartConfig {
    pub candle_bullish_color: Color32,
    pub candle_bearish_color: Color32,
    pub candle_width_pct: f64,  // 0.0 to 1.0 (relative to one time step)
    pub candle_wick_width: f32, // Pixels
    pub price_line_color: Color32,
    pub price_line_width: f32,

    pub plot_y_padding_pct: f64, // Y-Axis padding top and bottom

    pub color_profit: Color32,
    pub color_loss: Color32,
    pub color_info: Color32,
    pub color_warning: Color32,
    pub color_text_subdued: Color32,
}

pub static CHART_CONFIG: ChartConfig = ChartConfig {
    candle_bullish_color: Color32::from_rgb(14, 203, 129),
    candle_bearish_color: Color32::from_rgb(246, 70, 93),
    candle_width_pct: 0.7,
    candle_wick_width: 1.0,
    price_line_color: Color32::from_rgb(240, 185, 11),
    price_line_width: 1.0,

    plot_y_padding_pct: 0.05,

    color_profit: Color32::from_rgb(14, 203, 129),
    color_loss: Color32::from_rgb(246, 70, 93),
    color_info: Color32::from_rgb(100, 200, 255),
    color_warning: Color32::from_rgb(255, 165, 0),
    color_text_subdued: Color32::GRAY,
};
