use eframe::egui::{Stroke, Ui};
use egui_plot::{HLine, Line, Plot, PlotPoints, PlotUi, Polygon};
use strum::IntoEnumIterator;

use crate::config::{CHART_CONFIG, Timeframe};
use crate::models::Candle;
use crate::utils::format_price;

/// Candlestick chart over the seed series. Pure presentation: candles come in
/// as a slice, the selected timeframe only relabels the selector (the mock
/// series is not resampled).
pub struct ChartArea {
    timeframe: Timeframe,
}

impl Default for ChartArea {
    fn default() -> Self {
        Self {
            timeframe: Timeframe::default(),
        }
    }
}

impl ChartArea {
    pub fn render(&mut self, ui: &mut Ui, candles: &[Candle]) {
        ui.horizontal(|ui| {
            for tf in Timeframe::iter() {
                ui.selectable_value(&mut self.timeframe, tf, tf.to_string());
            }
        });

        let last_close = candles.last().map(|c| c.close);
        let (y_min, y_max) = y_range(candles);

        Plot::new("candle_chart")
            .show_axes([false, true])
            .show_grid(true)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .include_y(y_min)
            .include_y(y_max)
            .y_axis_formatter(|mark, _| format_price(mark.value))
            .label_formatter(|_, _| String::new())
            .show(ui, |plot_ui| {
                for (i, candle) in candles.iter().enumerate() {
                    draw_candle(plot_ui, i as f64, candle);
                }
                if let Some(close) = last_close {
                    plot_ui.hline(
                        HLine::new("", close)
                            .color(CHART_CONFIG.price_line_color)
                            .width(CHART_CONFIG.price_line_width),
                    );
                }
            });
    }
}

fn y_range(candles: &[Candle]) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for c in candles {
        lo = lo.min(c.low);
        hi = hi.max(c.high);
    }
    if !lo.is_finite() || !hi.is_finite() {
        return (0.0, 1.0);
    }
    let pad = (hi - lo) * CHART_CONFIG.plot_y_padding_pct;
    (lo - pad, hi + pad)
}

fn draw_candle(plot_ui: &mut PlotUi, x: f64, candle: &Candle) {
    let color = if candle.is_bullish() {
        CHART_CONFIG.candle_bullish_color
    } else {
        CHART_CONFIG.candle_bearish_color
    };

    // Wick
    plot_ui.line(
        Line::new("", PlotPoints::new(vec![[x, candle.low], [x, candle.high]]))
            .color(color)
            .width(CHART_CONFIG.candle_wick_width),
    );

    // Body
    let top = candle.open.max(candle.close);
    let bottom = candle.open.min(candle.close);
    let half_w = CHART_CONFIG.candle_width_pct / 2.0;
    let pts = vec![
        [x - half_w, bottom],
        [x + half_w, bottom],
        [x + half_w, top],
        [x - half_w, top],
    ];
    plot_ui.polygon(
        Polygon::new("", PlotPoints::new(pts))
            .fill_color(color)
            .stroke(Stroke::NONE),
    );
}
