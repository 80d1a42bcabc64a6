use eframe::egui::Ui;

use crate::app::AppStore;
use crate::data::seed;
use crate::models::{Candle, TradeTick};
use crate::ui::chart_area::ChartArea;
use crate::ui::token_info;

/// Central column of the trading page: stats strip, chart, trades tape.
/// The wallet and order panels flanking it are owned by the app shell.
pub struct TradingScreen {
    chart: ChartArea,
    candles: Vec<Candle>,
    ticks: Vec<TradeTick>,
}

impl Default for TradingScreen {
    fn default() -> Self {
        Self {
            chart: ChartArea::default(),
            candles: seed::candles(),
            ticks: seed::trade_ticks(),
        }
    }
}

impl TradingScreen {
    pub fn render(&mut self, ui: &mut Ui, store: &AppStore) {
        token_info::token_strip(ui, store.current_token());
        ui.separator();

        let tape_height = 130.0;
        let chart_height = (ui.available_height() - tape_height).max(120.0);
        ui.allocate_ui([ui.available_width(), chart_height].into(), |ui| {
            ui.set_min_height(chart_height);
            self.chart.render(ui, &self.candles);
        });

        ui.separator();
        token_info::trades_tape(ui, &self.ticks);
    }
}
