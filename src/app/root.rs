use eframe::{
    Frame,
    egui::{CentralPanel, Context, Key, Visuals},
};

use crate::{
    Cli,
    app::{AppStore, Page},
    models::TradeMode,
    ui::{
        Header, Sidebar, TradingPanel, WalletPanel,
        config::UI_CONFIG,
        screens::{
            BundlesScreen, DeployScreen, HoldingsScreen, MonitorScreen, SecurityScreen,
            SettingsScreen, TradingScreen, WalletsScreen,
        },
    },
};

/// Application shell: owns the store, the current page and every screen's
/// local view state, and routes rendering between them.
pub struct App {
    store: AppStore,
    page: Page,
    header: Header,
    wallet_panel: WalletPanel,
    trading: TradingScreen,
    wallets: WalletsScreen,
    bundles: BundlesScreen,
    monitor: MonitorScreen,
    holdings: HoldingsScreen,
    deploy: DeployScreen,
    security: SecurityScreen,
}

impl App {
    pub(crate) fn new(_cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        Self {
            store: AppStore::seeded(),
            page: args.page.unwrap_or_default(),
            header: Header::default(),
            wallet_panel: WalletPanel::default(),
            trading: TradingScreen::default(),
            wallets: WalletsScreen::default(),
            bundles: BundlesScreen::default(),
            monitor: MonitorScreen::default(),
            holdings: HoldingsScreen::default(),
            deploy: DeployScreen::default(),
            security: SecurityScreen::default(),
        }
    }

    fn handle_global_shortcuts(&mut self, ctx: &Context) {
        if ctx.wants_keyboard_input() {
            // The user is typing in a text box; don't steal keys.
            return;
        }

        ctx.input(|i| {
            let jumps = [
                (Key::Num1, Page::Trading),
                (Key::Num2, Page::Wallets),
                (Key::Num3, Page::Bundles),
                (Key::Num4, Page::Monitor),
                (Key::Num5, Page::Holdings),
                (Key::Num6, Page::Deploy),
                (Key::Num7, Page::Security),
                (Key::Num8, Page::Settings),
            ];
            for (key, page) in jumps {
                if i.key_pressed(key) {
                    self.page = page;
                }
            }
            if i.key_pressed(Key::B) {
                self.store.set_trade_mode(TradeMode::Buy);
            }
            if i.key_pressed(Key::S) {
                self.store.set_trade_mode(TradeMode::Sell);
            }
        });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);
        self.handle_global_shortcuts(ctx);

        self.header.render(ctx, &self.store);
        Sidebar::render(ctx, &mut self.page);

        // The trading page carries its flanking panels; other pages get the
        // full central width.
        if self.page == Page::Trading {
            self.wallet_panel.render(ctx, &mut self.store);
            TradingPanel::render(ctx, &mut self.store);
        }

        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| match self.page {
                Page::Trading => self.trading.render(ui, &self.store),
                Page::Wallets => self.wallets.render(ui, &mut self.store),
                Page::Bundles => self.bundles.render(ui),
                Page::Monitor => self.monitor.render(ui),
                Page::Holdings => self.holdings.render(ui),
                Page::Deploy => self.deploy.render(ui, &self.store),
                Page::Security => self.security.render(ui),
                Page::Settings => SettingsScreen::render(ui, &mut self.store),
            });
    }
}

fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
    ctx.set_visuals(visuals);
    ctx.style_mut(|s| s.interaction.selectable_labels = false);
}
