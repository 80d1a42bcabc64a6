//! Static copy for the screens. Centralized so wording stays consistent
//! across panels without hunting through render code.

pub struct UiText {
    pub brand: &'static str,
    pub tagline: &'static str,

    pub search_hint: &'static str,
    pub label_connected: &'static str,
    pub label_disconnected: &'static str,
    pub label_total_balance: &'static str,
    pub label_active_wallets: &'static str,

    pub label_wallets: &'static str,
    pub label_selected: &'static str,
    pub label_select_all: &'static str,
    pub label_clear: &'static str,
    pub label_hide_balances: &'static str,
    pub label_pause: &'static str,
    pub label_resume: &'static str,

    pub label_no_token: &'static str,
    pub label_price: &'static str,
    pub label_volume_24h: &'static str,
    pub label_market_cap: &'static str,
    pub label_change_24h: &'static str,

    pub label_buy: &'static str,
    pub label_sell: &'static str,
    pub label_amount_sol: &'static str,
    pub label_slippage: &'static str,
    pub label_priority_fee: &'static str,
    pub label_compute_units: &'static str,
    pub label_jito_tip: &'static str,

    pub monitor_title: &'static str,
    pub monitor_subtitle: &'static str,
    pub holdings_title: &'static str,
    pub holdings_subtitle: &'static str,
    pub bundles_title: &'static str,
    pub bundles_subtitle: &'static str,
    pub deploy_title: &'static str,
    pub deploy_subtitle: &'static str,
    pub security_title: &'static str,
    pub security_subtitle: &'static str,
    pub settings_title: &'static str,
    pub wallets_title: &'static str,
    pub wallets_subtitle: &'static str,
}

pub static UI_TEXT: UiText = UiText {
    brand: "FURY",
    tagline: "Multi-wallet trading terminal",

    search_hint: "Search tokens...",
    label_connected: "Connected",
    label_disconnected: "Disconnected",
    label_total_balance: "Total Balance",
    label_active_wallets: "Active Wallets",

    label_wallets: "Wallets",
    label_selected: "selected",
    label_select_all: "Select All",
    label_clear: "Clear",
    label_hide_balances: "Hide balances",
    label_pause: "Pause",
    label_resume: "Resume",

    label_no_token: "No token selected",
    label_price: "Price",
    label_volume_24h: "24h Volume",
    label_market_cap: "Market Cap",
    label_change_24h: "24h",

    label_buy: "BUY",
    label_sell: "SELL",
    label_amount_sol: "Amount (SOL)",
    label_slippage: "Slippage",
    label_priority_fee: "Priority Fee",
    label_compute_units: "Compute Units",
    label_jito_tip: "Jito Tip",

    monitor_title: "MONITOR",
    monitor_subtitle: "Live transaction feed",
    holdings_title: "HOLDINGS",
    holdings_subtitle: "Track your portfolio performance",
    bundles_title: "BUNDLES",
    bundles_subtitle: "Multi-wallet execution presets",
    deploy_title: "DEPLOY",
    deploy_subtitle: "Launch a new token",
    security_title: "SECURITY",
    security_subtitle: "Vault and session protection",
    settings_title: "SETTINGS",
    wallets_title: "WALLETS",
    wallets_subtitle: "Manage wallet groups and status",
};
