//! Single source of truth for everything the screens share: the wallet
//! collection, the current token, trading settings, the wallet selection set
//! and the in-progress trade draft.
//!
//! Screens receive the store by reference from [`crate::app::App`]; no view
//! keeps a private copy of wallet or settings data. Derived aggregates are
//! recomputed from the source collections on every call; seed sizes are a
//! handful of rows, so there is nothing worth caching.

use std::collections::BTreeSet;

use crate::config::SolAmount;
use crate::data::seed;
use crate::models::{
    AppSettings, AppSettingsUpdate, Token, TradeMode, TradingSettingsUpdate, Wallet, WalletId,
    WalletStatus,
};

pub struct AppStore {
    wallets: Vec<Wallet>,
    selected: BTreeSet<WalletId>,
    current_token: Option<Token>,
    settings: AppSettings,
    trade_mode: TradeMode,
    trade_amount: String,
}

impl AppStore {
    pub fn new(wallets: Vec<Wallet>, current_token: Option<Token>, settings: AppSettings) -> Self {
        Self {
            wallets,
            selected: BTreeSet::new(),
            current_token,
            settings,
            trade_mode: TradeMode::Buy,
            trade_amount: "0.1".to_string(),
        }
    }

    /// The session store: seed wallets, the seed token, default settings.
    pub fn seeded() -> Self {
        Self::new(
            seed::wallets(),
            Some(seed::current_token()),
            AppSettings::default(),
        )
    }

    // --- Wallets & selection ---

    /// Full collection in insertion order; this is also the render order.
    pub fn wallets(&self) -> &[Wallet] {
        &self.wallets
    }

    pub fn wallet(&self, id: &WalletId) -> Option<&Wallet> {
        self.wallets.iter().find(|w| &w.id == id)
    }

    pub fn is_selected(&self, id: &WalletId) -> bool {
        self.selected.contains(id)
    }

    pub fn selected_wallet_ids(&self) -> &BTreeSet<WalletId> {
        &self.selected
    }

    /// Toggles a wallet in or out of the selection set. Tolerant by design:
    /// selecting a paused or unknown wallet is a no-op, matching a UI-level
    /// checkbox that simply does nothing when the row is not eligible.
    pub fn toggle_wallet_selection(&mut self, id: &WalletId) {
        if self.selected.remove(id) {
            return;
        }
        match self.wallet(id) {
            Some(w) if w.is_active() => {
                self.selected.insert(id.clone());
            }
            Some(_) => log::debug!("ignoring selection of paused wallet {id}"),
            None => log::debug!("ignoring selection of unknown wallet {id}"),
        }
    }

    /// Selection becomes exactly the active wallets, discarding any prior set.
    pub fn select_all_wallets(&mut self) {
        self.selected = self
            .wallets
            .iter()
            .filter(|w| w.is_active())
            .map(|w| w.id.clone())
            .collect();
    }

    pub fn clear_wallet_selection(&mut self) {
        self.selected.clear();
    }

    /// Flips a wallet's status. Pausing a selected wallet evicts it from the
    /// selection set so the "only active wallets are selectable" invariant
    /// survives the transition; resuming never auto-selects.
    pub fn set_wallet_status(&mut self, id: &WalletId, status: WalletStatus) {
        let Some(w) = self.wallets.iter_mut().find(|w| &w.id == id) else {
            return;
        };
        w.status = status;
        if status == WalletStatus::Paused && self.selected.remove(id) {
            log::info!("wallet {id} paused; dropped from selection");
        }
    }

    // --- Current token ---

    pub fn current_token(&self) -> Option<&Token> {
        self.current_token.as_ref()
    }

    /// `None` is a valid state: "no token chosen".
    pub fn set_current_token(&mut self, token: Option<Token>) {
        self.current_token = token;
    }

    // --- Settings ---

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    pub fn update_settings(&mut self, update: AppSettingsUpdate) {
        self.settings.apply(update);
    }

    pub fn update_trading_settings(&mut self, update: TradingSettingsUpdate) {
        self.settings.trading.apply(update);
    }

    // --- Trade draft ---

    pub fn trade_mode(&self) -> TradeMode {
        self.trade_mode
    }

    pub fn set_trade_mode(&mut self, mode: TradeMode) {
        self.trade_mode = mode;
    }

    pub fn trade_amount(&self) -> &str {
        &self.trade_amount
    }

    /// Stored unvalidated; the draft is just text until submission.
    pub fn set_trade_amount(&mut self, amount: impl Into<String>) {
        self.trade_amount = amount.into();
    }

    /// Submission gate: `Some` only when the draft text parses to a positive
    /// quantity.
    pub fn draft_amount(&self) -> Option<SolAmount> {
        SolAmount::parse_positive(&self.trade_amount)
    }

    // --- Derived aggregates ---

    /// Sum of every wallet's parsed balance, selection independent.
    pub fn total_balance(&self) -> SolAmount {
        self.wallets.iter().map(Wallet::balance_sol).sum()
    }

    pub fn active_wallets_count(&self) -> usize {
        self.wallets.iter().filter(|w| w.is_active()).count()
    }

    /// Sum of parsed balances over the selection set.
    pub fn selected_balance(&self) -> SolAmount {
        self.wallets
            .iter()
            .filter(|w| self.selected.contains(&w.id))
            .map(Wallet::balance_sol)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Wallet, WalletGroup};

    fn test_wallet(id: &str, balance: &str, status: WalletStatus) -> Wallet {
        Wallet {
            id: WalletId::from(id),
            address: format!("addr-{id}"),
            name: format!("Wallet {id}"),
            balance: balance.to_string(),
            group: WalletGroup::Trading,
            status,
        }
    }

    fn test_store() -> AppStore {
        AppStore::new(
            vec![
                test_wallet("a", "1.5", WalletStatus::Active),
                test_wallet("b", "2.25", WalletStatus::Active),
                test_wallet("c", "0.75", WalletStatus::Paused),
                test_wallet("d", "not-a-number", WalletStatus::Active),
            ],
            None,
            AppSettings::default(),
        )
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut store = test_store();
        let id = WalletId::from("a");

        store.toggle_wallet_selection(&id);
        assert!(store.is_selected(&id));

        store.toggle_wallet_selection(&id);
        assert!(!store.is_selected(&id));
        assert!(store.selected_wallet_ids().is_empty());
    }

    #[test]
    fn toggle_ignores_paused_and_unknown() {
        let mut store = test_store();

        store.toggle_wallet_selection(&WalletId::from("c"));
        store.toggle_wallet_selection(&WalletId::from("zzz"));
        assert!(store.selected_wallet_ids().is_empty());
    }

    #[test]
    fn select_all_takes_exactly_the_active_wallets() {
        let mut store = test_store();
        store.toggle_wallet_selection(&WalletId::from("a"));

        store.select_all_wallets();
        let ids: Vec<&str> = store
            .selected_wallet_ids()
            .iter()
            .map(WalletId::as_str)
            .collect();
        assert_eq!(ids, vec!["a", "b", "d"]);
    }

    #[test]
    fn clear_empties_the_selection() {
        let mut store = test_store();
        store.select_all_wallets();
        store.clear_wallet_selection();
        assert!(store.selected_wallet_ids().is_empty());
    }

    #[test]
    fn total_balance_ignores_selection_and_tolerates_junk() {
        let mut store = test_store();
        assert_eq!(store.total_balance().value(), 4.5);

        store.select_all_wallets();
        assert_eq!(store.total_balance().value(), 4.5);
    }

    #[test]
    fn selected_balance_sums_only_selected_parsed_balances() {
        let mut store = test_store();
        store.toggle_wallet_selection(&WalletId::from("a"));
        store.toggle_wallet_selection(&WalletId::from("d")); // parses to 0
        assert_eq!(store.selected_balance().value(), 1.5);
    }

    #[test]
    fn active_count_excludes_paused() {
        let store = test_store();
        assert_eq!(store.active_wallets_count(), 3);
    }

    #[test]
    fn pausing_a_selected_wallet_evicts_it() {
        let mut store = test_store();
        let id = WalletId::from("a");
        store.toggle_wallet_selection(&id);

        store.set_wallet_status(&id, WalletStatus::Paused);
        assert!(!store.is_selected(&id));
        // and it can no longer be re-selected
        store.toggle_wallet_selection(&id);
        assert!(!store.is_selected(&id));
    }

    #[test]
    fn resuming_does_not_auto_select() {
        let mut store = test_store();
        let id = WalletId::from("c");
        store.set_wallet_status(&id, WalletStatus::Active);
        assert!(!store.is_selected(&id));

        store.toggle_wallet_selection(&id);
        assert!(store.is_selected(&id));
    }

    #[test]
    fn trade_draft_gates_on_positive_parse() {
        let mut store = test_store();
        assert!(store.draft_amount().is_some()); // seeded "0.1"

        store.set_trade_amount("0.0");
        assert!(store.draft_amount().is_none());
        store.set_trade_amount("half a sol");
        assert!(store.draft_amount().is_none());
        store.set_trade_amount("0.5");
        assert_eq!(store.draft_amount().unwrap().value(), 0.5);

        store.set_trade_mode(TradeMode::Sell);
        assert_eq!(store.trade_mode(), TradeMode::Sell);
    }

    #[test]
    fn token_can_be_cleared() {
        let mut store = AppStore::seeded();
        assert!(store.current_token().is_some());
        store.set_current_token(None);
        assert!(store.current_token().is_none());
    }

    #[test]
    fn seeded_select_all_excludes_paused_reserve() {
        // End-to-end scenario over the real seed: wallet "1" (0.775, active)
        // is included, wallet "13" (0.163, paused) never is.
        let mut store = AppStore::seeded();
        store.select_all_wallets();

        assert!(store.is_selected(&WalletId::from("1")));
        assert!(!store.is_selected(&WalletId::from("13")));

        let with_thirteen = store.selected_balance().value() + 0.163;
        let total = store.total_balance().value();
        assert!(store.selected_balance().value() < total);
        assert!(with_thirteen <= total + 1e-9);
    }
}
