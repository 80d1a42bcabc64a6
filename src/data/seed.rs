//! Hard-coded session seed. The whole dashboard is a mockup: every dataset
//! below is fixed at startup and only the store's own state transitions
//! mutate anything afterwards.

use crate::models::{
    BundleConfig, BundleStatus, Candle, CheckStatus, Holding, SecurityCheck, Token, TradeMode,
    TradeTick, Transaction, TxKind, TxStatus, Wallet, WalletGroup, WalletId, WalletStatus,
};

fn wallet(
    id: &str,
    address: &str,
    name: &str,
    balance: &str,
    group: WalletGroup,
    status: WalletStatus,
) -> Wallet {
    Wallet {
        id: WalletId::from(id),
        address: address.to_string(),
        name: name.to_string(),
        balance: balance.to_string(),
        group,
        status,
    }
}

pub fn wallets() -> Vec<Wallet> {
    use WalletGroup::*;
    use WalletStatus::*;

    vec![
        wallet("1", "7Kx3pT9rWqZsLm2vNcXeJaUyHdF4gBk8Mnpq", "Main Wallet", "0.775", Trading, Active),
        wallet("2", "4Hg2cRv8yTmKpWx5aQdLbNsJfU7eZiC3EzQr", "Sniper #1", "5.2", Sniping, Active),
        wallet("3", "9Lp8dNm4xKvTqRw6bYcFgHsEj2aU5iP7Wzst", "Sniper #2", "3.45", Sniping, Active),
        wallet("4", "2Qr5fJk9sLwMpZx8cVbNdTgEh4aY6uR3Xyza", "Bundle #1", "1.8", Bundler, Active),
        wallet("5", "5Nv9gHj2tPwQrXz7dKcMbLsFe8aU4iT6Cdef", "Bundle #2", "1.25", Bundler, Active),
        wallet("6", "8Tw4hKl6uRxSqYz9eLdNcMtGf3bV7jU2Bghi", "Bundle #3", "0.92", Bundler, Active),
        wallet("7", "3Ux7jMn8vSyTrZa4fPeQdNuHg6cW9kV5Djkl", "Bundle #4", "1.02", Bundler, Active),
        wallet("8", "6Vy2kPq3wTzUsAb8gRfSeQvJh7dX4lW9Emno", "Bundle #5", "0.56", Bundler, Paused),
        wallet("9", "1Wz5lQr7xUaVtBc3hSgTfRwKj9eY2mX6Fpqr", "Volume #1", "0.31", Trading, Active),
        wallet("10", "4Xa8mRs2yVbWuCd6iThUgSxLk5fZ7nY3Gstu", "Volume #2", "0.28", Trading, Active),
        wallet("11", "7Yb3nSt5zWcXvDe9jUiVhTyMl8gA2oZ6Hvwx", "Dev Wallet", "2.15", Trading, Active),
        wallet("12", "2Zc6oTu8aXdYwEf4kVjWiUzNm3hB9pA5Jyza", "Airdrop Farm", "0.05", Sniping, Paused),
        wallet("13", "5Ad9pUv3bYeZxFg7lWkXjVaOn6iC4qB8Kbcd", "Reserve", "0.163", Storage, Paused),
        wallet("14", "8Be4qVw6cZfAyGh2mXlYkWbPo9jD7rC3Lefg", "Cold Storage", "50.0", Storage, Paused),
    ]
}

pub fn current_token() -> Token {
    Token {
        address: "PFPv2mKx9sLqT4wNrEzYcUdJh7gB3aXePit8".to_string(),
        symbol: "PFP".to_string(),
        name: "Penny Flying Pig".to_string(),
        price: 0.000_040_35,
        price_change_24h: 5.24,
        volume_24h: "125.4K".to_string(),
        market_cap: "64.0K".to_string(),
    }
}

fn tick(time: &str, mode: TradeMode, mc: &str, amount: &str, total: &str, trader: &str) -> TradeTick {
    TradeTick {
        time: time.to_string(),
        mode,
        market_cap: mc.to_string(),
        amount: amount.to_string(),
        total_sol: total.to_string(),
        trader: trader.to_string(),
    }
}

pub fn trade_ticks() -> Vec<TradeTick> {
    vec![
        tick("00:32:27", TradeMode::Buy, "64.0K", "3.9M", "0.113", "4Hg...EzQ"),
        tick("00:32:25", TradeMode::Sell, "63.8K", "1.2M", "0.034", "7Kx...Mnp"),
        tick("00:32:22", TradeMode::Buy, "63.5K", "5.1M", "0.147", "2Qr...Xyz"),
        tick("00:32:19", TradeMode::Buy, "63.1K", "2.4M", "0.069", "9Lp...Wzs"),
        tick("00:32:14", TradeMode::Sell, "63.3K", "0.8M", "0.023", "5Nv...Cde"),
        tick("00:32:10", TradeMode::Buy, "62.9K", "7.6M", "0.221", "8Tw...Bgh"),
    ]
}

fn tx(
    id: &str,
    kind: TxKind,
    token: &str,
    amount: &str,
    status: TxStatus,
    time: &str,
    wallet: &str,
    hash: &str,
) -> Transaction {
    Transaction {
        id: id.to_string(),
        kind,
        token: token.to_string(),
        amount: amount.to_string(),
        status,
        time: time.to_string(),
        wallet: wallet.to_string(),
        tx_hash: hash.to_string(),
    }
}

pub fn transactions() -> Vec<Transaction> {
    vec![
        tx("1", TxKind::Buy, "BONK", "0.5 SOL", TxStatus::Success, "2 min ago", "Main", "5Kx...Mnp"),
        tx("2", TxKind::Sell, "JUP", "100 JUP", TxStatus::Pending, "5 min ago", "Trading", "3Qr...Xyz"),
        tx("3", TxKind::Swap, "RAY → SOL", "50 RAY", TxStatus::Success, "8 min ago", "Sniper", "7Lp...Abc"),
        tx("4", TxKind::Buy, "WIF", "0.1 SOL", TxStatus::Failed, "12 min ago", "Bundle #1", "9Nv...Def"),
        tx("5", TxKind::Buy, "POPCAT", "0.25 SOL", TxStatus::Success, "15 min ago", "Main", "2Hg...Ghi"),
        tx("6", TxKind::Deploy, "PFP", "0.02 SOL", TxStatus::Success, "22 min ago", "Dev Wallet", "6Vy...Jkl"),
    ]
}

fn holding(
    id: &str,
    token: &str,
    symbol: &str,
    balance: &str,
    value_usd: f64,
    price: &str,
    change_24h: f64,
    pnl_usd: f64,
    wallet: &str,
) -> Holding {
    Holding {
        id: id.to_string(),
        token: token.to_string(),
        symbol: symbol.to_string(),
        balance: balance.to_string(),
        value_usd,
        price: price.to_string(),
        change_24h,
        pnl_usd,
        wallet: wallet.to_string(),
    }
}

pub fn holdings() -> Vec<Holding> {
    vec![
        holding("1", "Solana", "SOL", "45.5", 4550.0, "$100.00", 2.5, 350.0, "Main"),
        holding("2", "Bonk", "BONK", "50M", 1250.0, "$0.000025", -5.2, -120.0, "Trading"),
        holding("3", "Jupiter", "JUP", "2,500", 3000.0, "$1.20", 8.3, 580.0, "Main"),
        holding("4", "Raydium", "RAY", "500", 900.0, "$1.80", 1.2, 45.0, "Sniper"),
        holding("5", "Marinade", "MNDE", "3,000", 420.0, "$0.14", -2.1, -35.0, "Trading"),
    ]
}

pub fn bundles() -> Vec<BundleConfig> {
    vec![
        BundleConfig {
            id: "1".to_string(),
            name: "Quick Buy Bundle".to_string(),
            wallet_count: 5,
            amount_per_wallet: "0.1".to_string(),
            delay_ms: (50, 150),
            status: BundleStatus::Ready,
            anti_detection: true,
        },
        BundleConfig {
            id: "2".to_string(),
            name: "Launch Snipe".to_string(),
            wallet_count: 10,
            amount_per_wallet: "0.05".to_string(),
            delay_ms: (0, 50),
            status: BundleStatus::Completed,
            anti_detection: true,
        },
        BundleConfig {
            id: "3".to_string(),
            name: "DCA Bundle".to_string(),
            wallet_count: 3,
            amount_per_wallet: "0.5".to_string(),
            delay_ms: (1000, 2000),
            status: BundleStatus::Ready,
            anti_detection: false,
        },
    ]
}

pub fn security_checks() -> Vec<SecurityCheck> {
    let check = |id: &str, name: &str, description: &str, status| SecurityCheck {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        status,
    };

    vec![
        check("1", "Vault Encryption", "AES-256 encryption active", CheckStatus::Pass),
        check("2", "Key Isolation", "Keys stored in secure vault", CheckStatus::Pass),
        check("3", "Session Lock", "Auto-lock after 15 minutes", CheckStatus::Pass),
        check("4", "RPC Connection", "Using private RPC endpoint", CheckStatus::Pass),
        check("5", "Backup Status", "Last backup: 2 days ago", CheckStatus::Warning),
    ]
}

/// Deterministic pseudo-random walk around the seed token price. An LCG
/// keeps the series stable across runs without pulling in an RNG crate.
pub fn candles() -> Vec<Candle> {
    const COUNT: usize = 72;
    let mut rng: u64 = 0xF0F0_1234_5678_9ABC;
    let mut next = move || {
        rng = rng.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        // Top bits have the best statistical quality
        ((rng >> 33) as f64 / (1u64 << 31) as f64) - 0.5
    };

    let mut close = 0.000_032_0;
    let mut out = Vec::with_capacity(COUNT);
    for _ in 0..COUNT {
        let open = close;
        let drift = 0.0004; // gentle up-trend toward the seed price
        let step = open * (drift + 0.035 * next());
        close = (open + step).max(open * 0.5);
        let wick = open * 0.012;
        let high = open.max(close) + wick * (0.5 + next().abs());
        let low = (open.min(close) - wick * (0.5 + next().abs())).max(0.0);
        out.push(Candle { open, high, low, close });
    }
    out
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;
    use crate::models::WalletStatus;

    #[test]
    fn wallet_ids_are_unique() {
        assert!(wallets().iter().map(|w| &w.id).all_unique());
    }

    #[test]
    fn scenario_wallets_present() {
        let seed = wallets();
        let main = seed.iter().find(|w| w.id.as_str() == "1").unwrap();
        assert_eq!(main.balance, "0.775");
        assert_eq!(main.status, WalletStatus::Active);

        let reserve = seed.iter().find(|w| w.id.as_str() == "13").unwrap();
        assert_eq!(reserve.balance, "0.163");
        assert_eq!(reserve.status, WalletStatus::Paused);
    }

    #[test]
    fn candles_are_deterministic_and_well_formed() {
        let a = candles();
        let b = candles();
        assert_eq!(a, b);
        for c in &a {
            assert!(c.high >= c.open.max(c.close));
            assert!(c.low <= c.open.min(c.close));
            assert!(c.low >= 0.0);
        }
    }
}
