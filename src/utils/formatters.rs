//! Pure display formatters. Same input, same output; the screens treat
//! these as a library and never format numbers by hand.

use chrono::{DateTime, Local};

/// Adaptive-precision token price. Sub-cent prices keep enough decimals to
/// show real digits; large prices get thousands separators.
pub fn format_price(price: f64) -> String {
    if !price.is_finite() {
        return "0".to_string();
    }
    if price < 0.0001 {
        return trim_trailing_zeros(&format!("{:.10}", price));
    }
    if price < 1.0 {
        return format!("{:.6}", price);
    }
    if price < 1000.0 {
        return format!("{:.2}", price);
    }
    group_thousands(&trim_trailing_zeros(&format!("{:.2}", price)))
}

/// SOL amounts: 4 decimals below 1, else 2.
pub fn format_sol(amount: f64) -> String {
    if !amount.is_finite() {
        return "0.00".to_string();
    }
    if amount < 1.0 {
        format!("{:.4}", amount)
    } else {
        format!("{:.2}", amount)
    }
}

/// Signed percentage with two decimals: `+5.24%`, `-3.46%`.
pub fn format_percent(percent: f64) -> String {
    format!("{:+.2}%", percent)
}

/// K/M/B abbreviation at powers of 1000.
pub fn format_number(n: f64) -> String {
    if !n.is_finite() {
        return "0".to_string();
    }
    if n >= 1e9 {
        format!("{:.2}B", n / 1e9)
    } else if n >= 1e6 {
        format!("{:.2}M", n / 1e6)
    } else if n >= 1e3 {
        format!("{:.1}K", n / 1e3)
    } else {
        format!("{:.2}", n)
    }
}

/// Truncated address: `len` chars of head and tail with an ellipsis between.
/// Short strings pass through untouched.
pub fn format_address(address: &str, len: usize) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= len * 2 + 3 {
        return address.to_string();
    }
    let head: String = chars[..len].iter().collect();
    let tail: String = chars[chars.len() - len..].iter().collect();
    format!("{head}...{tail}")
}

/// 24-hour wall-clock time.
pub fn format_time(timestamp: DateTime<Local>) -> String {
    timestamp.format("%H:%M:%S").to_string()
}

fn trim_trailing_zeros(s: &str) -> String {
    if !s.contains('.') {
        return s.to_string();
    }
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

fn group_thousands(s: &str) -> String {
    let (int_part, frac_part) = match s.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (s.as_ref(), None),
    };

    let mut grouped = String::new();
    let digits: Vec<char> = int_part.chars().collect();
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*c);
    }

    match frac_part {
        Some(f) => format!("{grouped}.{f}"),
        None => grouped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_adapts_precision_to_magnitude() {
        assert_eq!(format_price(0.00004035), "0.00004035");
        assert_eq!(format_price(0.000040), "0.00004");
        assert_eq!(format_price(0.5), "0.500000");
        assert_eq!(format_price(99.999), "100.00");
        assert_eq!(format_price(1234.5), "1,234.5");
        assert_eq!(format_price(64000.0), "64,000");
    }

    #[test]
    fn sol_uses_four_decimals_below_one() {
        assert_eq!(format_sol(0.5), "0.5000");
        assert_eq!(format_sol(12.5), "12.50");
        assert_eq!(format_sol(0.9999), "0.9999");
        assert_eq!(format_sol(1.0), "1.00");
        assert_eq!(format_sol(f64::NAN), "0.00");
    }

    #[test]
    fn percent_always_carries_a_sign() {
        assert_eq!(format_percent(-3.456), "-3.46%");
        assert_eq!(format_percent(5.24), "+5.24%");
        assert_eq!(format_percent(0.0), "+0.00%");
    }

    #[test]
    fn number_abbreviates_at_powers_of_1000() {
        assert_eq!(format_number(1_500_000.0), "1.50M");
        assert_eq!(format_number(2_400_000_000.0), "2.40B");
        assert_eq!(format_number(1500.0), "1.5K");
        assert_eq!(format_number(999.0), "999.00");
        assert_eq!(format_number(f64::NAN), "0");
    }

    #[test]
    fn address_truncation_keeps_head_and_tail() {
        assert_eq!(format_address("7Kx3ABCDMnpq", 4), "7Kx3...Mnpq");
        assert_eq!(format_address("7Kx3Mnp", 4), "7Kx3Mnp");
        assert_eq!(
            format_address("7Kx3pT9rWqZsLm2vNcXeJaUyHdF4gBk8Mnpq", 4),
            "7Kx3...Mnpq"
        );
    }

    #[test]
    fn time_is_24_hour_clock() {
        use chrono::TimeZone;
        let ts = Local.with_ymd_and_hms(2024, 3, 5, 22, 7, 9).unwrap();
        assert_eq!(format_time(ts), "22:07:09");
    }
}
