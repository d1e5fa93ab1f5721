//! Display formatting and input parsing for money, percentages, and dates.
//!
//! The wire carries integer cents and basis points; forms show and accept
//! decimal strings. These helpers are the only place that conversion
//! happens, so a price typed as "12.34" and a price echoed back by the
//! backend always render identically.

use shared::Money;

/// Render integer cents as "$12.34".
pub fn format_cents(cents: i64) -> String {
    Money::from_cents(cents).to_string()
}

/// Render basis points as "8.25%"; whole percents drop the decimals.
pub fn format_bps(bps: u32) -> String {
    if bps % 100 == 0 {
        format!("{}%", bps / 100)
    } else {
        format!("{}.{:02}%", bps / 100, bps % 100)
    }
}

/// Render an RFC 3339 timestamp as a short local-free date-time.
/// Unparseable input comes back unchanged so bad data stays visible.
pub fn format_date(rfc3339: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(rfc3339) {
        Ok(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        Err(_) => rfc3339.to_string(),
    }
}

/// Parse a money input like "12.34", "12.3", "12", or "$12.34" into cents.
/// At most two decimal places; anything else is rejected.
pub fn parse_money_input(input: &str) -> Option<i64> {
    let trimmed = input.trim().trim_start_matches('$').trim();
    if trimmed.is_empty() {
        return None;
    }

    let (units_str, cents_str) = match trimmed.split_once('.') {
        Some((units, cents)) => (units, cents),
        None => (trimmed, ""),
    };

    if cents_str.len() > 2 || !cents_str.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let units: i64 = units_str.parse().ok()?;
    if units < 0 {
        return None;
    }
    // "12.3" means 30 cents, not 3
    let cents = match cents_str.len() {
        0 => 0,
        1 => cents_str.parse::<i64>().ok()? * 10,
        _ => cents_str.parse::<i64>().ok()?,
    };

    units.checked_mul(100)?.checked_add(cents)
}

/// Parse a percentage input like "8.25" or "10" into basis points,
/// capped at 100%.
pub fn parse_bps_input(input: &str) -> Option<u32> {
    let trimmed = input.trim().trim_end_matches('%').trim();
    if trimmed.is_empty() {
        return None;
    }

    let (whole_str, frac_str) = match trimmed.split_once('.') {
        Some((whole, frac)) => (whole, frac),
        None => (trimmed, ""),
    };

    if frac_str.len() > 2 || !frac_str.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let whole: u32 = whole_str.parse().ok()?;
    let frac = match frac_str.len() {
        0 => 0,
        1 => frac_str.parse::<u32>().ok()? * 10,
        _ => frac_str.parse::<u32>().ok()?,
    };

    let bps = whole.checked_mul(100)?.checked_add(frac)?;
    if bps > 10_000 {
        return None;
    }
    Some(bps)
}

/// Prefill text for a money input when editing an existing record.
/// Round-trips through [`parse_money_input`].
pub fn cents_to_input(cents: i64) -> String {
    format!("{}.{:02}", cents / 100, (cents % 100).abs())
}

/// Prefill text for a percent input when editing an existing record.
/// Round-trips through [`parse_bps_input`]; zero becomes an empty field.
pub fn bps_to_input(bps: u32) -> String {
    if bps == 0 {
        String::new()
    } else if bps % 100 == 0 {
        format!("{}", bps / 100)
    } else if bps % 10 == 0 {
        format!("{}.{}", bps / 100, (bps % 100) / 10)
    } else {
        format!("{}.{:02}", bps / 100, bps % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_cents() {
        assert_eq!(format_cents(1099), "$10.99");
        assert_eq!(format_cents(0), "$0.00");
        assert_eq!(format_cents(-550), "-$5.50");
    }

    #[test]
    fn test_format_bps() {
        assert_eq!(format_bps(825), "8.25%");
        assert_eq!(format_bps(1000), "10%");
        assert_eq!(format_bps(250), "2.50%");
        assert_eq!(format_bps(0), "0%");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-06-01T12:30:00Z"), "2024-06-01 12:30");
        assert_eq!(format_date("garbage"), "garbage");
    }

    #[test]
    fn test_parse_money_input() {
        assert_eq!(parse_money_input("12.34"), Some(1234));
        assert_eq!(parse_money_input("12.3"), Some(1230));
        assert_eq!(parse_money_input("12"), Some(1200));
        assert_eq!(parse_money_input("$8.50"), Some(850));
        assert_eq!(parse_money_input(" 0.99 "), Some(99));
        assert_eq!(parse_money_input("12.345"), None);
        assert_eq!(parse_money_input("-5"), None);
        assert_eq!(parse_money_input("abc"), None);
        assert_eq!(parse_money_input(""), None);
        assert_eq!(parse_money_input("12."), Some(1200));
    }

    #[test]
    fn test_parse_bps_input() {
        assert_eq!(parse_bps_input("8.25"), Some(825));
        assert_eq!(parse_bps_input("10"), Some(1000));
        assert_eq!(parse_bps_input("2.5"), Some(250));
        assert_eq!(parse_bps_input("100"), Some(10_000));
        assert_eq!(parse_bps_input("100.01"), None);
        assert_eq!(parse_bps_input("0"), Some(0));
        assert_eq!(parse_bps_input("8.25%"), Some(825));
        assert_eq!(parse_bps_input("-1"), None);
        assert_eq!(parse_bps_input(""), None);
    }

    #[test]
    fn test_cents_to_input_round_trips() {
        assert_eq!(cents_to_input(1234), "12.34");
        assert_eq!(cents_to_input(1200), "12.00");
        assert_eq!(cents_to_input(99), "0.99");
        assert_eq!(parse_money_input(&cents_to_input(1234)), Some(1234));
    }

    #[test]
    fn test_bps_to_input_round_trips() {
        assert_eq!(bps_to_input(825), "8.25");
        assert_eq!(bps_to_input(1000), "10");
        assert_eq!(bps_to_input(250), "2.5");
        assert_eq!(bps_to_input(0), "");
        for bps in [1, 25, 250, 825, 1000, 10_000] {
            assert_eq!(parse_bps_input(&bps_to_input(bps)), Some(bps));
        }
    }
}
