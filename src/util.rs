//! Misc small utilities shared across modules.

/// Parses a user-typed price into integer cents.
///
/// Accepts plain integers ("150") and up to two decimal places ("199.99").
/// Returns `None` for anything non-numeric, non-positive, or with more than
/// two fractional digits; prices are stored as cents so floats never enter
/// the system.
pub fn parse_price(input: &str) -> Option<i64> {
    let s = input.trim();
    let (whole, frac) = match s.split_once('.') {
        Some((w, f)) => (w, f),
        None => (s, ""),
    };
    if whole.is_empty() || frac.len() > 2 {
        return None;
    }
    if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let whole: i64 = whole.parse().ok()?;
    let frac_cents: i64 = if frac.is_empty() {
        0
    } else {
        // "9" means 90 cents, "09" means 9.
        let parsed: i64 = frac.parse().ok()?;
        if frac.len() == 1 { parsed * 10 } else { parsed }
    };
    let cents = whole.checked_mul(100)?.checked_add(frac_cents)?;
    if cents > 0 { Some(cents) } else { None }
}

/// Formats cents for display, dropping the fraction when it is zero
/// ("150" rather than "150.00", but "199.99" stays exact).
pub fn format_price(cents: i64) -> String {
    if cents % 100 == 0 {
        format!("{}₽", cents / 100)
    } else {
        format!("{}.{:02}₽", cents / 100, cents % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_whole_and_decimals() {
        assert_eq!(parse_price("150"), Some(15000));
        assert_eq!(parse_price("199.99"), Some(19999));
        assert_eq!(parse_price(" 42.5 "), Some(4250));
        assert_eq!(parse_price("0.01"), Some(1));
    }

    #[test]
    fn parse_rejects_invalid() {
        assert_eq!(parse_price("0"), None);
        assert_eq!(parse_price("0.00"), None);
        assert_eq!(parse_price("-5"), None);
        assert_eq!(parse_price("1.999"), None);
        assert_eq!(parse_price("abc"), None);
        assert_eq!(parse_price("1,50"), None);
        assert_eq!(parse_price(""), None);
        assert_eq!(parse_price("."), None);
    }

    #[test]
    fn format_drops_zero_fraction() {
        assert_eq!(format_price(15000), "150₽");
        assert_eq!(format_price(19999), "199.99₽");
        assert_eq!(format_price(4250), "42.50₽");
    }
}
