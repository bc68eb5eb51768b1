//! Decimal grouping for the amount field.

const GROUP_SEPARATOR: char = ',';

/// Groups the decimal digits of `amount` with a comma every three digits from
/// the least-significant end. No separator before the first group, so small
/// amounts come back unchanged and `0` stays `"0"`.
pub fn group_digits(amount: u64) -> String {
    let digits = amount.to_string();
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }
    out
}

/// Grouped amount with an optional currency symbol prefix.
pub fn format_amount(amount: u64, currency_symbol: Option<char>) -> String {
    match currency_symbol {
        Some(sym) => format!("{sym}{}", group_digits(amount)),
        None => group_digits(amount),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouping() {
        assert_eq!(group_digits(0), "0");
        assert_eq!(group_digits(7), "7");
        assert_eq!(group_digits(42), "42");
        assert_eq!(group_digits(999), "999");
        assert_eq!(group_digits(1000), "1,000");
        assert_eq!(group_digits(12345), "12,345");
        assert_eq!(group_digits(1_234_567), "1,234,567");
    }

    #[test]
    fn grouping_handles_max() {
        assert_eq!(group_digits(u64::MAX), "18,446,744,073,709,551,615");
    }

    #[test]
    fn currency_prefix() {
        assert_eq!(format_amount(750, Some('¥')), "¥750");
        assert_eq!(format_amount(1000, Some('¥')), "¥1,000");
        assert_eq!(format_amount(1000, None), "1,000");
    }
}
