use rust_decimal::Decimal;

/// Formats an amount with thousands separators and two decimals (`50,000.00`).
#[must_use]
pub fn format_money(amount: Decimal) -> String {
    group_thousands(&format!("{:.2}", amount.round_dp(2)))
}

/// Formats an amount with thousands separators and no decimals (`50,000`).
#[must_use]
pub fn format_money_whole(amount: Decimal) -> String {
    group_thousands(&format!("{:.0}", amount.round()))
}

fn group_thousands(rendered: &str) -> String {
    let (sign, unsigned) = match rendered.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rendered),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match fraction {
        Some(fraction) => format!("{sign}{grouped}.{fraction}"),
        None => format!("{sign}{grouped}"),
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::{format_money, format_money_whole};

    #[test]
    fn formats_with_separators_and_cents() {
        assert_eq!(format_money(Decimal::from(50_000)), "50,000.00");
        assert_eq!(format_money(Decimal::new(123_456_789, 2)), "1,234,567.89");
        assert_eq!(format_money(Decimal::new(5, 1)), "0.50");
    }

    #[test]
    fn formats_whole_amounts() {
        assert_eq!(format_money_whole(Decimal::from(1_000_000)), "1,000,000");
        assert_eq!(format_money_whole(Decimal::from(100)), "100");
    }

    #[test]
    fn keeps_sign_outside_groups() {
        assert_eq!(format_money(Decimal::from(-1_500)), "-1,500.00");
    }
}
