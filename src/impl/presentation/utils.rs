use iso_currency::Currency;
use num_format::{Locale, ToFormattedString as _};

/// Standard number decimal places for the given currency
/// (ex. JPY = 0, PHP = 2).
fn decimal_places(currency: Currency) -> u32 {
    currency.exponent().unwrap_or(0) as u32
}

/// Format an amount with thousands separators and the currency's number of
/// decimal places, rounding half away from zero.
///
/// Uses the en locale ('.' as decimal mark, i.e. 1,000.00) regardless of
/// currency.
pub fn format_amount(amount: f64, currency: Currency) -> String {
    let decimal_places = decimal_places(currency);
    let scale = 10_i64.pow(decimal_places);
    let scaled = (amount.abs() * scale as f64).round() as i64;
    let sign = if amount < 0.0 && scaled != 0 { "-" } else { "" };
    let integer_part = (scaled / scale).to_formatted_string(&Locale::en);
    if decimal_places == 0 {
        format!("{}{}", sign, integer_part)
    } else {
        format!(
            "{}{}.{:0width$}",
            sign,
            integer_part,
            scaled % scale,
            width = decimal_places as usize
        )
    }
}

/// Like `format_amount`, followed by the currency symbol.
pub fn format_amount_with_symbol(amount: f64, currency: Currency) -> String {
    format!("{} {}", format_amount(amount, currency), currency.symbol())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_separators_and_decimals() {
        assert_eq!(format_amount(1234567.891, Currency::PHP), "1,234,567.89");
        assert_eq!(format_amount(0.0, Currency::PHP), "0.00");
        assert_eq!(format_amount(0.999, Currency::PHP), "1.00");
    }

    #[test]
    fn formats_negative_amounts() {
        assert_eq!(format_amount(-1500.5, Currency::PHP), "-1,500.50");
        assert_eq!(format_amount(-0.001, Currency::PHP), "0.00");
    }

    #[test]
    fn respects_zero_decimal_currencies() {
        assert_eq!(format_amount(1234.6, Currency::JPY), "1,235");
    }

    #[test]
    fn appends_currency_symbol() {
        assert_eq!(format_amount_with_symbol(1000.0, Currency::USD), "1,000.00 $");
    }
}
