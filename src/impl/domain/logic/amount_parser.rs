use std::sync::LazyLock;

use fractic_server_error::ServerError;
use regex::Regex;
use tracing::debug;

use crate::{
    entities::{AmountField, ParseStrictness},
    errors::InvalidAmount,
};

/// Parse an amount field into a number.
///
/// Missing and blank values are zero. Text may contain thousands-separator
/// commas, and accounting-style parentheses mark a negative amount (ex.
/// "(1,234.50)" = -1234.5). Anything else that does not parse to a finite
/// number is malformed: under `Strict` it is an `InvalidAmount` error; under
/// `Lenient` the longest leading number is used (ex. "100 PHP" = 100), and
/// zero when there is none. The `field` label is only used for reporting.
pub fn parse_amount(
    field: &str,
    amount: &AmountField,
    strictness: ParseStrictness,
) -> Result<f64, ServerError> {
    let parsed = match amount {
        AmountField::Missing => return Ok(0.0),
        AmountField::Number(n) => Some(*n).filter(|n| n.is_finite()),
        AmountField::Text(s) => {
            let raw = s.replace(',', "");
            let raw = raw.trim();
            if raw.is_empty() {
                return Ok(0.0);
            }
            match strictness {
                ParseStrictness::Strict => parse_accounting_text(raw),
                ParseStrictness::Lenient => {
                    parse_accounting_text(raw).or_else(|| parse_leading_number(raw))
                }
            }
        }
    };
    match (parsed, strictness) {
        (Some(value), _) => Ok(value),
        (None, ParseStrictness::Lenient) => {
            debug!(field, value = %amount, "treating malformed amount as zero");
            Ok(0.0)
        }
        (None, ParseStrictness::Strict) => Err(InvalidAmount::new(field, &amount.to_string())),
    }
}

fn parse_accounting_text(raw: &str) -> Option<f64> {
    let is_negative = raw.len() >= 2 && raw.starts_with('(') && raw.ends_with(')');
    let numeric_part = if is_negative {
        raw[1..raw.len() - 1].trim()
    } else {
        raw
    };
    numeric_part
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(|v| if is_negative { -v } else { v })
}

static LEADING_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?")
        .expect("hardcoded regex should be valid")
});

fn parse_leading_number(raw: &str) -> Option<f64> {
    let value = LEADING_NUMBER
        .find(raw)?
        .as_str()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())?;
    debug!(raw, value, "using leading number of amount text");
    Some(value)
}
