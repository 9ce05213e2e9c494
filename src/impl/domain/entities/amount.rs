use std::fmt;

/// A monetary or volume value as entered on a form.
///
/// Stored documents carry these either as JSON numbers or as text (possibly
/// with thousands separators), and fields are frequently left blank. Values
/// are only interpreted when a calculator parses them, so that the parse
/// strictness can be chosen by the caller.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AmountField {
    #[default]
    Missing,
    Number(f64),
    Text(String),
}

impl AmountField {
    pub fn is_missing(&self) -> bool {
        matches!(self, AmountField::Missing)
    }
}

impl From<f64> for AmountField {
    fn from(value: f64) -> Self {
        AmountField::Number(value)
    }
}

impl From<&str> for AmountField {
    fn from(value: &str) -> Self {
        AmountField::Text(value.to_string())
    }
}

impl From<String> for AmountField {
    fn from(value: String) -> Self {
        AmountField::Text(value)
    }
}

impl fmt::Display for AmountField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountField::Missing => Ok(()),
            AmountField::Number(n) => write!(f, "{}", n),
            AmountField::Text(s) => f.write_str(s),
        }
    }
}
