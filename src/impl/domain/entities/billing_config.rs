use iso_currency::Currency;

/// How malformed numeric input is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde_derive::Deserialize)]
pub enum ParseStrictness {
    /// Malformed values count as zero.
    #[default]
    Lenient,
    /// Malformed values are reported as `InvalidAmount`.
    Strict,
}

/// How the freight rate is multiplied by line-item volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde_derive::Deserialize)]
pub enum FreightPolicy {
    /// Freight × sum of all row volumes; flat when the sum is zero.
    #[default]
    SumOfAllRows,
    /// Freight × volume of the first row; flat when that row has no volume.
    FirstRowOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde_derive::Deserialize)]
pub enum FlagLabelStyle {
    /// Flag keys as declared (ex. `doorPier`).
    #[default]
    Key,
    /// CamelCase keys split into words (ex. `door Pier`).
    Humanized,
}

pub const DEFAULT_VARIABLE_EXPENSES: [&str; 6] =
    ["Gas", "Salary", "Trucking", "Freight", "Tip/Facilitation", "Meals"];

pub const DEFAULT_NO_MODE_PLACEHOLDER: &str = "No mode selected";

#[derive(Debug, Clone, PartialEq)]
pub struct BillingConfig {
    pub parse_strictness: ParseStrictness,
    pub freight_policy: FreightPolicy,
    pub currency: Currency,
    /// Names seeding the editable variable-expense list. Not restrictive.
    pub default_variable_expenses: Vec<String>,
    pub flag_label_style: FlagLabelStyle,
    pub no_mode_placeholder: String,
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self {
            parse_strictness: ParseStrictness::default(),
            freight_policy: FreightPolicy::default(),
            currency: Currency::PHP,
            default_variable_expenses: DEFAULT_VARIABLE_EXPENSES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            flag_label_style: FlagLabelStyle::default(),
            no_mode_placeholder: DEFAULT_NO_MODE_PLACEHOLDER.to_string(),
        }
    }
}
