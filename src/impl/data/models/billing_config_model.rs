use iso_currency::Currency;

use crate::entities::{BillingConfig, FlagLabelStyle, FreightPolicy, ParseStrictness};

/// RON layout of a billing configuration. Omitted fields keep their
/// defaults, ex.:
///
/// ```ron
/// (
///     parse_strictness: Strict,
///     currency: "USD",
///     default_variable_expenses: ["Gas", "Tolls"],
/// )
/// ```
#[derive(Debug, serde_derive::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct BillingConfigModel {
    parse_strictness: ParseStrictness,
    freight_policy: FreightPolicy,
    currency: String,
    default_variable_expenses: Vec<String>,
    flag_label_style: FlagLabelStyle,
    no_mode_placeholder: String,
}

impl Default for BillingConfigModel {
    fn default() -> Self {
        let defaults = BillingConfig::default();
        Self {
            parse_strictness: defaults.parse_strictness,
            freight_policy: defaults.freight_policy,
            currency: defaults.currency.code().to_string(),
            default_variable_expenses: defaults.default_variable_expenses,
            flag_label_style: defaults.flag_label_style,
            no_mode_placeholder: defaults.no_mode_placeholder,
        }
    }
}

impl BillingConfigModel {
    pub(crate) fn currency_code(&self) -> &str {
        &self.currency
    }

    /// `None` if the currency code is not a known ISO 4217 code.
    pub(crate) fn into_config(self) -> Option<BillingConfig> {
        Some(BillingConfig {
            parse_strictness: self.parse_strictness,
            freight_policy: self.freight_policy,
            currency: Currency::from_code(&self.currency)?,
            default_variable_expenses: self.default_variable_expenses,
            flag_label_style: self.flag_label_style,
            no_mode_placeholder: self.no_mode_placeholder,
        })
    }
}
