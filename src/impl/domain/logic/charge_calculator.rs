use fractic_server_error::ServerError;

use crate::entities::{
    BillingConfig, ChargeBreakdown, Charges, FreightPolicy, LineItem, OtherCharge,
    ParseStrictness, Waybill,
};

use super::amount_parser::parse_amount;

/// Total charge of a waybill: documentation + freight component + handling +
/// valuation + sum of other charges. Only freight is multiplied by volume;
/// everything else is added flat. No floor is applied.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChargeCalculator {
    strictness: ParseStrictness,
    freight_policy: FreightPolicy,
}

impl ChargeCalculator {
    pub fn new(strictness: ParseStrictness, freight_policy: FreightPolicy) -> Self {
        Self {
            strictness,
            freight_policy,
        }
    }

    pub fn from_config(config: &BillingConfig) -> Self {
        Self::new(config.parse_strictness, config.freight_policy)
    }

    pub fn breakdown(
        &self,
        charges: &Charges,
        others: &[OtherCharge],
        rows: &[LineItem],
    ) -> Result<ChargeBreakdown, ServerError> {
        let documentation =
            parse_amount("charges.documentation", &charges.documentation, self.strictness)?;
        let freight_rate = parse_amount("charges.freight", &charges.freight, self.strictness)?;
        let handling = parse_amount("charges.handling", &charges.handling, self.strictness)?;
        let valuation = parse_amount("charges.valuation", &charges.valuation, self.strictness)?;

        let volumes = rows
            .iter()
            .enumerate()
            .map(|(i, row)| parse_amount(&format!("rows[{i}].volume"), &row.volume, self.strictness))
            .collect::<Result<Vec<f64>, ServerError>>()?;
        let total_volume: f64 = volumes.iter().sum();

        // A zero multiplier means there is no volume to charge against, in
        // which case freight is charged as entered.
        let multiplier = match self.freight_policy {
            FreightPolicy::SumOfAllRows => total_volume,
            FreightPolicy::FirstRowOnly => volumes.first().copied().unwrap_or(0.0),
        };
        let freight = if multiplier != 0.0 {
            freight_rate * multiplier
        } else {
            freight_rate
        };

        let others = others
            .iter()
            .enumerate()
            .map(|(i, other)| {
                parse_amount(&format!("others[{i}].amount"), &other.amount, self.strictness)
            })
            .sum::<Result<f64, ServerError>>()?;

        Ok(ChargeBreakdown {
            documentation,
            freight_rate,
            freight,
            handling,
            valuation,
            others,
            total_volume,
            total: documentation + freight + handling + valuation + others,
        })
    }

    pub fn total(
        &self,
        charges: &Charges,
        others: &[OtherCharge],
        rows: &[LineItem],
    ) -> Result<f64, ServerError> {
        Ok(self.breakdown(charges, others, rows)?.total)
    }

    pub fn waybill_total(&self, waybill: &Waybill) -> Result<f64, ServerError> {
        self.total(&waybill.charges, &waybill.others, &waybill.rows)
    }
}

/// Lenient, sum-of-all-rows charge total. Never fails: malformed values count
/// as zero.
pub fn compute_charge_total(charges: &Charges, others: &[OtherCharge], rows: &[LineItem]) -> f64 {
    ChargeCalculator::default()
        .total(charges, others, rows)
        .unwrap_or_default()
}
