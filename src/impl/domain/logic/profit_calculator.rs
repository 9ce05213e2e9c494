use fractic_server_error::ServerError;

use crate::entities::{AmountField, ParseStrictness, ProfitBreakdown, Taxes, VariableExpense};

use super::amount_parser::parse_amount;

/// Net profit: total charges minus variable expenses, taxes (percentages of
/// total charges) and a flat referral fee. May be negative.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfitCalculator {
    strictness: ParseStrictness,
}

impl ProfitCalculator {
    pub fn new(strictness: ParseStrictness) -> Self {
        Self { strictness }
    }

    pub fn compute(
        &self,
        total_charges: f64,
        variable_expenses: &[VariableExpense],
        taxes: &Taxes,
        referral_fee: &AmountField,
    ) -> Result<ProfitBreakdown, ServerError> {
        let total_expenses = variable_expenses
            .iter()
            .enumerate()
            .map(|(i, expense)| {
                parse_amount(
                    &format!("variable_expenses[{i}].amount"),
                    &expense.amount,
                    self.strictness,
                )
            })
            .sum::<Result<f64, ServerError>>()?;
        let (bir, service_tax) = self.tax_rates(taxes)?;
        let total_taxes = (bir + service_tax) / 100.0 * total_charges;
        let referral_fee = self.referral_fee(referral_fee)?;

        Ok(ProfitBreakdown {
            total_expenses,
            total_taxes,
            profit: total_charges - (total_expenses + total_taxes + referral_fee),
        })
    }

    /// Same expenses with every amount resolved to a number, as persisted in
    /// profit records.
    pub(crate) fn normalize_expenses(
        &self,
        variable_expenses: &[VariableExpense],
    ) -> Result<Vec<VariableExpense>, ServerError> {
        variable_expenses
            .iter()
            .enumerate()
            .map(|(i, expense)| {
                Ok(VariableExpense {
                    name: expense.name.clone(),
                    amount: AmountField::Number(parse_amount(
                        &format!("variable_expenses[{i}].amount"),
                        &expense.amount,
                        self.strictness,
                    )?),
                })
            })
            .collect()
    }

    pub(crate) fn tax_rates(&self, taxes: &Taxes) -> Result<(f64, f64), ServerError> {
        Ok((
            parse_amount("taxes.bir", &taxes.bir, self.strictness)?,
            parse_amount("taxes.service_tax", &taxes.service_tax, self.strictness)?,
        ))
    }

    pub(crate) fn referral_fee(&self, referral_fee: &AmountField) -> Result<f64, ServerError> {
        parse_amount("referral_fee", referral_fee, self.strictness)
    }
}

/// Lenient profit computation. Never fails: malformed values count as zero.
pub fn compute_profit(
    total_charges: f64,
    variable_expenses: &[VariableExpense],
    taxes: &Taxes,
    referral_fee: &AmountField,
) -> ProfitBreakdown {
    ProfitCalculator::default()
        .compute(total_charges, variable_expenses, taxes, referral_fee)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn taxes(bir: f64, service_tax: f64) -> Taxes {
        Taxes {
            bir: bir.into(),
            service_tax: service_tax.into(),
        }
    }

    #[test]
    fn computes_expenses_taxes_and_profit() {
        let expenses = vec![
            VariableExpense::new("Gas", 100.0),
            VariableExpense::new("Meals", 50.0),
        ];
        let breakdown = compute_profit(1000.0, &expenses, &taxes(3.0, 2.0), &20.0.into());
        assert_eq!(breakdown.total_expenses, 150.0);
        assert_eq!(breakdown.total_taxes, 50.0);
        assert_eq!(breakdown.profit, 780.0);
    }

    #[test]
    fn referral_fee_is_flat() {
        let breakdown = compute_profit(500.0, &[], &Taxes::default(), &AmountField::from("2"));
        assert_eq!(breakdown.profit, 498.0);
    }

    #[test]
    fn profit_may_be_negative() {
        let expenses = vec![VariableExpense::new("Trucking", "1,200")];
        let breakdown = compute_profit(1000.0, &expenses, &Taxes::default(), &AmountField::Missing);
        assert_eq!(breakdown.total_expenses, 1200.0);
        assert_eq!(breakdown.profit, -200.0);
    }

    #[test]
    fn malformed_inputs_count_as_zero() {
        let expenses = vec![
            VariableExpense::new("Gas", "abc"),
            VariableExpense::new("Salary", AmountField::Missing),
            VariableExpense::new("Tip/Facilitation", "25"),
        ];
        let taxes = Taxes {
            bir: AmountField::from("x"),
            service_tax: AmountField::from("10"),
        };
        let breakdown = compute_profit(200.0, &expenses, &taxes, &AmountField::from("?"));
        assert_eq!(breakdown.total_expenses, 25.0);
        assert_eq!(breakdown.total_taxes, 20.0);
        assert_eq!(breakdown.profit, 155.0);
    }

    #[test]
    fn strict_mode_rejects_malformed_inputs() {
        let calculator = ProfitCalculator::new(ParseStrictness::Strict);
        let expenses = vec![VariableExpense::new("Gas", "abc")];
        assert!(calculator
            .compute(100.0, &expenses, &Taxes::default(), &AmountField::Missing)
            .is_err());
        assert!(calculator
            .compute(100.0, &[], &Taxes::default(), &AmountField::from("2%"))
            .is_err());
    }

    #[test]
    fn calculation_is_repeatable() {
        let expenses = vec![VariableExpense::new("Gas", 12.34)];
        let first = compute_profit(987.65, &expenses, &taxes(1.5, 0.5), &3.0.into());
        let second = compute_profit(987.65, &expenses, &taxes(1.5, 0.5), &3.0.into());
        assert_eq!(first, second);
    }
}
