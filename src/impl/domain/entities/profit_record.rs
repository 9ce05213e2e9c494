use chrono::{DateTime, Utc};

use super::{amount::AmountField, record_id::RecordId};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct VariableExpense {
    pub name: String,
    pub amount: AmountField,
}

impl VariableExpense {
    pub fn new(name: impl Into<String>, amount: impl Into<AmountField>) -> Self {
        Self {
            name: name.into(),
            amount: amount.into(),
        }
    }
}

/// Tax rates, each a percentage of total charges.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Taxes {
    pub bir: AmountField,
    pub service_tax: AmountField,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProfitBreakdown {
    pub total_expenses: f64,
    pub total_taxes: f64,
    pub profit: f64,
}

/// Parameters of a "calculate profit" action.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProfitInput {
    pub waybill_no: String,
    pub variable_expenses: Vec<VariableExpense>,
    pub taxes: Taxes,
    /// Flat amount, not a percentage.
    pub referral_fee: AmountField,
}

/// New amounts for an existing profit record. The waybill number and
/// timestamp of the record are kept.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProfitAmendment {
    /// Overrides the recorded total charges when set.
    pub total_charges: Option<f64>,
    pub variable_expenses: Vec<VariableExpense>,
    pub taxes: Taxes,
    pub referral_fee: AmountField,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProfitRecord {
    pub waybill_no: String,
    pub total_charges: f64,
    pub total_expenses: f64,
    pub total_taxes: f64,
    pub referral_fee: f64,
    pub profit: f64,
    pub variable_expenses: Vec<VariableExpense>,
    pub taxes: Taxes,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StoredProfitRecord {
    pub id: RecordId,
    pub record: ProfitRecord,
}
