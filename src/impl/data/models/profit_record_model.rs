use chrono::{DateTime, Utc};

use crate::entities::{ProfitRecord, Taxes, VariableExpense};

use super::amount_model::{deserialize_label, from_field, to_field, AmountModel};

// Document layout of the `profits` collection.

#[derive(Debug, Default, serde_derive::Deserialize, serde_derive::Serialize)]
#[serde(default)]
pub(crate) struct VariableExpenseModel {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    amount: Option<AmountModel>,
}

#[derive(Debug, Default, serde_derive::Deserialize, serde_derive::Serialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct TaxesModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    bir: Option<AmountModel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    service_tax: Option<AmountModel>,
}

#[derive(Debug, serde_derive::Deserialize, serde_derive::Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProfitRecordModel {
    #[serde(default, deserialize_with = "deserialize_label")]
    waybill_no: String,
    #[serde(default)]
    total_charges: f64,
    #[serde(default)]
    total_expenses: f64,
    #[serde(default)]
    total_taxes: f64,
    #[serde(default)]
    referral_fee: f64,
    #[serde(default)]
    profit: f64,
    #[serde(default)]
    variable_expenses: Vec<VariableExpenseModel>,
    #[serde(default)]
    taxes: TaxesModel,
    timestamp: DateTime<Utc>,
}

impl Into<ProfitRecord> for ProfitRecordModel {
    fn into(self) -> ProfitRecord {
        ProfitRecord {
            waybill_no: self.waybill_no,
            total_charges: self.total_charges,
            total_expenses: self.total_expenses,
            total_taxes: self.total_taxes,
            referral_fee: self.referral_fee,
            profit: self.profit,
            variable_expenses: self
                .variable_expenses
                .into_iter()
                .map(|e| VariableExpense {
                    name: e.name,
                    amount: to_field(e.amount),
                })
                .collect(),
            taxes: Taxes {
                bir: to_field(self.taxes.bir),
                service_tax: to_field(self.taxes.service_tax),
            },
            timestamp: self.timestamp,
        }
    }
}

impl From<&ProfitRecord> for ProfitRecordModel {
    fn from(record: &ProfitRecord) -> Self {
        ProfitRecordModel {
            waybill_no: record.waybill_no.clone(),
            total_charges: record.total_charges,
            total_expenses: record.total_expenses,
            total_taxes: record.total_taxes,
            referral_fee: record.referral_fee,
            profit: record.profit,
            variable_expenses: record
                .variable_expenses
                .iter()
                .map(|e| VariableExpenseModel {
                    name: e.name.clone(),
                    amount: from_field(&e.amount),
                })
                .collect(),
            taxes: TaxesModel {
                bir: from_field(&record.taxes.bir),
                service_tax: from_field(&record.taxes.service_tax),
            },
            timestamp: record.timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::AmountField;

    #[test]
    fn reads_profit_document() {
        let json = r#"{
            "waybillNo": 1001,
            "totalCharges": 1000,
            "totalExpenses": 150,
            "totalTaxes": 50,
            "referralFee": 20,
            "profit": 780,
            "variableExpenses": [{"name": "Gas", "amount": 100}, {"name": "Meals", "amount": "50"}],
            "timestamp": "2024-11-05T08:30:00Z"
        }"#;
        let model: ProfitRecordModel = serde_json::from_str(json).unwrap();
        let record: ProfitRecord = model.into();

        assert_eq!(record.waybill_no, "1001");
        assert_eq!(record.profit, 780.0);
        assert_eq!(record.variable_expenses[1].amount, AmountField::from("50"));
        assert_eq!(record.taxes, Taxes::default());
        assert_eq!(record.timestamp.to_rfc3339(), "2024-11-05T08:30:00+00:00");
    }

    #[test]
    fn requires_timestamp() {
        assert!(serde_json::from_str::<ProfitRecordModel>(r#"{"waybillNo": "1"}"#).is_err());
    }
}
