use async_trait::async_trait;
use chrono::{DateTime, Utc};
use fractic_server_error::ServerError;
use tracing::{info, warn};

use crate::{
    domain::{
        logic::{charge_calculator::ChargeCalculator, profit_calculator::ProfitCalculator},
        repositories::{
            profit_record_repository::ProfitRecordRepository,
            waybill_repository::WaybillRepository,
        },
    },
    entities::{
        AmountField, ProfitAmendment, ProfitInput, ProfitRecord, RecordId, StoredProfitRecord,
        Taxes, VariableExpense,
    },
};

#[async_trait]
pub trait ProfitUsecase: Send + Sync {
    /// Sum the charge totals of every waybill with the input's number, compute
    /// the profit and persist it as a new record.
    async fn calculate(&self, input: ProfitInput) -> Result<StoredProfitRecord, ServerError>;

    async fn list(&self, waybill_no: Option<&str>)
        -> Result<Vec<StoredProfitRecord>, ServerError>;

    /// Recompute an existing record with new amounts. Its waybill number and
    /// timestamp are kept.
    async fn amend(
        &self,
        id: &RecordId,
        amendment: ProfitAmendment,
    ) -> Result<StoredProfitRecord, ServerError>;

    async fn delete(&self, id: &RecordId) -> Result<(), ServerError>;
}

pub(crate) struct ProfitUsecaseImpl<R1, R2>
where
    R1: WaybillRepository,
    R2: ProfitRecordRepository,
{
    waybill_repository: R1,
    profit_record_repository: R2,
    charge_calculator: ChargeCalculator,
    profit_calculator: ProfitCalculator,
}

impl<R1, R2> ProfitUsecaseImpl<R1, R2>
where
    R1: WaybillRepository,
    R2: ProfitRecordRepository,
{
    pub(crate) fn new(
        waybill_repository: R1,
        profit_record_repository: R2,
        charge_calculator: ChargeCalculator,
        profit_calculator: ProfitCalculator,
    ) -> Self {
        Self {
            waybill_repository,
            profit_record_repository,
            charge_calculator,
            profit_calculator,
        }
    }

    fn build_record(
        &self,
        waybill_no: String,
        total_charges: f64,
        variable_expenses: &[VariableExpense],
        taxes: &Taxes,
        referral_fee: &AmountField,
        timestamp: DateTime<Utc>,
    ) -> Result<ProfitRecord, ServerError> {
        let variable_expenses = self.profit_calculator.normalize_expenses(variable_expenses)?;
        let (bir, service_tax) = self.profit_calculator.tax_rates(taxes)?;
        let taxes = Taxes {
            bir: bir.into(),
            service_tax: service_tax.into(),
        };
        let referral_fee = self.profit_calculator.referral_fee(referral_fee)?;
        let breakdown = self.profit_calculator.compute(
            total_charges,
            &variable_expenses,
            &taxes,
            &referral_fee.into(),
        )?;
        Ok(ProfitRecord {
            waybill_no,
            total_charges,
            total_expenses: breakdown.total_expenses,
            total_taxes: breakdown.total_taxes,
            referral_fee,
            profit: breakdown.profit,
            variable_expenses,
            taxes,
            timestamp,
        })
    }
}

#[async_trait]
impl<R1, R2> ProfitUsecase for ProfitUsecaseImpl<R1, R2>
where
    R1: WaybillRepository,
    R2: ProfitRecordRepository,
{
    async fn calculate(&self, input: ProfitInput) -> Result<StoredProfitRecord, ServerError> {
        let waybills = self
            .waybill_repository
            .fetch_by_waybill_no(&input.waybill_no)
            .await?;
        if waybills.is_empty() {
            warn!(waybill_no = %input.waybill_no, "no waybills found; total charges are zero");
        }
        let total_charges = waybills
            .iter()
            .map(|w| self.charge_calculator.waybill_total(&w.waybill))
            .sum::<Result<f64, ServerError>>()?;

        let record = self.build_record(
            input.waybill_no,
            total_charges,
            &input.variable_expenses,
            &input.taxes,
            &input.referral_fee,
            Utc::now(),
        )?;
        let id = self.profit_record_repository.insert(&record).await?;
        info!(
            %id,
            waybill_no = %record.waybill_no,
            waybills = waybills.len(),
            profit = record.profit,
            "saved profit record"
        );
        Ok(StoredProfitRecord { id, record })
    }

    async fn list(
        &self,
        waybill_no: Option<&str>,
    ) -> Result<Vec<StoredProfitRecord>, ServerError> {
        match waybill_no {
            Some(waybill_no) => {
                self.profit_record_repository
                    .fetch_by_waybill_no(waybill_no)
                    .await
            }
            None => self.profit_record_repository.fetch_all().await,
        }
    }

    async fn amend(
        &self,
        id: &RecordId,
        amendment: ProfitAmendment,
    ) -> Result<StoredProfitRecord, ServerError> {
        let existing = self.profit_record_repository.fetch(id).await?.record;
        let record = self.build_record(
            existing.waybill_no,
            amendment.total_charges.unwrap_or(existing.total_charges),
            &amendment.variable_expenses,
            &amendment.taxes,
            &amendment.referral_fee,
            existing.timestamp,
        )?;
        self.profit_record_repository.update(id, &record).await?;
        info!(%id, waybill_no = %record.waybill_no, profit = record.profit, "amended profit record");
        Ok(StoredProfitRecord {
            id: id.clone(),
            record,
        })
    }

    async fn delete(&self, id: &RecordId) -> Result<(), ServerError> {
        self.profit_record_repository.delete(id).await?;
        info!(%id, "deleted profit record");
        Ok(())
    }
}
