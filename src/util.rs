use std::sync::Arc;

use fractic_server_error::ServerError;

use crate::{
    data::{
        datasources::document_store::DocumentStore,
        repositories::{
            profit_record_repository_impl::ProfitRecordRepositoryImpl,
            waybill_repository_impl::WaybillRepositoryImpl,
        },
    },
    domain::{
        logic::{charge_calculator::ChargeCalculator, profit_calculator::ProfitCalculator},
        usecases::{
            profit_usecase::{ProfitUsecase as _, ProfitUsecaseImpl},
            waybill_usecase::{WaybillUsecase as _, WaybillUsecaseImpl},
        },
    },
    entities::{
        AmountField, BillingConfig, ChargeBreakdown, ProfitAmendment, ProfitInput, RecordId,
        StoredProfitRecord, StoredWaybill, VariableExpense, Waybill,
    },
    presentation::waybill_summary::{WaybillSummary, WaybillSummaryPrinter},
};

/// Entry point for waybill billing: record keeping through a document store,
/// plus charge and profit calculation according to a `BillingConfig`.
pub struct WaybillBillingUtil<S: DocumentStore> {
    config: BillingConfig,
    charge_calculator: ChargeCalculator,
    waybill_usecase: WaybillUsecaseImpl<WaybillRepositoryImpl<S>>,
    profit_usecase: ProfitUsecaseImpl<WaybillRepositoryImpl<S>, ProfitRecordRepositoryImpl<S>>,
    summary_printer: WaybillSummaryPrinter,
}

impl<S: DocumentStore> WaybillBillingUtil<S> {
    pub fn new(store: S) -> Self {
        Self::with_config(store, BillingConfig::default())
    }

    pub fn with_config(store: S, config: BillingConfig) -> Self {
        Self::from_shared(Arc::new(store), config)
    }

    /// Use a store that is also held elsewhere.
    pub fn from_shared(store: Arc<S>, config: BillingConfig) -> Self {
        let charge_calculator = ChargeCalculator::from_config(&config);
        Self {
            charge_calculator,
            waybill_usecase: WaybillUsecaseImpl::new(WaybillRepositoryImpl::new(store.clone())),
            profit_usecase: ProfitUsecaseImpl::new(
                WaybillRepositoryImpl::new(store.clone()),
                ProfitRecordRepositoryImpl::new(store),
                charge_calculator,
                ProfitCalculator::new(config.parse_strictness),
            ),
            summary_printer: WaybillSummaryPrinter::new(&config),
            config,
        }
    }

    pub fn config(&self) -> &BillingConfig {
        &self.config
    }

    // Waybills.
    // ---

    pub async fn create_waybill(&self, waybill: Waybill) -> Result<StoredWaybill, ServerError> {
        self.waybill_usecase.create(waybill).await
    }

    pub async fn list_waybills(&self) -> Result<Vec<StoredWaybill>, ServerError> {
        self.waybill_usecase.list().await
    }

    pub async fn search_waybills(&self, query: &str) -> Result<Vec<StoredWaybill>, ServerError> {
        self.waybill_usecase.search(query).await
    }

    pub async fn find_waybills(&self, waybill_no: &str) -> Result<Vec<StoredWaybill>, ServerError> {
        self.waybill_usecase.find(waybill_no).await
    }

    pub async fn waybill_numbers(&self) -> Result<Vec<String>, ServerError> {
        self.waybill_usecase.waybill_numbers().await
    }

    /// Waybill numbers containing `query` (case-insensitive), for a
    /// searchable picker.
    pub async fn filter_waybill_numbers(&self, query: &str) -> Result<Vec<String>, ServerError> {
        let query = query.trim().to_lowercase();
        Ok(self
            .waybill_usecase
            .waybill_numbers()
            .await?
            .into_iter()
            .filter(|n| n.to_lowercase().contains(&query))
            .collect())
    }

    pub async fn update_waybill(
        &self,
        id: &RecordId,
        waybill: Waybill,
    ) -> Result<StoredWaybill, ServerError> {
        self.waybill_usecase.update(id, waybill).await
    }

    pub async fn delete_waybill(&self, id: &RecordId) -> Result<(), ServerError> {
        self.waybill_usecase.delete(id).await
    }

    pub fn waybill_charge_total(&self, waybill: &Waybill) -> Result<f64, ServerError> {
        self.charge_calculator.waybill_total(waybill)
    }

    pub fn waybill_charge_breakdown(
        &self,
        waybill: &Waybill,
    ) -> Result<ChargeBreakdown, ServerError> {
        self.charge_calculator
            .breakdown(&waybill.charges, &waybill.others, &waybill.rows)
    }

    pub fn summarize_waybill(&self, stored: &StoredWaybill) -> Result<WaybillSummary, ServerError> {
        let breakdown = self.waybill_charge_breakdown(&stored.waybill)?;
        Ok(self.summary_printer.summarize(stored, &breakdown))
    }

    // Profit.
    // ---

    /// Starting list for the variable-expense editor: the configured names,
    /// each at zero.
    pub fn default_variable_expenses(&self) -> Vec<VariableExpense> {
        self.config
            .default_variable_expenses
            .iter()
            .map(|name| VariableExpense::new(name.as_str(), AmountField::Number(0.0)))
            .collect()
    }

    pub async fn calculate_profit(
        &self,
        input: ProfitInput,
    ) -> Result<StoredProfitRecord, ServerError> {
        self.profit_usecase.calculate(input).await
    }

    pub async fn list_profit_records(
        &self,
        waybill_no: Option<&str>,
    ) -> Result<Vec<StoredProfitRecord>, ServerError> {
        self.profit_usecase.list(waybill_no).await
    }

    pub async fn amend_profit_record(
        &self,
        id: &RecordId,
        amendment: ProfitAmendment,
    ) -> Result<StoredProfitRecord, ServerError> {
        self.profit_usecase.amend(id, amendment).await
    }

    pub async fn delete_profit_record(&self, id: &RecordId) -> Result<(), ServerError> {
        self.profit_usecase.delete(id).await
    }
}
