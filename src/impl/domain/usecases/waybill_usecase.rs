use async_trait::async_trait;
use fractic_server_error::ServerError;
use tracing::info;

use crate::{
    domain::repositories::waybill_repository::WaybillRepository,
    entities::{RecordId, StoredWaybill, Waybill},
};

#[async_trait]
pub trait WaybillUsecase: Send + Sync {
    async fn create(&self, waybill: Waybill) -> Result<StoredWaybill, ServerError>;

    async fn list(&self) -> Result<Vec<StoredWaybill>, ServerError>;

    /// Case-insensitive substring match on the waybill number. A blank query
    /// matches everything.
    async fn search(&self, query: &str) -> Result<Vec<StoredWaybill>, ServerError>;

    /// Exact match on the waybill number.
    async fn find(&self, waybill_no: &str) -> Result<Vec<StoredWaybill>, ServerError>;

    /// Distinct non-blank waybill numbers, in listing order.
    async fn waybill_numbers(&self) -> Result<Vec<String>, ServerError>;

    async fn update(&self, id: &RecordId, waybill: Waybill)
        -> Result<StoredWaybill, ServerError>;

    async fn delete(&self, id: &RecordId) -> Result<(), ServerError>;
}

pub(crate) struct WaybillUsecaseImpl<R1: WaybillRepository> {
    waybill_repository: R1,
}

impl<R1: WaybillRepository> WaybillUsecaseImpl<R1> {
    pub(crate) fn new(waybill_repository: R1) -> Self {
        Self { waybill_repository }
    }
}

#[async_trait]
impl<R1: WaybillRepository> WaybillUsecase for WaybillUsecaseImpl<R1> {
    async fn create(&self, waybill: Waybill) -> Result<StoredWaybill, ServerError> {
        let id = self.waybill_repository.insert(&waybill).await?;
        info!(%id, waybill_no = %waybill.waybill_no, "created waybill");
        Ok(StoredWaybill { id, waybill })
    }

    async fn list(&self) -> Result<Vec<StoredWaybill>, ServerError> {
        self.waybill_repository.fetch_all().await
    }

    async fn search(&self, query: &str) -> Result<Vec<StoredWaybill>, ServerError> {
        let all = self.waybill_repository.fetch_all().await?;
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Ok(all);
        }
        Ok(all
            .into_iter()
            .filter(|w| w.waybill.waybill_no.to_lowercase().contains(&query))
            .collect())
    }

    async fn find(&self, waybill_no: &str) -> Result<Vec<StoredWaybill>, ServerError> {
        self.waybill_repository.fetch_by_waybill_no(waybill_no).await
    }

    async fn waybill_numbers(&self) -> Result<Vec<String>, ServerError> {
        let mut numbers: Vec<String> = Vec::new();
        for stored in self.waybill_repository.fetch_all().await? {
            let waybill_no = stored.waybill.waybill_no;
            if !waybill_no.trim().is_empty() && !numbers.contains(&waybill_no) {
                numbers.push(waybill_no);
            }
        }
        Ok(numbers)
    }

    async fn update(
        &self,
        id: &RecordId,
        waybill: Waybill,
    ) -> Result<StoredWaybill, ServerError> {
        self.waybill_repository.update(id, &waybill).await?;
        info!(%id, waybill_no = %waybill.waybill_no, "updated waybill");
        Ok(StoredWaybill {
            id: id.clone(),
            waybill,
        })
    }

    async fn delete(&self, id: &RecordId) -> Result<(), ServerError> {
        // Profit records only carry the waybill number as a label and are
        // left in place.
        self.waybill_repository.delete(id).await?;
        info!(%id, "deleted waybill");
        Ok(())
    }
}
