use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::entities::{ProfitRecord, RecordId, StoredProfitRecord};

#[async_trait]
pub trait ProfitRecordRepository: Send + Sync {
    /// All profit records, oldest first.
    async fn fetch_all(&self) -> Result<Vec<StoredProfitRecord>, ServerError>;

    async fn fetch_by_waybill_no(
        &self,
        waybill_no: &str,
    ) -> Result<Vec<StoredProfitRecord>, ServerError>;

    async fn fetch(&self, id: &RecordId) -> Result<StoredProfitRecord, ServerError>;

    async fn insert(&self, record: &ProfitRecord) -> Result<RecordId, ServerError>;

    async fn update(&self, id: &RecordId, record: &ProfitRecord) -> Result<(), ServerError>;

    async fn delete(&self, id: &RecordId) -> Result<(), ServerError>;
}
