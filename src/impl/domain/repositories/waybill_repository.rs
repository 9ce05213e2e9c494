use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::entities::{RecordId, StoredWaybill, Waybill};

#[async_trait]
pub trait WaybillRepository: Send + Sync {
    /// All waybills, ordered by waybill number.
    async fn fetch_all(&self) -> Result<Vec<StoredWaybill>, ServerError>;

    /// Waybills whose number is exactly `waybill_no`.
    async fn fetch_by_waybill_no(&self, waybill_no: &str)
        -> Result<Vec<StoredWaybill>, ServerError>;

    async fn insert(&self, waybill: &Waybill) -> Result<RecordId, ServerError>;

    /// Full-document overwrite.
    async fn update(&self, id: &RecordId, waybill: &Waybill) -> Result<(), ServerError>;

    async fn delete(&self, id: &RecordId) -> Result<(), ServerError>;
}
