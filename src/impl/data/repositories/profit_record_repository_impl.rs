use std::sync::Arc;

use async_trait::async_trait;
use fractic_server_error::ServerError;
use serde_json::Value;

use crate::{
    data::{
        datasources::document_store::DocumentStore,
        models::profit_record_model::ProfitRecordModel,
    },
    domain::repositories::profit_record_repository::ProfitRecordRepository,
    entities::{ProfitRecord, RecordId, StoredProfitRecord},
    errors::{InvalidDocument, InvalidJson, RecordNotFound},
};

pub(crate) const PROFITS_COLLECTION: &str = "profits";

pub(crate) struct ProfitRecordRepositoryImpl<S: DocumentStore> {
    store: Arc<S>,
}

impl<S: DocumentStore> ProfitRecordRepositoryImpl<S> {
    pub(crate) fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    fn parse(id: RecordId, document: Value) -> Result<StoredProfitRecord, ServerError> {
        let model: ProfitRecordModel = serde_json::from_value(document)
            .map_err(|e| InvalidDocument::with_debug(PROFITS_COLLECTION, id.as_str(), &e))?;
        Ok(StoredProfitRecord {
            id,
            record: model.into(),
        })
    }

    fn serialize(record: &ProfitRecord) -> Result<Value, ServerError> {
        serde_json::to_value(ProfitRecordModel::from(record))
            .map_err(|e| InvalidJson::with_debug(PROFITS_COLLECTION, &e))
    }
}

#[async_trait]
impl<S: DocumentStore> ProfitRecordRepository for ProfitRecordRepositoryImpl<S> {
    async fn fetch_all(&self) -> Result<Vec<StoredProfitRecord>, ServerError> {
        let mut records = self
            .store
            .list(PROFITS_COLLECTION)
            .await?
            .into_iter()
            .map(|(id, document)| Self::parse(id, document))
            .collect::<Result<Vec<_>, _>>()?;
        records.sort_by_key(|r| r.record.timestamp);
        Ok(records)
    }

    async fn fetch_by_waybill_no(
        &self,
        waybill_no: &str,
    ) -> Result<Vec<StoredProfitRecord>, ServerError> {
        Ok(self
            .fetch_all()
            .await?
            .into_iter()
            .filter(|r| r.record.waybill_no == waybill_no)
            .collect())
    }

    async fn fetch(&self, id: &RecordId) -> Result<StoredProfitRecord, ServerError> {
        let document = self
            .store
            .get(PROFITS_COLLECTION, id)
            .await?
            .ok_or_else(|| RecordNotFound::new(PROFITS_COLLECTION, id.as_str()))?;
        Self::parse(id.clone(), document)
    }

    async fn insert(&self, record: &ProfitRecord) -> Result<RecordId, ServerError> {
        self.store
            .add(PROFITS_COLLECTION, Self::serialize(record)?)
            .await
    }

    async fn update(&self, id: &RecordId, record: &ProfitRecord) -> Result<(), ServerError> {
        self.store
            .set(PROFITS_COLLECTION, id, Self::serialize(record)?)
            .await
    }

    async fn delete(&self, id: &RecordId) -> Result<(), ServerError> {
        self.store.delete(PROFITS_COLLECTION, id).await
    }
}
