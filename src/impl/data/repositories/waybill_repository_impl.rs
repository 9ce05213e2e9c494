use std::{cmp::Ordering, sync::Arc};

use async_trait::async_trait;
use fractic_server_error::ServerError;
use serde_json::Value;

use crate::{
    data::{datasources::document_store::DocumentStore, models::waybill_model::WaybillModel},
    domain::repositories::waybill_repository::WaybillRepository,
    entities::{RecordId, StoredWaybill, Waybill},
    errors::{InvalidDocument, InvalidJson},
};

pub(crate) const WAYBILLS_COLLECTION: &str = "details_form";
const WAYBILL_NO_FIELD: &str = "waybillNo";

pub(crate) struct WaybillRepositoryImpl<S: DocumentStore> {
    store: Arc<S>,
}

impl<S: DocumentStore> WaybillRepositoryImpl<S> {
    pub(crate) fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    fn parse(id: RecordId, document: Value) -> Result<StoredWaybill, ServerError> {
        let model: WaybillModel = serde_json::from_value(document)
            .map_err(|e| InvalidDocument::with_debug(WAYBILLS_COLLECTION, id.as_str(), &e))?;
        Ok(StoredWaybill {
            id,
            waybill: model.into(),
        })
    }

    fn serialize(waybill: &Waybill) -> Result<Value, ServerError> {
        serde_json::to_value(WaybillModel::from(waybill))
            .map_err(|e| InvalidJson::with_debug(WAYBILLS_COLLECTION, &e))
    }
}

#[async_trait]
impl<S: DocumentStore> WaybillRepository for WaybillRepositoryImpl<S> {
    async fn fetch_all(&self) -> Result<Vec<StoredWaybill>, ServerError> {
        let mut waybills = self
            .store
            .list(WAYBILLS_COLLECTION)
            .await?
            .into_iter()
            .map(|(id, document)| Self::parse(id, document))
            .collect::<Result<Vec<_>, _>>()?;
        waybills.sort_by(|a, b| compare_labels(&a.waybill.waybill_no, &b.waybill.waybill_no));
        Ok(waybills)
    }

    async fn fetch_by_waybill_no(
        &self,
        waybill_no: &str,
    ) -> Result<Vec<StoredWaybill>, ServerError> {
        // Documents may hold the number as text or as a JSON number.
        let mut matches = self
            .store
            .query_eq(
                WAYBILLS_COLLECTION,
                WAYBILL_NO_FIELD,
                &Value::String(waybill_no.to_string()),
            )
            .await?;
        if let Ok(number) = waybill_no.parse::<serde_json::Number>() {
            matches.extend(
                self.store
                    .query_eq(WAYBILLS_COLLECTION, WAYBILL_NO_FIELD, &Value::Number(number))
                    .await?,
            );
        }
        matches.sort_by(|a, b| a.0.cmp(&b.0));
        matches.dedup_by(|a, b| a.0 == b.0);
        matches
            .into_iter()
            .map(|(id, document)| Self::parse(id, document))
            .collect()
    }

    async fn insert(&self, waybill: &Waybill) -> Result<RecordId, ServerError> {
        self.store
            .add(WAYBILLS_COLLECTION, Self::serialize(waybill)?)
            .await
    }

    async fn update(&self, id: &RecordId, waybill: &Waybill) -> Result<(), ServerError> {
        self.store
            .set(WAYBILLS_COLLECTION, id, Self::serialize(waybill)?)
            .await
    }

    async fn delete(&self, id: &RecordId) -> Result<(), ServerError> {
        self.store.delete(WAYBILLS_COLLECTION, id).await
    }
}

/// Numeric labels sort numerically and before textual ones; textual labels
/// sort lexicographically. Labels parsing to a non-finite value ("NaN",
/// "inf") count as text.
pub(crate) fn compare_labels(a: &str, b: &str) -> Ordering {
    match (numeric_label(a), numeric_label(b)) {
        (Some(x), Some(y)) => x.total_cmp(&y).then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

fn numeric_label(label: &str) -> Option<f64> {
    label.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_labels_sort_numerically() {
        let mut labels = vec!["10", "WB-2", "9", "", "100", "A-1"];
        labels.sort_by(|a, b| compare_labels(a, b));
        assert_eq!(labels, vec!["9", "10", "100", "", "A-1", "WB-2"]);
    }

    #[test]
    fn non_finite_labels_sort_as_text() {
        let mut labels = (0..60)
            .map(|i| match i % 3 {
                0 => "NaN".to_string(),
                1 => format!("{}", 60 - i),
                _ => format!("{}.5", i),
            })
            .collect::<Vec<_>>();
        labels.push("inf".to_string());
        labels.push("nan".to_string());
        labels.sort_by(|a, b| compare_labels(a, b));

        let numeric = labels
            .iter()
            .take_while(|l| numeric_label(l).is_some())
            .map(|l| l.parse::<f64>().unwrap())
            .collect::<Vec<_>>();
        assert_eq!(numeric.len(), 40);
        assert!(numeric.windows(2).all(|w| w[0] <= w[1]));
        assert!(labels[40..60].iter().all(|l| l == "NaN"));
        assert_eq!(labels[60..], ["inf", "nan"]);
    }

    #[test]
    fn equal_values_with_different_text_are_ordered() {
        assert_eq!(compare_labels("10", "10.0"), Ordering::Less);
        assert_eq!(compare_labels("10.0", "10"), Ordering::Greater);
    }
}
