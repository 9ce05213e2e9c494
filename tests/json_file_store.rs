use std::path::PathBuf;

use fractic_waybill::{
    entities::{AmountField, Charges, ProfitInput, RecordId, Waybill},
    stores::{DocumentStore as _, JsonFileDocumentStore},
    util::WaybillBillingUtil,
};
use serde_json::json;

fn temp_dir() -> PathBuf {
    std::env::temp_dir().join(format!("fractic-waybill-{}", uuid::Uuid::new_v4()))
}

#[tokio::test]
async fn records_survive_reopening_the_store() {
    let dir = temp_dir();
    let waybill = Waybill {
        waybill_no: "1001".to_string(),
        charges: Charges {
            handling: AmountField::from("2,500"),
            ..Default::default()
        },
        ..Default::default()
    };

    let stored = {
        let util = WaybillBillingUtil::new(JsonFileDocumentStore::new(&dir));
        let stored = util.create_waybill(waybill.clone()).await.unwrap();
        util.calculate_profit(ProfitInput {
            waybill_no: "1001".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();
        stored
    };

    let util = WaybillBillingUtil::new(JsonFileDocumentStore::new(&dir));
    let waybills = util.list_waybills().await.unwrap();
    assert_eq!(waybills, vec![stored]);
    let profits = util.list_profit_records(Some("1001")).await.unwrap();
    assert_eq!(profits.len(), 1);
    assert_eq!(profits[0].record.profit, 2500.0);

    tokio::fs::remove_dir_all(&dir).await.unwrap();
}

#[tokio::test]
async fn reads_documents_written_by_the_form() {
    let dir = temp_dir();
    let store = JsonFileDocumentStore::new(&dir);
    // Numeric waybill number, text and numeric amounts, blank fields.
    store
        .add(
            "details_form",
            json!({
                "waybillNo": 1001,
                "shipperName": "Acme",
                "rows": [{"quantity": "2", "description": "boxes", "volume": "1.5"},
                         {"quantity": "1", "description": "bag", "volume": ""}],
                "charges": {"documentation": "", "freight": 1000, "handling": "1,000", "valuation": ""},
                "others": [{"description": "", "amount": ""}]
            }),
        )
        .await
        .unwrap();

    let util = WaybillBillingUtil::new(store);
    let found = util.find_waybills("1001").await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(util.waybill_charge_total(&found[0].waybill).unwrap(), 2500.0);

    tokio::fs::remove_dir_all(&dir).await.unwrap();
}

#[tokio::test]
async fn missing_collections_are_empty() {
    let store = JsonFileDocumentStore::new(temp_dir());
    assert!(store.list("details_form").await.unwrap().is_empty());
    assert!(store
        .delete("details_form", &RecordId::new("nope"))
        .await
        .is_ok());
    assert!(store
        .set("details_form", &RecordId::new("nope"), json!({}))
        .await
        .is_err());
}

#[tokio::test]
async fn writes_replace_the_collection_file_whole() {
    let dir = temp_dir();
    let store = JsonFileDocumentStore::new(&dir);
    let id = store
        .add("details_form", json!({"waybillNo": "1"}))
        .await
        .unwrap();
    assert!(!dir.join("details_form.json.tmp").exists());

    // Block the temporary file so the next write fails before the rename.
    tokio::fs::create_dir(dir.join("details_form.json.tmp"))
        .await
        .unwrap();
    assert!(store
        .add("details_form", json!({"waybillNo": "2"}))
        .await
        .is_err());
    assert_eq!(
        store.list("details_form").await.unwrap(),
        vec![(id, json!({"waybillNo": "1"}))]
    );

    tokio::fs::remove_dir_all(&dir).await.unwrap();
}
