use fractic_waybill::{
    entities::{AmountField, Charges, LineItem, ModeOfService, ModeOfTransport, OtherCharge, Waybill},
    stores::InMemoryDocumentStore,
    util::WaybillBillingUtil,
};

fn waybill(waybill_no: &str, freight: &str, volumes: &[&str]) -> Waybill {
    Waybill {
        waybill_no: waybill_no.to_string(),
        shipper_name: "Acme Trading".to_string(),
        rows: volumes
            .iter()
            .map(|v| LineItem {
                quantity: "1".to_string(),
                description: "crate".to_string(),
                volume: AmountField::from(*v),
            })
            .collect(),
        charges: Charges {
            freight: AmountField::from(freight),
            ..Default::default()
        },
        ..Default::default()
    }
}

fn util() -> WaybillBillingUtil<InMemoryDocumentStore> {
    WaybillBillingUtil::new(InMemoryDocumentStore::new())
}

#[tokio::test]
async fn lists_waybills_ordered_by_number() {
    let util = util();
    for no in ["10", "9", "WB-1", "100"] {
        util.create_waybill(waybill(no, "1", &[])).await.unwrap();
    }

    let numbers: Vec<String> = util
        .list_waybills()
        .await
        .unwrap()
        .into_iter()
        .map(|w| w.waybill.waybill_no)
        .collect();
    assert_eq!(numbers, vec!["9", "10", "100", "WB-1"]);
}

#[tokio::test]
async fn searches_by_waybill_number() {
    let util = util();
    util.create_waybill(waybill("WB-1001", "1", &[])).await.unwrap();
    util.create_waybill(waybill("wb-2002", "1", &[])).await.unwrap();
    util.create_waybill(waybill("3003", "1", &[])).await.unwrap();

    assert_eq!(util.search_waybills("wb").await.unwrap().len(), 2);
    assert_eq!(util.search_waybills("00").await.unwrap().len(), 3);
    assert_eq!(util.search_waybills("  ").await.unwrap().len(), 3);
    assert!(util.search_waybills("zzz").await.unwrap().is_empty());

    let exact = util.find_waybills("3003").await.unwrap();
    assert_eq!(exact.len(), 1);
    assert!(util.find_waybills("300").await.unwrap().is_empty());
}

#[tokio::test]
async fn waybill_numbers_are_distinct_and_non_blank() {
    let util = util();
    for no in ["2", "1", "2", "", "1"] {
        util.create_waybill(waybill(no, "1", &[])).await.unwrap();
    }

    assert_eq!(util.waybill_numbers().await.unwrap(), vec!["1", "2"]);
    assert_eq!(util.filter_waybill_numbers("2").await.unwrap(), vec!["2"]);
}

#[tokio::test]
async fn update_overwrites_whole_document() {
    let util = util();
    let mut stored = util
        .create_waybill(Waybill {
            others: vec![OtherCharge {
                description: "Storage".to_string(),
                amount: AmountField::from("75"),
            }],
            ..waybill("1001", "10", &["2"])
        })
        .await
        .unwrap();

    stored.waybill.others.clear();
    stored.waybill.shipper_name = "New Shipper".to_string();
    util.update_waybill(&stored.id, stored.waybill.clone())
        .await
        .unwrap();

    let found = util.find_waybills("1001").await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].waybill, stored.waybill);
    assert_eq!(util.waybill_charge_total(&found[0].waybill).unwrap(), 20.0);
}

#[tokio::test]
async fn update_of_unknown_record_fails() {
    let util = util();
    let stored = util.create_waybill(waybill("1", "1", &[])).await.unwrap();
    util.delete_waybill(&stored.id).await.unwrap();

    assert!(util
        .update_waybill(&stored.id, stored.waybill.clone())
        .await
        .is_err());
    // Deleting again is a no-op.
    assert!(util.delete_waybill(&stored.id).await.is_ok());
    assert!(util.list_waybills().await.unwrap().is_empty());
}

#[tokio::test]
async fn summarizes_waybill_for_listing() {
    let util = util();
    let stored = util
        .create_waybill(Waybill {
            mode_of_transport: ModeOfTransport {
                air: true,
                sea: true,
                ..Default::default()
            },
            mode_of_service: ModeOfService::default(),
            others: vec![OtherCharge {
                description: "Insurance".to_string(),
                amount: AmountField::from("1,000"),
            }],
            ..waybill("1001", "1,500", &["2", "3"])
        })
        .await
        .unwrap();

    let summary = util.summarize_waybill(&stored).unwrap();
    assert_eq!(summary.waybill_no, "1001");
    assert_eq!(summary.mode_of_transport, "air, sea");
    assert_eq!(summary.mode_of_service, "No mode selected");
    assert_eq!(summary.total_volume, "5");
    assert_eq!(summary.total_charges, 8500.0);
    assert_eq!(summary.total_charges_display, "8,500.00");
}
