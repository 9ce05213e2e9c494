use crate::entities::{
    Charges, LineItem, ModeOfService, ModeOfTransport, OtherCharge, ShipmentDetails, Waybill,
};

use super::amount_model::{deserialize_label, from_field, to_field, AmountModel};

// Document layout of the `details_form` collection. Every field is optional
// in stored documents.

#[derive(Debug, Default, serde_derive::Deserialize, serde_derive::Serialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct ShipmentDetailsModel {
    consignee_name: String,
    origin: String,
    destination: String,
}

#[derive(Debug, Default, serde_derive::Deserialize, serde_derive::Serialize)]
#[serde(default)]
pub(crate) struct ModeOfTransportModel {
    air: bool,
    land: bool,
    sea: bool,
}

#[derive(Debug, Default, serde_derive::Deserialize, serde_derive::Serialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct ModeOfServiceModel {
    door_door: bool,
    door_pier: bool,
    pier_door: bool,
    pier_pier: bool,
}

#[derive(Debug, Default, serde_derive::Deserialize, serde_derive::Serialize)]
#[serde(default)]
pub(crate) struct LineItemModel {
    quantity: String,
    description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    volume: Option<AmountModel>,
}

#[derive(Debug, Default, serde_derive::Deserialize, serde_derive::Serialize)]
#[serde(default)]
pub(crate) struct ChargesModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    documentation: Option<AmountModel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    freight: Option<AmountModel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    handling: Option<AmountModel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    valuation: Option<AmountModel>,
}

#[derive(Debug, Default, serde_derive::Deserialize, serde_derive::Serialize)]
#[serde(default)]
pub(crate) struct OtherChargeModel {
    description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    amount: Option<AmountModel>,
}

#[derive(Debug, Default, serde_derive::Deserialize, serde_derive::Serialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct WaybillModel {
    #[serde(deserialize_with = "deserialize_label")]
    waybill_no: String,
    shipper_name: String,
    shipment_details: ShipmentDetailsModel,
    mode_of_transport: ModeOfTransportModel,
    mode_of_service: ModeOfServiceModel,
    rows: Vec<LineItemModel>,
    charges: ChargesModel,
    others: Vec<OtherChargeModel>,
}

impl Into<Waybill> for WaybillModel {
    fn into(self) -> Waybill {
        Waybill {
            waybill_no: self.waybill_no,
            shipper_name: self.shipper_name,
            shipment_details: ShipmentDetails {
                consignee_name: self.shipment_details.consignee_name,
                origin: self.shipment_details.origin,
                destination: self.shipment_details.destination,
            },
            mode_of_transport: ModeOfTransport {
                air: self.mode_of_transport.air,
                land: self.mode_of_transport.land,
                sea: self.mode_of_transport.sea,
            },
            mode_of_service: ModeOfService {
                door_door: self.mode_of_service.door_door,
                door_pier: self.mode_of_service.door_pier,
                pier_door: self.mode_of_service.pier_door,
                pier_pier: self.mode_of_service.pier_pier,
            },
            rows: self
                .rows
                .into_iter()
                .map(|row| LineItem {
                    quantity: row.quantity,
                    description: row.description,
                    volume: to_field(row.volume),
                })
                .collect(),
            charges: Charges {
                documentation: to_field(self.charges.documentation),
                freight: to_field(self.charges.freight),
                handling: to_field(self.charges.handling),
                valuation: to_field(self.charges.valuation),
            },
            others: self
                .others
                .into_iter()
                .map(|other| OtherCharge {
                    description: other.description,
                    amount: to_field(other.amount),
                })
                .collect(),
        }
    }
}

impl From<&Waybill> for WaybillModel {
    fn from(waybill: &Waybill) -> Self {
        WaybillModel {
            waybill_no: waybill.waybill_no.clone(),
            shipper_name: waybill.shipper_name.clone(),
            shipment_details: ShipmentDetailsModel {
                consignee_name: waybill.shipment_details.consignee_name.clone(),
                origin: waybill.shipment_details.origin.clone(),
                destination: waybill.shipment_details.destination.clone(),
            },
            mode_of_transport: ModeOfTransportModel {
                air: waybill.mode_of_transport.air,
                land: waybill.mode_of_transport.land,
                sea: waybill.mode_of_transport.sea,
            },
            mode_of_service: ModeOfServiceModel {
                door_door: waybill.mode_of_service.door_door,
                door_pier: waybill.mode_of_service.door_pier,
                pier_door: waybill.mode_of_service.pier_door,
                pier_pier: waybill.mode_of_service.pier_pier,
            },
            rows: waybill
                .rows
                .iter()
                .map(|row| LineItemModel {
                    quantity: row.quantity.clone(),
                    description: row.description.clone(),
                    volume: from_field(&row.volume),
                })
                .collect(),
            charges: ChargesModel {
                documentation: from_field(&waybill.charges.documentation),
                freight: from_field(&waybill.charges.freight),
                handling: from_field(&waybill.charges.handling),
                valuation: from_field(&waybill.charges.valuation),
            },
            others: waybill
                .others
                .iter()
                .map(|other| OtherChargeModel {
                    description: other.description.clone(),
                    amount: from_field(&other.amount),
                })
                .collect(),
        }
    }
}
