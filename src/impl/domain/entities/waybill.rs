use super::{amount::AmountField, record_id::RecordId};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShipmentDetails {
    pub consignee_name: String,
    pub origin: String,
    pub destination: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModeOfTransport {
    pub air: bool,
    pub land: bool,
    pub sea: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModeOfService {
    pub door_door: bool,
    pub door_pier: bool,
    pub pier_door: bool,
    pub pier_pier: bool,
}

/// One line of the "quantity, description, volume" table. Only the volume
/// takes part in charge calculation (it multiplies the freight rate).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineItem {
    pub quantity: String,
    pub description: String,
    pub volume: AmountField,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Charges {
    pub documentation: AmountField,
    pub freight: AmountField,
    pub handling: AmountField,
    pub valuation: AmountField,
}

/// Ad-hoc charge line beyond the four base components.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OtherCharge {
    pub description: String,
    pub amount: AmountField,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Waybill {
    pub waybill_no: String,
    pub shipper_name: String,
    pub shipment_details: ShipmentDetails,
    pub mode_of_transport: ModeOfTransport,
    pub mode_of_service: ModeOfService,
    pub rows: Vec<LineItem>,
    pub charges: Charges,
    pub others: Vec<OtherCharge>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StoredWaybill {
    pub id: RecordId,
    pub waybill: Waybill,
}

/// Per-component view of a waybill's total charge.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ChargeBreakdown {
    pub documentation: f64,
    /// Freight rate as entered, before volume multiplication.
    pub freight_rate: f64,
    /// Freight after applying the freight policy.
    pub freight: f64,
    pub handling: f64,
    pub valuation: f64,
    pub others: f64,
    /// Sum of all row volumes, regardless of freight policy.
    pub total_volume: f64,
    pub total: f64,
}
