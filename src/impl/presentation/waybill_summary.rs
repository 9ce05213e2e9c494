use iso_currency::Currency;

use crate::entities::{BillingConfig, ChargeBreakdown, FlagLabelStyle, RecordId, StoredWaybill};

use super::{mode_flags_fmt::format_true_flags_with, utils::format_amount};

/// Display-ready row for a waybill listing or a printable document.
#[derive(Debug, Clone, PartialEq)]
pub struct WaybillSummary {
    pub id: RecordId,
    pub waybill_no: String,
    pub shipper_name: String,
    pub consignee_name: String,
    pub origin: String,
    pub destination: String,
    pub mode_of_transport: String,
    pub mode_of_service: String,
    /// "quantity description (volume)" per line item.
    pub items: Vec<String>,
    pub total_volume: String,
    pub total_charges: f64,
    pub total_charges_display: String,
}

pub(crate) struct WaybillSummaryPrinter {
    currency: Currency,
    flag_label_style: FlagLabelStyle,
    no_mode_placeholder: String,
}

impl WaybillSummaryPrinter {
    pub(crate) fn new(config: &BillingConfig) -> Self {
        Self {
            currency: config.currency,
            flag_label_style: config.flag_label_style,
            no_mode_placeholder: config.no_mode_placeholder.clone(),
        }
    }

    pub(crate) fn summarize(
        &self,
        stored: &StoredWaybill,
        breakdown: &ChargeBreakdown,
    ) -> WaybillSummary {
        let waybill = &stored.waybill;
        WaybillSummary {
            id: stored.id.clone(),
            waybill_no: waybill.waybill_no.clone(),
            shipper_name: waybill.shipper_name.clone(),
            consignee_name: waybill.shipment_details.consignee_name.clone(),
            origin: waybill.shipment_details.origin.clone(),
            destination: waybill.shipment_details.destination.clone(),
            mode_of_transport: self.modes(format_true_flags_with(
                &waybill.mode_of_transport,
                self.flag_label_style,
            )),
            mode_of_service: self.modes(format_true_flags_with(
                &waybill.mode_of_service,
                self.flag_label_style,
            )),
            items: waybill
                .rows
                .iter()
                .map(|row| {
                    let label = [row.quantity.trim(), row.description.trim()]
                        .into_iter()
                        .filter(|s| !s.is_empty())
                        .collect::<Vec<_>>()
                        .join(" ");
                    if row.volume.is_missing() {
                        label
                    } else {
                        format!("{} ({})", label, row.volume).trim().to_string()
                    }
                })
                .collect(),
            total_volume: breakdown.total_volume.to_string(),
            total_charges: breakdown.total,
            total_charges_display: format_amount(breakdown.total, self.currency),
        }
    }

    fn modes(&self, formatted: String) -> String {
        if formatted.is_empty() {
            self.no_mode_placeholder.clone()
        } else {
            formatted
        }
    }
}
