// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod billing_config_datasource;
        pub(crate) mod document_store;
    }
    pub(crate) mod models {
        pub(crate) mod amount_model;
        pub(crate) mod billing_config_model;
        pub(crate) mod profit_record_model;
        pub(crate) mod waybill_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod profit_record_repository_impl;
        pub(crate) mod waybill_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod amount;
        pub(crate) mod billing_config;
        pub(crate) mod mode_flags;
        pub(crate) mod profit_record;
        pub(crate) mod record_id;
        pub(crate) mod waybill;
    }
    pub(crate) mod logic {
        pub(crate) mod amount_parser;
        pub(crate) mod charge_calculator;
        pub(crate) mod profit_calculator;
    }
    pub(crate) mod repositories {
        pub(crate) mod profit_record_repository;
        pub(crate) mod waybill_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod profit_usecase;
        pub(crate) mod waybill_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod mode_flags_fmt;
    pub(crate) mod utils;
    pub(crate) mod waybill_summary;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::amount::*;
        pub use crate::domain::entities::billing_config::*;
        pub use crate::domain::entities::mode_flags::*;
        pub use crate::domain::entities::profit_record::*;
        pub use crate::domain::entities::record_id::*;
        pub use crate::domain::entities::waybill::*;
    }

    pub mod calculators {
        pub use crate::domain::logic::amount_parser::parse_amount;
        pub use crate::domain::logic::charge_calculator::{compute_charge_total, ChargeCalculator};
        pub use crate::domain::logic::profit_calculator::{compute_profit, ProfitCalculator};
    }

    pub mod stores {
        pub use crate::data::datasources::document_store::{
            DocumentStore, InMemoryDocumentStore, JsonFileDocumentStore,
        };
    }

    pub mod formatting {
        pub use crate::presentation::mode_flags_fmt::{format_true_flags, format_true_flags_with};
        pub use crate::presentation::utils::{format_amount, format_amount_with_symbol};
        pub use crate::presentation::waybill_summary::WaybillSummary;
    }
}
