use fractic_server_error::ServerError;

use crate::{
    data::models::billing_config_model::BillingConfigModel,
    entities::BillingConfig,
    errors::{InvalidIsoCurrencyCode, InvalidRon, ReadError},
};

pub(crate) struct BillingConfigRonDatasource;

impl BillingConfigRonDatasource {
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) fn from_string(&self, s: &str) -> Result<BillingConfig, ServerError> {
        let model: BillingConfigModel =
            ron::from_str(s).map_err(|e| InvalidRon::with_debug("BillingConfig", &e))?;
        let code = model.currency_code().to_string();
        model
            .into_config()
            .ok_or_else(|| InvalidIsoCurrencyCode::new(&code))
    }

    pub(crate) async fn from_file<P>(&self, path: P) -> Result<BillingConfig, ServerError>
    where
        P: AsRef<std::path::Path>,
    {
        let s = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ReadError::with_debug(&e))?;
        self.from_string(&s)
    }
}

impl BillingConfig {
    pub fn from_ron_str(s: &str) -> Result<Self, ServerError> {
        BillingConfigRonDatasource::new().from_string(s)
    }

    pub async fn from_ron_file<P>(path: P) -> Result<Self, ServerError>
    where
        P: AsRef<std::path::Path>,
    {
        BillingConfigRonDatasource::new().from_file(path).await
    }
}
