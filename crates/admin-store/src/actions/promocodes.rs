//! Promocode actions

use admin_api::types::decode_keyed;
use admin_api::{endpoints, ApiResponse, FormPayload, GatewayError, Promocodes};
use serde_json::Value;

use crate::store::{log_failure, take_data, AdminStore};

impl AdminStore {
    /// Load all promocodes; `sended` comes back as a bool
    pub async fn get_promocodes(&self) {
        self.set_loading(true);

        match self.fetch_promocodes().await {
            Ok(promocodes) => {
                log::debug!("Loaded {} promocodes", promocodes.len());
                let mut state = self.write_state();
                state.promocodes = promocodes;
                state.loading = false;
            }
            Err(e) => log_failure("get_promocodes", &e),
        }
    }

    /// Delete a promocode; failures are logged and yield `None`
    pub async fn delete_promocode(&self, promocode: &str) -> Option<ApiResponse> {
        let mut payload = FormPayload::new();
        payload.append_text("promocode", promocode);

        match self.submit(endpoints::DELETE_PROMOCODE, payload).await {
            Ok(body) => Some(ApiResponse::new(body)),
            Err(e) => {
                log_failure("delete_promocode", &e);
                None
            }
        }
    }

    pub async fn add_promocode(&self, promocode: &Value) -> Result<ApiResponse, GatewayError> {
        let mut payload = FormPayload::new();
        payload.append_json("promocode_data", promocode)?;
        self.submit_for_body(endpoints::CREATE_PROMOCODE, payload).await
    }

    pub async fn update_promocode(
        &self,
        promocode: &str,
        new_data: &Value,
    ) -> Result<ApiResponse, GatewayError> {
        let mut payload = FormPayload::new();
        payload.append_text("promocode", promocode);
        payload.append_json("promocode_new_data", new_data)?;
        self.submit_for_body(endpoints::UPDATE_PROMOCODE, payload).await
    }

    async fn fetch_promocodes(&self) -> Result<Promocodes, GatewayError> {
        let body = self
            .submit(endpoints::GET_PROMOCODES, FormPayload::new())
            .await?;
        let promocodes = take_data(body)
            .get_mut("promocodes")
            .map(Value::take)
            .unwrap_or(Value::Null);
        decode_keyed(promocodes).map_err(|e| GatewayError::Decode(e.to_string()))
    }
}
