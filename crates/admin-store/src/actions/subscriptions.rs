//! Subscription reports

use admin_api::{endpoints, FormPayload, GatewayError};
use serde_json::Value;

use crate::store::AdminStore;

impl AdminStore {
    /// Subscriptions of `app` that are currently active
    pub async fn get_active_subscriptions(&self, app: &str) -> Result<Value, GatewayError> {
        self.submit_for_data(endpoints::GET_ACTIVE_SUBSCRIPTIONS, app_payload(app)).await
    }

    /// Subscriptions of `app` scheduled to renew
    pub async fn get_schedule_subscriptions(&self, app: &str) -> Result<Value, GatewayError> {
        self.submit_for_data(endpoints::GET_SCHEDULE_SUBSCRIPTIONS, app_payload(app)).await
    }
}

fn app_payload(app: &str) -> FormPayload {
    let mut payload = FormPayload::new();
    payload.append_text("app", app);
    payload
}
