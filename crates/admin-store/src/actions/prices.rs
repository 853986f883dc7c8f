//! Price actions
//!
//! Both resolve with `data` on success and with the error body otherwise.

use admin_api::{endpoints, FormPayload, GatewayError};
use serde_json::Value;

use crate::store::AdminStore;

impl AdminStore {
    /// Prices of `app`, or only `price_id` when given
    pub async fn get_prices(
        &self,
        app: &str,
        price_id: Option<&str>,
    ) -> Result<Value, GatewayError> {
        let mut payload = FormPayload::new();
        payload.append_text("app", app);
        if let Some(price_id) = price_id.filter(|id| !id.is_empty()) {
            payload.append_json("price_id", price_id)?;
        }
        self.submit_for_data(endpoints::GET_PRICES, payload).await
    }

    /// Make `price_id` the active price of `app`
    pub async fn update_price(&self, app: &str, price_id: &str) -> Result<Value, GatewayError> {
        let mut payload = FormPayload::new();
        payload.append_text("app", app);
        payload.append_json("price_id", price_id)?;
        self.submit_for_data(endpoints::UPDATE_PRICE, payload).await
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::{store_with, MockGateway};
    use admin_api::endpoints;
    use serde_json::json;

    #[tokio::test]
    async fn test_get_prices_returns_data() {
        let gateway = MockGateway::new();
        gateway.reply_ok(json!({"success": true, "data": [{"id": "p1", "amount": 499}]}));
        let store = store_with(&gateway);

        let prices = store.get_prices("PSY", None).await.unwrap();
        assert_eq!(prices[0]["amount"], 499);

        let (endpoint, sent) = gateway.last_request().unwrap();
        assert_eq!(endpoint, endpoints::GET_PRICES);
        assert_eq!(sent.text("app"), Some("PSY"));
        assert!(!sent.contains("price_id"));
    }

    #[tokio::test]
    async fn test_price_id_is_json_text() {
        let gateway = MockGateway::new();
        let store = store_with(&gateway);

        store.get_prices("Avocado", Some("p1")).await.unwrap();
        let (_, sent) = gateway.last_request().unwrap();
        assert_eq!(sent.text("price_id"), Some(r#""p1""#));

        store.update_price("Avocado", "p2").await.unwrap();
        let (endpoint, sent) = gateway.last_request().unwrap();
        assert_eq!(endpoint, endpoints::UPDATE_PRICE);
        assert_eq!(sent.text("price_id"), Some(r#""p2""#));
    }

    #[tokio::test]
    async fn test_update_price_failure_returns_error_body() {
        let gateway = MockGateway::new();
        gateway.reply_status(404, json!({"success": false, "message": "PRICE_NOT_FOUND"}));
        let store = store_with(&gateway);

        let body = store.update_price("PSY", "missing").await.unwrap();
        assert_eq!(body["message"], "PRICE_NOT_FOUND");
    }
}
