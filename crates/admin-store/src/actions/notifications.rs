//! Notification actions
//!
//! Create/update/delete take a payload the caller builds; the store only adds
//! the session token.

use admin_api::types::decode_data;
use admin_api::{endpoints, ApiResponse, FormPayload, GatewayError, Notifications};
use serde_json::Value;

use crate::store::{log_failure, take_data, AdminStore};

impl AdminStore {
    /// Load the notifications of `app` in `lang`
    pub async fn get_notifications(&self, app: &str, lang: &str) {
        self.set_loading(true);

        let mut payload = FormPayload::new();
        payload.append_text("app", app);
        payload.append_text("lang", lang);

        match self.fetch_notifications(payload).await {
            Ok(notifications) => {
                log::debug!("Loaded {} notifications for {}", notifications.len(), app);
                let mut state = self.write_state();
                state.notifications = notifications;
                state.loading = false;
            }
            Err(e) => log_failure("get_notifications", &e),
        }
    }

    /// Fetch one notification for editing
    pub async fn get_notification(&self, notification_id: &str) -> Option<Value> {
        let mut payload = FormPayload::new();
        payload.append_text("notification_id", notification_id);

        match self.submit(endpoints::GET_NOTIFICATION, payload).await {
            Ok(body) => Some(take_data(body)),
            Err(e) => {
                log_failure("get_notification", &e);
                None
            }
        }
    }

    pub async fn add_notification(
        &self,
        payload: FormPayload,
    ) -> Result<ApiResponse, GatewayError> {
        self.submit_for_body(endpoints::CREATE_NOTIFICATION, payload).await
    }

    pub async fn update_notification(
        &self,
        payload: FormPayload,
    ) -> Result<ApiResponse, GatewayError> {
        self.submit_for_body(endpoints::UPDATE_NOTIFICATION, payload).await
    }

    pub async fn delete_notification(
        &self,
        payload: FormPayload,
    ) -> Result<ApiResponse, GatewayError> {
        self.submit_for_body(endpoints::DELETE_NOTIFICATION, payload).await
    }

    async fn fetch_notifications(
        &self,
        payload: FormPayload,
    ) -> Result<Notifications, GatewayError> {
        let body = self.submit(endpoints::GET_NOTIFICATIONS, payload).await?;
        decode_data(take_data(body)).map_err(|e| GatewayError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{store_with, MockGateway};
    use admin_api::SESSION_TOKEN_FIELD;
    use serde_json::json;

    #[tokio::test]
    async fn test_get_notifications_replaces_in_order() {
        let gateway = MockGateway::new();
        gateway.reply_ok(json!({"data": [
            {"id": 3, "title": "Later"},
            {"id": "1", "title": "Sooner"}
        ]}));
        let store = store_with(&gateway);

        store.get_notifications("PSY", "ru").await;

        let notifications = store.read(|s| s.notifications.clone());
        let ids: Vec<&str> = notifications.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1"]);
        assert_eq!(notifications[0].fields["title"], "Later");
        assert!(!store.is_loading());

        let (endpoint, sent) = gateway.last_request().unwrap();
        assert_eq!(endpoint, endpoints::GET_NOTIFICATIONS);
        assert_eq!(sent.text("app"), Some("PSY"));
        assert_eq!(sent.text("lang"), Some("ru"));
    }

    #[tokio::test]
    async fn test_get_notifications_loading_while_in_flight() {
        let gateway = MockGateway::gated();
        gateway.reply_ok(json!({"data": []}));
        let store = store_with(&gateway);

        let task = tokio::spawn({
            let store = store.clone();
            async move { store.get_notifications("Avocado", "en").await }
        });
        gateway.wait_started().await;
        assert!(store.is_loading());

        gateway.release();
        task.await.unwrap();
        assert!(!store.is_loading());
        assert!(store.read(|s| s.notifications.is_empty()));
    }

    #[tokio::test]
    async fn test_get_notifications_failure_is_swallowed() {
        let gateway = MockGateway::new();
        gateway.reply_status(403, json!({"success": false}));
        let store = store_with(&gateway);

        store.get_notifications("PSY", "ru").await;

        assert!(store.is_loading());
        assert!(store.read(|s| s.notifications.is_empty()));
    }

    #[tokio::test]
    async fn test_get_notification_returns_data() {
        let gateway = MockGateway::new();
        gateway.reply_ok(json!({"data": {"id": 7, "title": "Hi"}}));
        gateway.reply_transport_error();
        let store = store_with(&gateway);

        let found = store.get_notification("7").await.unwrap();
        assert_eq!(found["title"], "Hi");
        let (endpoint, sent) = gateway.last_request().unwrap();
        assert_eq!(endpoint, endpoints::GET_NOTIFICATION);
        assert_eq!(sent.text("notification_id"), Some("7"));

        assert!(store.get_notification("8").await.is_none());
    }

    #[tokio::test]
    async fn test_mutations_pass_caller_payload_through() {
        let gateway = MockGateway::new();
        gateway.reply_ok(json!({"success": true}));
        gateway.reply_status(400, json!({"success": false, "message": "EMPTY_TEXT"}));
        gateway.reply_ok(json!({"success": true}));
        let store = store_with(&gateway);

        let mut payload = FormPayload::new();
        payload.append_text("title", "Hello");
        assert!(store.add_notification(payload.clone()).await.unwrap().success());

        let response = store.update_notification(payload).await.unwrap();
        assert_eq!(response.message(), Some("EMPTY_TEXT"));

        let mut payload = FormPayload::new();
        payload.append_text("notification_id", "7");
        assert!(store.delete_notification(payload).await.unwrap().success());

        let endpoints: Vec<String> = gateway.requests().into_iter().map(|(e, _)| e).collect();
        assert_eq!(
            endpoints,
            vec![
                endpoints::CREATE_NOTIFICATION,
                endpoints::UPDATE_NOTIFICATION,
                endpoints::DELETE_NOTIFICATION,
            ]
        );
        let (_, sent) = gateway.last_request().unwrap();
        assert_eq!(sent.text("notification_id"), Some("7"));
        assert_eq!(sent.text(SESSION_TOKEN_FIELD), Some("test-token"));
    }
}
