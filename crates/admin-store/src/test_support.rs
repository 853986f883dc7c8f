//! Scripted gateway for store tests

use admin_api::{FormPayload, GatewayError, HttpGateway, StaticToken};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

use crate::store::AdminStore;

/// Mock gateway for testing
///
/// Replies are consumed in order; once the script runs out every call
/// answers `{"success": true}`. A gated mock parks each call until
/// `release()` so tests can look at the state mid-flight.
#[derive(Clone, Default)]
pub(crate) struct MockGateway {
    replies: Arc<Mutex<VecDeque<Result<Value, GatewayError>>>>,
    requests: Arc<Mutex<Vec<(String, FormPayload)>>>,
    gated: bool,
    started: Arc<Notify>,
    release: Arc<Notify>,
}

impl MockGateway {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn gated() -> Self {
        Self {
            gated: true,
            ..Self::default()
        }
    }

    pub(crate) fn reply_ok(&self, body: Value) {
        self.replies.lock().unwrap().push_back(Ok(body));
    }

    pub(crate) fn reply_status(&self, status: u16, body: Value) {
        self.replies.lock().unwrap().push_back(Err(GatewayError::Status {
            status,
            body: Some(body),
        }));
    }

    pub(crate) fn reply_transport_error(&self) {
        self.replies
            .lock()
            .unwrap()
            .push_back(Err(GatewayError::Transport("connection refused".into())));
    }

    pub(crate) fn requests(&self) -> Vec<(String, FormPayload)> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn last_request(&self) -> Option<(String, FormPayload)> {
        self.requests.lock().unwrap().last().cloned()
    }

    /// Wait until a call has reached the gateway
    pub(crate) async fn wait_started(&self) {
        self.started.notified().await;
    }

    /// Let one parked call finish
    pub(crate) fn release(&self) {
        self.release.notify_one();
    }
}

#[async_trait]
impl HttpGateway for MockGateway {
    async fn post(&self, endpoint: &str, payload: FormPayload) -> Result<Value, GatewayError> {
        self.requests
            .lock()
            .unwrap()
            .push((endpoint.to_string(), payload));
        self.started.notify_one();
        if self.gated {
            self.release.notified().await;
        }
        let reply = self.replies.lock().unwrap().pop_front();
        reply.unwrap_or_else(|| Ok(json!({"success": true})))
    }
}

/// Store wired to `gateway` with the token "test-token"
pub(crate) fn store_with(gateway: &MockGateway) -> AdminStore {
    AdminStore::new(gateway.clone(), StaticToken::new("test-token"))
}
