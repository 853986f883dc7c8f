use admin_api::{
    recover_body, ApiResponse, FormPayload, GatewayError, HttpGateway, SessionProvider,
};
use serde_json::Value;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tokio::sync::watch;

use crate::state::AdminState;

/// State shared between the store handle and its background tasks
pub type SharedState = Arc<RwLock<AdminState>>;

/// AdminStore - holds console state and runs actions against the admin API
///
/// Cloning is cheap; clones share state, gateway and session. Locks are
/// never held across an await point, so concurrent actions interleave and
/// the last response to arrive wins.
#[derive(Clone)]
pub struct AdminStore {
    gateway: Arc<dyn HttpGateway>,
    session: Arc<dyn SessionProvider>,
    pub(crate) state: SharedState,
    /// Mirrors `state.popup.is_returned` so waiters can be woken
    pub(crate) popup_flag: Arc<watch::Sender<bool>>,
}

impl AdminStore {
    pub fn new(
        gateway: impl HttpGateway + 'static,
        session: impl SessionProvider + 'static,
    ) -> Self {
        Self::from_parts(Arc::new(gateway), Arc::new(session))
    }

    pub fn from_parts(gateway: Arc<dyn HttpGateway>, session: Arc<dyn SessionProvider>) -> Self {
        let (popup_flag, _) = watch::channel(false);
        Self {
            gateway,
            session,
            state: Arc::new(RwLock::new(AdminState::default())),
            popup_flag: Arc::new(popup_flag),
        }
    }

    /// Snapshot of the current state
    pub fn state(&self) -> AdminState {
        self.read_state().clone()
    }

    /// Read part of the state without cloning all of it
    pub fn read<R>(&self, f: impl FnOnce(&AdminState) -> R) -> R {
        f(&*self.read_state())
    }

    pub fn is_loading(&self) -> bool {
        self.read(|state| state.loading)
    }

    pub fn set_main_title(&self, title: impl Into<String>) {
        self.write_state().main_title = title.into();
    }

    pub fn set_default_lang(&self, lang: impl Into<String>) {
        self.write_state().default_lang = lang.into();
    }

    pub(crate) fn read_state(&self) -> RwLockReadGuard<'_, AdminState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn write_state(&self) -> RwLockWriteGuard<'_, AdminState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn set_loading(&self, loading: bool) {
        self.write_state().loading = loading;
    }

    /// Copy of `payload` carrying the session token
    pub(crate) fn form_request(&self, payload: &FormPayload) -> FormPayload {
        payload.with_session_token(self.session.session_token().as_deref())
    }

    /// Send an authenticated request
    pub(crate) async fn submit(
        &self,
        endpoint: &str,
        payload: FormPayload,
    ) -> Result<Value, GatewayError> {
        let payload = self.form_request(&payload);
        self.gateway.post(endpoint, payload).await
    }

    /// Send a request without the session token
    pub(crate) async fn submit_anonymous(
        &self,
        endpoint: &str,
        payload: FormPayload,
    ) -> Result<Value, GatewayError> {
        self.gateway.post(endpoint, payload).await
    }

    /// Send an authenticated request and hand back the body, error bodies included
    pub(crate) async fn submit_for_body(
        &self,
        endpoint: &str,
        payload: FormPayload,
    ) -> Result<ApiResponse, GatewayError> {
        recover_body(self.submit(endpoint, payload).await)
    }

    /// Send an authenticated request, answering with `data` on success and
    /// the error body on failure
    pub(crate) async fn submit_for_data(
        &self,
        endpoint: &str,
        payload: FormPayload,
    ) -> Result<Value, GatewayError> {
        match self.submit(endpoint, payload).await {
            Ok(body) => Ok(take_data(body)),
            Err(e) => recover_body(Err(e)).map(ApiResponse::into_inner),
        }
    }
}

/// Log a swallowed failure the way every getter does
pub(crate) fn log_failure(action: &str, err: &GatewayError) {
    log::error!("{}: {}: {}", action, err.name(), err);
}

/// Take the `data` member out of a body
pub(crate) fn take_data(mut body: Value) -> Value {
    body.get_mut("data").map(Value::take).unwrap_or(Value::Null)
}
