//! Sign-in, session check and dashboard counters

use admin_api::types::decode_data;
use admin_api::{endpoints, recover_body, ApiResponse, FormPayload, GatewayError, UsersInfo};

use crate::store::{log_failure, take_data, AdminStore};

impl AdminStore {
    /// Exchange credentials for a session token
    ///
    /// Sent without a session token. Storing the returned token is up to the
    /// caller.
    pub async fn sign_in(&self, credentials: FormPayload) -> Result<ApiResponse, GatewayError> {
        recover_body(self.submit_anonymous(endpoints::SIGN_IN, credentials).await)
    }

    /// Ask the server whether the current token is still valid
    pub async fn check_session_token(&self) -> Result<ApiResponse, GatewayError> {
        self.submit_for_body(endpoints::CHECK_SESSION_TOKEN, FormPayload::new()).await
    }

    /// Refresh the dashboard counters, narrowed by `filters`
    pub async fn get_users_data(&self, filters: &[(&str, &str)]) {
        let payload: FormPayload = filters.iter().copied().collect();

        match self.fetch_users_info(payload).await {
            Ok(info) => self.write_state().common_info = info,
            Err(e) => log_failure("get_users_data", &e),
        }
    }

    async fn fetch_users_info(&self, payload: FormPayload) -> Result<UsersInfo, GatewayError> {
        let body = self.submit(endpoints::GET_USERS_INFO, payload).await?;
        decode_data(take_data(body)).map_err(|e| GatewayError::Decode(e.to_string()))
    }
}
