//! Gateway trait definition
//!
//! This module defines the `HttpGateway` trait every transport implementation
//! must satisfy.

use crate::error::GatewayError;
use crate::payload::FormPayload;
use async_trait::async_trait;
use serde_json::Value;

/// Admin API gateway trait
///
/// Accepts a relative endpoint name and a form payload, and returns the
/// parsed JSON response body.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so a single gateway can be shared
/// between the store and its background tasks.
///
/// # Example
///
/// ```rust,ignore
/// use admin_api::{endpoints, FormPayload, HttpGateway};
///
/// async fn ping(gateway: &dyn HttpGateway) -> Result<serde_json::Value, admin_api::GatewayError> {
///     gateway.post(endpoints::CHECK_SESSION_TOKEN, FormPayload::new()).await
/// }
/// ```
#[async_trait]
pub trait HttpGateway: Send + Sync {
    /// POST `payload` to `endpoint`
    ///
    /// # Returns
    ///
    /// The decoded response body on a success status. A non-success status
    /// yields `GatewayError::Status` carrying the body when the server sent
    /// JSON.
    async fn post(&self, endpoint: &str, payload: FormPayload) -> Result<Value, GatewayError>;
}
