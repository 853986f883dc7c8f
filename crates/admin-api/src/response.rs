//! Response bodies as handed back to callers
//!
//! The admin API answers `{ "data": ... }` for queries and
//! `{ "success": bool, ... }` for mutations. Mutating actions resolve with the
//! body whether the call succeeded or not; callers branch on `success()`.

use serde_json::Value;

use crate::error::GatewayError;

/// Raw JSON body of a response, success or failure alike
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse(Value);

impl ApiResponse {
    pub fn new(body: Value) -> Self {
        Self(body)
    }

    /// The `success` flag; absent means false
    pub fn success(&self) -> bool {
        self.0
            .get("success")
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// The `data` member, if any
    pub fn data(&self) -> Option<&Value> {
        self.0.get("data")
    }

    /// The `message` member, if it is a string
    pub fn message(&self) -> Option<&str> {
        self.0.get("message").and_then(Value::as_str)
    }

    pub fn body(&self) -> &Value {
        &self.0
    }

    pub fn into_inner(self) -> Value {
        self.0
    }
}

impl From<Value> for ApiResponse {
    fn from(body: Value) -> Self {
        Self(body)
    }
}

/// Turn an error status with a body into an ordinary response
///
/// Errors without a server body (transport failures) are kept.
pub fn recover_body(result: Result<Value, GatewayError>) -> Result<ApiResponse, GatewayError> {
    match result {
        Ok(body) => Ok(ApiResponse(body)),
        Err(GatewayError::Status {
            body: Some(body), ..
        }) => Ok(ApiResponse(body)),
        Err(e) => Err(e),
    }
}
