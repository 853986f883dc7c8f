//! reqwest-based admin API gateway
//!
//! Direct implementation of the `HttpGateway` trait. Payloads are sent as
//! `multipart/form-data`; replies are decoded as JSON.

use crate::error::GatewayError;
use crate::gateway::HttpGateway;
use crate::payload::{FormPayload, FormValue, UploadFile};
use crate::DEFAULT_API_BASE;
use async_trait::async_trait;
use log::debug;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde_json::Value;

/// Direct admin API gateway using reqwest
#[derive(Debug, Clone)]
pub struct ReqwestGateway {
    client: Client,
    base_url: String,
}

impl ReqwestGateway {
    /// Create a gateway for `api_url` (scheme and host) and `api_base` (path prefix)
    pub fn new(api_url: &str, api_base: &str) -> Self {
        Self::with_client(Client::new(), api_url, api_base)
    }

    /// Create a gateway reusing an existing reqwest client
    pub fn with_client(client: Client, api_url: &str, api_base: &str) -> Self {
        Self {
            client,
            base_url: join_base(api_url, api_base),
        }
    }

    /// Base URL every endpoint name is appended to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of `endpoint`
    pub fn url_for(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint.trim_start_matches('/'))
    }
}

#[async_trait]
impl HttpGateway for ReqwestGateway {
    async fn post(&self, endpoint: &str, payload: FormPayload) -> Result<Value, GatewayError> {
        let url = self.url_for(endpoint);
        debug!("POST {} ({} fields)", url, payload.len());

        let form = build_form(payload)?;
        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(format!("Failed to send request: {}", e)))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| GatewayError::Transport(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            debug!("POST {} failed with {}", url, status);
            return Err(GatewayError::Status {
                status: status.as_u16(),
                body: serde_json::from_str(&text).ok(),
            });
        }

        serde_json::from_str(&text).map_err(|e| GatewayError::Decode(e.to_string()))
    }
}

/// Convert a payload to a reqwest multipart form, keeping field order
fn build_form(payload: FormPayload) -> Result<Form, GatewayError> {
    let mut form = Form::new();
    for (name, value) in payload {
        form = match value {
            FormValue::Text(text) => form.text(name, text),
            FormValue::File(file) => form.part(name, file_part(file)?),
        };
    }
    Ok(form)
}

fn file_part(file: UploadFile) -> Result<Part, GatewayError> {
    let part = Part::bytes(file.bytes.to_vec()).file_name(file.file_name);
    match file.mime {
        Some(mime) => part
            .mime_str(&mime)
            .map_err(|e| GatewayError::InvalidPart(format!("mime type {}: {}", mime, e))),
        None => Ok(part),
    }
}

/// Join host and path prefix into a base ending with exactly one slash
fn join_base(api_url: &str, api_base: &str) -> String {
    let api_base = if api_base.is_empty() {
        DEFAULT_API_BASE
    } else {
        api_base
    };
    format!(
        "{}/{}/",
        api_url.trim_end_matches('/'),
        api_base.trim_matches('/')
    )
}
