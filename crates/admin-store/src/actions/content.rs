//! Content page actions

use admin_api::types::decode_keyed;
use admin_api::{endpoints, ApiResponse, Content, ContentList, FormPayload, GatewayError};
use serde_json::Value;

use crate::store::{log_failure, take_data, AdminStore};

impl AdminStore {
    /// Load content pages, filtered by app, language and a single id
    ///
    /// Replaces `content_list` and also hands the pages back.
    pub async fn get_content(
        &self,
        app: Option<&str>,
        lang: Option<&str>,
        content_id: Option<&str>,
    ) -> Option<ContentList> {
        self.set_loading(true);

        let mut payload = FormPayload::new();
        if let Some(app) = app.filter(|app| !app.is_empty()) {
            payload.append_text("app", app);
        }
        if let Some(lang) = lang.filter(|lang| !lang.is_empty()) {
            payload.append_text("lang", lang);
        }
        if let Some(id) = content_id.filter(|id| !id.is_empty()) {
            if let Err(e) = payload.append_json("content_ids", &[id]) {
                log_failure("get_content", &e.into());
                return None;
            }
        }

        match self.fetch_content(payload).await {
            Ok(content) => {
                log::debug!("Loaded {} content pages", content.len());
                let mut state = self.write_state();
                state.content_list = content.clone();
                state.loading = false;
                Some(content)
            }
            Err(e) => {
                log_failure("get_content", &e);
                None
            }
        }
    }

    pub async fn add_content(&self, content: &Content) -> Result<ApiResponse, GatewayError> {
        self.submit_with_files(endpoints::CREATE_CONTENT, content_payload(content)).await
    }

    pub async fn update_content(&self, content: &Content) -> Result<ApiResponse, GatewayError> {
        self.submit_with_files(endpoints::UPDATE_CONTENT, content_payload(content)).await
    }

    pub async fn delete_content(&self, content_ids: &[&str]) -> Result<ApiResponse, GatewayError> {
        let mut payload = FormPayload::new();
        payload.append_json("content_ids", content_ids)?;
        self.submit_for_body(endpoints::DELETE_CONTENT, payload).await
    }

    async fn fetch_content(&self, payload: FormPayload) -> Result<ContentList, GatewayError> {
        let body = self.submit(endpoints::GET_CONTENT, payload).await?;
        decode_keyed(take_data(body)).map_err(|e| GatewayError::Decode(e.to_string()))
    }
}

/// Every field of `content` as its own JSON text field
fn content_payload(content: &Content) -> Result<FormPayload, GatewayError> {
    let mut payload = FormPayload::new();
    if let Value::Object(fields) = serde_json::to_value(content)? {
        for (name, value) in &fields {
            payload.append_json(name.as_str(), value)?;
        }
    }
    Ok(payload)
}
