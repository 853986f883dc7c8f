//! Upload buffer for course and content submits

use admin_api::{ApiResponse, FormPayload, GatewayError, UploadFile};
use std::collections::BTreeMap;

use crate::store::AdminStore;

impl AdminStore {
    /// Buffer `file` to be sent under form field `field` with the next submit
    pub fn load_file(&self, field: impl Into<String>, file: UploadFile) {
        let field = field.into();
        log::debug!("Buffered upload {} for field {}", file.file_name, field);
        self.write_state().loaded_files.insert(field, file);
    }

    pub fn loaded_files(&self) -> BTreeMap<String, UploadFile> {
        self.read(|state| state.loaded_files.clone())
    }

    pub fn clear_loaded_files(&self) {
        self.write_state().loaded_files.clear();
    }

    /// Submit `payload` plus every buffered file, then empty the buffer
    ///
    /// The buffer is emptied whatever the outcome, including when the payload
    /// could not be built.
    pub(crate) async fn submit_with_files(
        &self,
        endpoint: &str,
        payload: Result<FormPayload, GatewayError>,
    ) -> Result<ApiResponse, GatewayError> {
        let result = match payload {
            Ok(mut payload) => {
                for (field, file) in self.loaded_files() {
                    payload.append_file(field, file);
                }
                self.submit_for_body(endpoint, payload).await
            }
            Err(e) => Err(e),
        };
        self.clear_loaded_files();
        result
    }
}
