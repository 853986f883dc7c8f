//! Course actions

use admin_api::types::decode_keyed;
use admin_api::{endpoints, ApiResponse, Course, Courses, FormPayload, GatewayError};

use crate::store::{log_failure, take_data, AdminStore};

impl AdminStore {
    /// Load all courses, optionally only those in `lang`
    pub async fn get_courses(&self, lang: Option<&str>) {
        self.set_loading(true);

        let mut payload = FormPayload::new();
        if let Some(lang) = lang.filter(|lang| !lang.is_empty()) {
            payload.append_text("lang", lang);
        }

        match self.fetch_courses(payload).await {
            Ok(courses) => {
                log::debug!("Loaded {} courses", courses.len());
                let mut state = self.write_state();
                state.courses = courses;
                state.loading = false;
            }
            Err(e) => log_failure("get_courses", &e),
        }
    }

    /// Load a single course without touching `courses`
    pub async fn get_course(&self, course_id: &str) -> Option<Courses> {
        self.set_loading(true);

        let mut payload = FormPayload::new();
        if let Err(e) = payload.append_json("courses_ids", &[course_id]) {
            log_failure("get_course", &e.into());
            return None;
        }

        match self.fetch_courses(payload).await {
            Ok(courses) => {
                self.set_loading(false);
                Some(courses)
            }
            Err(e) => {
                log_failure("get_course", &e);
                None
            }
        }
    }

    pub async fn add_course(&self, course: &Course) -> Result<ApiResponse, GatewayError> {
        let payload = course_payload(course, false);
        self.submit_with_files(endpoints::CREATE_COURSE, payload).await
    }

    pub async fn update_course(&self, course: &Course) -> Result<ApiResponse, GatewayError> {
        let payload = course_payload(course, true);
        self.submit_with_files(endpoints::UPDATE_COURSE, payload).await
    }

    /// Publish or unpublish a course
    pub async fn update_course_production(
        &self,
        course_id: &str,
        production: bool,
    ) -> Result<ApiResponse, GatewayError> {
        let mut payload = FormPayload::new();
        payload.append_text("course_id", course_id);
        payload.append_text("production", if production { "1" } else { "0" });
        self.submit_for_body(endpoints::UPDATE_COURSE, payload).await
    }

    /// Delete courses by id; `courses` is left as is until the next fetch
    pub async fn delete_course(&self, course_ids: &[&str]) -> Result<ApiResponse, GatewayError> {
        let mut payload = FormPayload::new();
        payload.append_json("courses_ids", course_ids)?;
        self.submit_for_body(endpoints::DELETE_COURSES, payload).await
    }

    async fn fetch_courses(&self, payload: FormPayload) -> Result<Courses, GatewayError> {
        let body = self.submit(endpoints::GET_COURSES, payload).await?;
        decode_keyed(take_data(body)).map_err(|e| GatewayError::Decode(e.to_string()))
    }
}

fn course_payload(course: &Course, with_id: bool) -> Result<FormPayload, GatewayError> {
    let mut payload = FormPayload::new();
    if with_id {
        payload.append_text("course_id", course.id.as_str());
    }
    payload.append_json("about", &course.about)?;
    payload.append_json("days", &course.days)?;
    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{store_with, MockGateway};
    use admin_api::UploadFile;
    use serde_json::json;

    fn sample_course() -> Course {
        let mut course = Course::default();
        course.id = "12".to_string();
        course.about.title = "Sleep well".to_string();
        course
    }

    #[tokio::test]
    async fn test_get_courses_replaces_state() {
        let gateway = MockGateway::new();
        gateway.reply_ok(json!({"data": {"1": {"id": 1, "about": {"title": "A"}}}}));
        let store = store_with(&gateway);

        store.get_courses(Some("ru")).await;

        let state = store.state();
        assert!(!state.loading);
        assert_eq!(state.courses["1"].about.title, "A");
        let (endpoint, sent) = gateway.last_request().unwrap();
        assert_eq!(endpoint, endpoints::GET_COURSES);
        assert_eq!(sent.text("lang"), Some("ru"));
    }

    #[tokio::test]
    async fn test_get_courses_accepts_lists() {
        let gateway = MockGateway::new();
        gateway.reply_ok(json!({"data": {"1": {"id": 1, "days": [{"title": "d0"}]}}}));
        gateway.reply_ok(json!({"data": [{"id": 1}, {"id": 2}]}));
        let store = store_with(&gateway);

        store.get_courses(None).await;
        let state = store.state();
        assert!(!state.loading);
        assert_eq!(state.courses["1"].days["0"].title, "d0");

        store.get_courses(None).await;
        let state = store.state();
        assert!(!state.loading);
        assert_eq!(state.courses.len(), 2);
        assert_eq!(state.courses["1"].id, "2");
    }

    #[tokio::test]
    async fn test_update_course_sends_back_fetched_json() {
        let about = json!({
            "id": 12,
            "title": "Sleep well",
            "lang": "ru",
            "period": "",
            "description": "",
            "for_whom": "",
            "results": "",
            "image": "",
            "price": 990,
            "category": "",
            "author": "A. B."
        });
        let days = json!({
            "1": {"id": 5, "title": "Day one", "description": "", "tasks": {}, "audio": "1.mp3"}
        });
        let gateway = MockGateway::new();
        gateway.reply_ok(json!({
            "data": {"12": {"id": 12, "about": about.clone(), "days": days.clone()}}
        }));
        let store = store_with(&gateway);

        let course = store.get_course("12").await.unwrap().remove("12").unwrap();
        store.update_course(&course).await.unwrap();

        let (_, sent) = gateway.last_request().unwrap();
        assert_eq!(sent.text("course_id"), Some("12"));
        let sent_json = |name: &str| -> serde_json::Value {
            serde_json::from_str(sent.text(name).unwrap()).unwrap()
        };
        assert_eq!(sent_json("about"), about);
        assert_eq!(sent_json("days"), days);
    }

    #[tokio::test]
    async fn test_get_courses_without_lang_sends_only_token() {
        let gateway = MockGateway::new();
        gateway.reply_ok(json!({"data": []}));
        let store = store_with(&gateway);

        store.get_courses(None).await;

        let (_, sent) = gateway.last_request().unwrap();
        assert_eq!(sent.len(), 1);
        assert!(store.read(|s| s.courses.is_empty()));
    }

    #[tokio::test]
    async fn test_get_courses_loading_while_in_flight() {
        let gateway = MockGateway::gated();
        gateway.reply_ok(json!({"data": {}}));
        let store = store_with(&gateway);

        let task = tokio::spawn({
            let store = store.clone();
            async move { store.get_courses(None).await }
        });
        gateway.wait_started().await;
        assert!(store.is_loading());

        gateway.release();
        task.await.unwrap();
        assert!(!store.is_loading());
    }

    #[tokio::test]
    async fn test_get_courses_failure_keeps_loading_and_state() {
        let gateway = MockGateway::new();
        gateway.reply_ok(json!({"data": {"1": {"id": 1}}}));
        gateway.reply_transport_error();
        let store = store_with(&gateway);

        store.get_courses(None).await;
        store.get_courses(None).await;

        assert!(store.is_loading());
        assert_eq!(store.read(|s| s.courses.len()), 1);
    }

    #[tokio::test]
    async fn test_get_course_returns_data_only() {
        let gateway = MockGateway::new();
        gateway.reply_ok(json!({"data": {"12": {"id": 12}}}));
        let store = store_with(&gateway);

        let courses = store.get_course("12").await.unwrap();
        assert!(courses.contains_key("12"));
        assert!(store.read(|s| s.courses.is_empty()));
        assert!(!store.is_loading());

        let (_, sent) = gateway.last_request().unwrap();
        assert_eq!(sent.text("courses_ids"), Some(r#"["12"]"#));
    }

    #[tokio::test]
    async fn test_add_course_sends_json_and_clears_files() {
        let gateway = MockGateway::new();
        let store = store_with(&gateway);
        store.load_file("image", UploadFile::new("cover.png", vec![9u8]));

        let response = store.add_course(&sample_course()).await.unwrap();
        assert!(response.success());

        let (endpoint, sent) = gateway.last_request().unwrap();
        assert_eq!(endpoint, endpoints::CREATE_COURSE);
        assert!(!sent.contains("course_id"));
        let about: serde_json::Value = serde_json::from_str(sent.text("about").unwrap()).unwrap();
        assert_eq!(about["title"], "Sleep well");
        assert_eq!(sent.text("days"), Some("{}"));
        assert!(sent.get("image").is_some());
        assert!(store.loaded_files().is_empty());
    }

    #[tokio::test]
    async fn test_update_course_failure_returns_body_and_clears_files() {
        let gateway = MockGateway::new();
        gateway.reply_status(422, json!({"success": false, "message": "INVALID_FILE_EXTENSION"}));
        let store = store_with(&gateway);
        store.load_file("image", UploadFile::new("cover.tiff", vec![9u8]));

        let response = store.update_course(&sample_course()).await.unwrap();
        assert!(!response.success());
        assert_eq!(response.message(), Some("INVALID_FILE_EXTENSION"));
        assert!(store.loaded_files().is_empty());

        let (_, sent) = gateway.last_request().unwrap();
        assert_eq!(sent.text("course_id"), Some("12"));
    }

    #[tokio::test]
    async fn test_update_course_transport_error_still_clears_files() {
        let gateway = MockGateway::new();
        gateway.reply_transport_error();
        let store = store_with(&gateway);
        store.load_file("image", UploadFile::new("cover.png", vec![9u8]));

        assert!(store.update_course(&sample_course()).await.is_err());
        assert!(store.loaded_files().is_empty());
    }

    #[tokio::test]
    async fn test_update_course_production_flag() {
        let gateway = MockGateway::new();
        let store = store_with(&gateway);

        store.update_course_production("12", true).await.unwrap();
        let (endpoint, sent) = gateway.last_request().unwrap();
        assert_eq!(endpoint, endpoints::UPDATE_COURSE);
        assert_eq!(sent.text("production"), Some("1"));

        store.update_course_production("12", false).await.unwrap();
        let (_, sent) = gateway.last_request().unwrap();
        assert_eq!(sent.text("production"), Some("0"));
    }

    #[tokio::test]
    async fn test_delete_course_keeps_local_state() {
        let gateway = MockGateway::new();
        gateway.reply_ok(json!({"data": {"1": {"id": 1}, "2": {"id": 2}}}));
        let store = store_with(&gateway);
        store.get_courses(None).await;

        let response = store.delete_course(&["1", "2"]).await.unwrap();
        assert!(response.success());
        assert_eq!(store.read(|s| s.courses.len()), 2);

        let (endpoint, sent) = gateway.last_request().unwrap();
        assert_eq!(endpoint, endpoints::DELETE_COURSES);
        assert_eq!(sent.text("courses_ids"), Some(r#"["1","2"]"#));
    }
}
