use admin_api::{
    Content, ContentList, Course, CourseDay, CourseDayTask, Courses, Notifications, Promocodes,
    UploadFile, UsersInfo,
};
use std::collections::BTreeMap;

/// Apps managed by the console
pub const APPS: [&str; 2] = ["PSY", "Avocado"];

/// Image extensions the server accepts for uploads
pub const ACCEPTED_IMAGE_EXTENSIONS: [&str; 7] =
    [".jpeg", ".jpg", ".bmp", ".gif", ".png", ".ico", ".webp"];

/// Upload statuses the server reports for rejected images
pub const IMAGE_ERROR_STATUSES: [&str; 2] = ["FILE_SIZE_EXCEEDED", "INVALID_FILE_EXTENSION"];

/// Modal confirmation channel
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PopupState {
    pub text: String,
    pub is_active: bool,
    /// Flipped by the consumer once the user has answered
    pub is_returned: bool,
    pub answer: bool,
}

impl PopupState {
    /// What a waiting caller resolves to
    pub fn resolution(&self) -> bool {
        self.is_returned && self.answer
    }
}

/// The whole console state
#[derive(Debug, Clone)]
pub struct AdminState {
    pub loading: bool,
    pub courses: Courses,
    pub promocodes: Promocodes,
    pub notifications: Notifications,
    pub content_list: ContentList,
    pub common_info: UsersInfo,
    pub popup: PopupState,
    /// Files waiting to be sent with the next course/content submit, by form field
    pub loaded_files: BTreeMap<String, UploadFile>,
    /// "day month H:MM", refreshed every minute once the clock runs
    pub current_time: String,

    pub main_title: String,
    pub default_lang: String,
    pub apps: Vec<String>,
    /// Language code to display name
    pub languages: BTreeMap<String, String>,
    /// Premium filter key to display name
    pub premium_app_types: BTreeMap<String, String>,
    pub accepted_image_extensions: Vec<String>,
    pub image_error_statuses: Vec<String>,

    // Blank records editors start from
    pub default_course: Course,
    pub default_day_item: CourseDay,
    pub default_task_item: CourseDayTask,
    pub default_content: Content,
}

impl Default for AdminState {
    fn default() -> Self {
        Self {
            loading: false,
            courses: Courses::new(),
            promocodes: Promocodes::new(),
            notifications: Notifications::new(),
            content_list: ContentList::new(),
            common_info: UsersInfo::default(),
            popup: PopupState::default(),
            loaded_files: BTreeMap::new(),
            current_time: String::new(),
            main_title: String::new(),
            default_lang: String::new(),
            apps: APPS.iter().map(|app| app.to_string()).collect(),
            languages: string_map(&[("ru", "Русский"), ("en", "Английский")]),
            premium_app_types: string_map(&[
                ("is", "Есть подписка"),
                ("not", "Нет подписки"),
                ("all", "Для всех"),
            ]),
            accepted_image_extensions: ACCEPTED_IMAGE_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            image_error_statuses: IMAGE_ERROR_STATUSES
                .iter()
                .map(|status| status.to_string())
                .collect(),
            default_course: Course::default(),
            default_day_item: CourseDay::default(),
            default_task_item: CourseDayTask::default(),
            default_content: Content::default(),
        }
    }
}

impl AdminState {
    /// Whether `file_name` has an extension the server accepts (case-insensitive)
    pub fn is_accepted_image(&self, file_name: &str) -> bool {
        let Some((_, ext)) = file_name.rsplit_once('.') else {
            return false;
        };
        let ext = format!(".{}", ext.to_lowercase());
        self.accepted_image_extensions.iter().any(|e| *e == ext)
    }

    /// Whether `status` is one of the server's image rejection statuses
    pub fn is_image_error(&self, status: &str) -> bool {
        self.image_error_statuses.iter().any(|s| s == status)
    }
}

fn string_map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalogue() {
        let state = AdminState::default();
        assert_eq!(state.apps, vec!["PSY", "Avocado"]);
        assert_eq!(state.languages["ru"], "Русский");
        assert_eq!(state.premium_app_types["all"], "Для всех");
        assert!(!state.loading);
        assert!(state.loaded_files.is_empty());
        assert_eq!(state.popup, PopupState::default());
    }

    #[test]
    fn test_is_accepted_image() {
        let state = AdminState::default();
        assert!(state.is_accepted_image("cover.png"));
        assert!(state.is_accepted_image("COVER.JPEG"));
        assert!(!state.is_accepted_image("notes.pdf"));
        assert!(!state.is_accepted_image("no-extension"));
    }

    #[test]
    fn test_is_image_error() {
        let state = AdminState::default();
        assert!(state.is_image_error("FILE_SIZE_EXCEEDED"));
        assert!(!state.is_image_error("OK"));
    }

    #[test]
    fn test_popup_resolution() {
        let mut popup = PopupState::default();
        popup.answer = true;
        assert!(!popup.resolution());
        popup.is_returned = true;
        assert!(popup.resolution());
    }
}
