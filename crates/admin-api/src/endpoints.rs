//! Endpoint names, relative to the API base path

pub const GET_COURSES: &str = "Courses/getCourses";
pub const CREATE_COURSE: &str = "Courses/createCourse";
pub const UPDATE_COURSE: &str = "Courses/updateCourse";
pub const DELETE_COURSES: &str = "Courses/deleteCourses";

pub const GET_PROMOCODES: &str = "Promocodes/getPromocodes";
pub const DELETE_PROMOCODE: &str = "Promocodes/deletePromocode";
pub const CREATE_PROMOCODE: &str = "Promocodes/createPromocode";
pub const UPDATE_PROMOCODE: &str = "Promocodes/updatePromocode";

pub const GET_NOTIFICATIONS: &str = "Notifications/getAdminNotifications";
pub const GET_NOTIFICATION: &str = "Notifications/getAdminNotification";
pub const CREATE_NOTIFICATION: &str = "Notifications/createAdminNotification";
pub const DELETE_NOTIFICATION: &str = "Notifications/deleteAdminNotification";
pub const UPDATE_NOTIFICATION: &str = "Notifications/updateAdminNotification";

pub const SIGN_IN: &str = "signIn";
pub const CHECK_SESSION_TOKEN: &str = "checkSessionToken";
pub const GET_USERS_INFO: &str = "getUsersInfo";

pub const GET_CONTENT: &str = "Content/getContent";
pub const CREATE_CONTENT: &str = "Content/createContent";
pub const UPDATE_CONTENT: &str = "Content/updateContent";
pub const DELETE_CONTENT: &str = "Content/deleteContent";

pub const GET_PRICES: &str = "Prices/getPrices";
pub const UPDATE_PRICE: &str = "Prices/updatePrice";

// The server spells the controller "Subscritions".
pub const GET_ACTIVE_SUBSCRIPTIONS: &str = "Subscritions/getActiveSubscriptions";
pub const GET_SCHEDULE_SUBSCRIPTIONS: &str = "Subscritions/getScheduleSubscriptions";
