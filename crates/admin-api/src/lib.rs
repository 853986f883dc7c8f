//! Course admin API client
//!
//! This crate provides a trait-based gateway to the admin REST API together
//! with the form payloads it accepts and the records it returns.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │              HttpGateway trait                   │
//! │  - post(endpoint, FormPayload) -> JSON body      │
//! └─────────────────────────────────────────────────┘
//!                        │
//!        ┌───────────────┴───────────────┐
//!        ▼                               ▼
//! ┌─────────────────┐         ┌─────────────────────┐
//! │ ReqwestGateway  │         │ test doubles        │
//! │ (multipart)     │         │ (scripted replies)  │
//! └─────────────────┘         └─────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use admin_api::{endpoints, FormPayload, HttpGateway, ReqwestGateway};
//!
//! # async fn example() -> Result<(), admin_api::GatewayError> {
//! let gateway = ReqwestGateway::new("https://admin.example.com", "/v1/");
//!
//! let mut payload = FormPayload::new();
//! payload.append_text("lang", "ru");
//!
//! let body = gateway.post(endpoints::GET_COURSES, payload).await?;
//! # Ok(())
//! # }
//! ```

pub mod de;
pub mod endpoints;
pub mod error;
pub mod gateway;
pub mod payload;
pub mod reqwest_gateway;
pub mod response;
pub mod session;
pub mod types;

/// Path prefix every endpoint lives under
pub const DEFAULT_API_BASE: &str = "/v1/";

/// Form field carrying the session token
pub const SESSION_TOKEN_FIELD: &str = "session_token";

pub use error::GatewayError;
pub use gateway::HttpGateway;
pub use payload::{FormPayload, FormValue, UploadFile};
pub use reqwest_gateway::ReqwestGateway;
pub use response::{recover_body, ApiResponse};
pub use session::{SessionProvider, StaticToken};
pub use types::{
    Content, ContentList, Course, CourseAbout, CourseDay, CourseDayTask, Courses, Notification,
    Notifications, Promocode, Promocodes, Scalar, UsersInfo,
};
