//! Admin console state store
//!
//! `AdminStore` owns the console state and runs every action against the
//! admin API through an [`admin_api::HttpGateway`].
//!
//! ```text
//! caller ──► AdminStore::get_courses() ──► HttpGateway::post()
//!                 │                               │
//!                 ▼                               ▼
//!           AdminState  ◄──── decoded `data` ─── JSON body
//! ```
//!
//! Getters update the state and log failures. Mutators hand the server's
//! body back to the caller. The confirmation popup and the header clock live
//! on the same handle.
//!
//! # Example
//!
//! ```rust,no_run
//! use admin_api::{ReqwestGateway, StaticToken};
//! use admin_store::AdminStore;
//!
//! # async fn example() {
//! let gateway = ReqwestGateway::new("https://admin.example.com", "/v1/");
//! let store = AdminStore::new(gateway, StaticToken::new("token"));
//!
//! store.get_courses(Some("ru")).await;
//! let titles: Vec<String> = store.read(|state| {
//!     state.courses.values().map(|c| c.about.title.clone()).collect()
//! });
//! # }
//! ```

mod actions;
pub mod clock;
mod popup;
pub mod state;
pub mod store;

#[cfg(test)]
mod test_support;

pub use clock::{format_time, MONTH_NAMES};
pub use state::{AdminState, PopupState, APPS};
pub use store::{AdminStore, SharedState};
