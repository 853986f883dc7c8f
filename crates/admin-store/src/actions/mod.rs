//! Store actions, one module per resource
//!
//! Two error policies coexist:
//! - Getters log failures and leave state untouched; the caller gets no signal.
//! - Mutators resolve with the server's body whether it reports success or
//!   failure; only a failure without any body comes back as `Err`.

mod account;
mod content;
mod courses;
mod files;
mod notifications;
mod prices;
mod promocodes;
mod subscriptions;
