//! HTTP front end for the LoP list of open points.
//!
//! The router in [`routes`] translates URL-encoded form posts into
//! [`lop_core::ListFacade`] calls and answers with the HTML fragments and
//! plain-text messages the browser client expects.

pub mod forms;
pub mod routes;
pub mod state;

pub use routes::{router, ApiError};
pub use state::{AppState, SERVER_NAME};
