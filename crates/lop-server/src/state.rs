//! Shared state handed to every request handler.

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use lop_core::ListFacade;

/// Server name reported by `/version` and the 404 page.
pub const SERVER_NAME: &str = concat!("LoP ", env!("CARGO_PKG_VERSION"));

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub list: Arc<ListFacade>,
    requests: Arc<AtomicU64>,
}

impl AppState {
    /// Wraps a fully loaded list.
    pub fn new(list: ListFacade) -> Self {
        Self {
            list: Arc::new(list),
            requests: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Counts a handled request and returns its sequence number.
    pub fn next_request(&self) -> u64 {
        self.requests.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Number of requests counted so far.
    pub fn request_count(&self) -> u64 {
        self.requests.load(Ordering::Relaxed)
    }
}
