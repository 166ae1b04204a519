//! Data models for list entries.
//!
//! [`Entry`] is the in-memory record owned by the store. Its lifecycle is
//! tracked by [`EntryStatus`]; only [`EntryStatus::Active`] entries are visible
//! to read, update and delete. HTML formatting of entries lives in
//! [`crate::display`].

pub mod entry;
pub mod status;


pub use entry::Entry;
pub use status::EntryStatus;
