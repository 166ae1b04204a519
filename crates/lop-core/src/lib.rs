//! Core library for LoP, a list of open points.
//!
//! This crate keeps the list of open items in memory, mirrors it to a JSON
//! working file after every change and writes timestamped archive snapshots
//! on demand.
//!
//! # Architecture
//!
//! - [`store`]: the [`EntryStore`] assigning IDs and tracking each entry's
//!   lifecycle status
//! - [`serializer`]: conversion to and from the durable JSON records
//! - [`persistence`]: the [`PersistenceGateway`] for the working file and
//!   archives
//! - [`list`]: the [`ListFacade`] the HTTP layer calls
//! - [`display`]: HTML fragments and acknowledgement messages
//!
//! Entries are never removed. Deleting an entry makes it inactive, which hides
//! it from every read, update and delete while it stays in the saved file.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use jiff::civil::date;
//! use lop_core::{params::CreateEntry, ListFacadeBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let list = ListFacadeBuilder::new()
//!     .with_working_file(Some("lop.json"))
//!     .build()
//!     .await?;
//!
//! list.create(&CreateEntry {
//!     owner: "Alice".to_string(),
//!     task: "Fix bug".to_string(),
//!     due_date: date(2024, 1, 10),
//! })
//! .await?;
//!
//! for entry in &list.read_all().await {
//!     println!("{}: {} ({})", entry.owner(), entry.task(), entry.due_date());
//! }
//! # Ok(())
//! # }
//! ```

pub mod display;
pub mod error;
pub mod list;
pub mod models;
pub mod params;
pub mod persistence;
pub mod serializer;
pub mod store;

// Re-export commonly used types
pub use display::{Acknowledgement, ActiveEntries, EditRow};
pub use error::{LopError, Result};
pub use list::{ListFacade, ListFacadeBuilder};
pub use models::{Entry, EntryStatus};
pub use params::{CreateEntry, Id, UpdateEntry};
pub use persistence::PersistenceGateway;
pub use serializer::{parse_date, EntryRecord};
pub use store::EntryStore;
