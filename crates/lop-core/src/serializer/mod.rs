//! Conversion between entries and their durable JSON representation.
//!
//! The persisted form is a JSON array of [`EntryRecord`] objects in creation
//! order. Entry IDs are not stored: loading replays every record through
//! [`crate::store::EntryStore::restore`], which hands out fresh IDs in file
//! order.
//!
//! ```rust
//! use jiff::civil::date;
//! use lop_core::{serializer, EntryStore};
//!
//! let mut store = EntryStore::new();
//! store.create("Alice".to_string(), "Fix bug".to_string(), date(2024, 1, 10));
//!
//! let json = serializer::encode(&serializer::to_durable(store.entries())).unwrap();
//! assert_eq!(
//!     json,
//!     r#"[{"owner":"Alice","task":"Fix bug","date":"2024-01-10T00:00:00.000Z","status":1}]"#
//! );
//! ```

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    models::{Entry, EntryStatus},
};

pub mod date;

pub use date::{format_date, parse_date};

/// Plain-data form of an entry as written to disk.
///
/// Field names of files written by the earlier German-language server
/// (`besitzer`, `aufgabe`, `datum`) are accepted when reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryRecord {
    #[serde(alias = "besitzer")]
    pub owner: String,

    #[serde(alias = "aufgabe")]
    pub task: String,

    #[serde(alias = "datum", with = "date")]
    pub date: Date,

    #[serde(default)]
    pub status: EntryStatus,
}

impl From<&Entry> for EntryRecord {
    fn from(entry: &Entry) -> Self {
        Self {
            owner: entry.owner.clone(),
            task: entry.task.clone(),
            date: entry.due_date,
            status: entry.status,
        }
    }
}

/// Converts every entry, whatever its status, to a durable record.
pub fn to_durable(entries: &[Entry]) -> Vec<EntryRecord> {
    entries.iter().map(EntryRecord::from).collect()
}

/// Renders records as a compact JSON array.
pub fn encode(records: &[EntryRecord]) -> Result<String> {
    Ok(serde_json::to_string(records)?)
}

/// Parses a JSON array of records. Blank input is an empty list.
pub fn decode(json: &str) -> Result<Vec<EntryRecord>> {
    if json.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_str(json)?)
}
