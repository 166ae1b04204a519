//! Parameter structures for list operations.
//!
//! These are plain structs free of any interface framework. The HTTP layer
//! extracts its own form types and converts them into these before calling
//! [`crate::ListFacade`].

use jiff::civil::Date;

/// Identifies a single entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Id {
    pub id: u64,
}

/// Parameters for creating an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateEntry {
    /// Person responsible
    pub owner: String,
    /// What needs doing
    pub task: String,
    /// When it is due
    pub due_date: Date,
}

/// Parameters for overwriting the fields of an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateEntry {
    pub id: u64,
    pub owner: String,
    pub task: String,
    pub due_date: Date,
}

impl From<u64> for Id {
    fn from(id: u64) -> Self {
        Self { id }
    }
}
