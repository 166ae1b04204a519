//! Plain-text confirmations returned by mutating operations.

use std::fmt;

/// Confirmation message for a completed operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acknowledgement {
    /// An entry was updated
    Changed { id: u64 },
    /// An entry was soft-deleted
    Deleted { id: u64 },
    /// An archive snapshot was written
    Saved,
}

impl fmt::Display for Acknowledgement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Acknowledgement::Changed { id } => write!(f, "Item {id} changed"),
            Acknowledgement::Deleted { id } => write!(f, "Item {id} deleted"),
            Acknowledgement::Saved => write!(f, "LoP saved"),
        }
    }
}
