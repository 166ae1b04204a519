//! Lifecycle status of an entry.

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of entry statuses.
///
/// The numeric codes are part of the file format and must not change.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(try_from = "u8", into = "u8")]
pub enum EntryStatus {
    /// Not yet activated
    #[default]
    Undefined,

    /// Visible to read, update and delete
    Active,

    /// Soft-deleted
    Inactive,

    /// Reserved for removed entries; no operation produces it
    Deleted,
}

impl EntryStatus {
    /// Numeric code used in the persisted file.
    pub fn code(self) -> u8 {
        match self {
            EntryStatus::Undefined => 0,
            EntryStatus::Active => 1,
            EntryStatus::Inactive => 2,
            EntryStatus::Deleted => 3,
        }
    }

    /// Whether entries in this status are visible to normal operations.
    pub fn is_active(self) -> bool {
        matches!(self, EntryStatus::Active)
    }
}

impl TryFrom<u8> for EntryStatus {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(EntryStatus::Undefined),
            1 => Ok(EntryStatus::Active),
            2 => Ok(EntryStatus::Inactive),
            3 => Ok(EntryStatus::Deleted),
            _ => Err(format!("Invalid entry status code: {code}")),
        }
    }
}

impl From<EntryStatus> for u8 {
    fn from(status: EntryStatus) -> Self {
        status.code()
    }
}
