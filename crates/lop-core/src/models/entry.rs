//! Entry model definition.

use jiff::civil::Date;

use super::EntryStatus;

/// One open point in the list.
///
/// Entries are only constructed by [`crate::store::EntryStore`], which owns
/// identity assignment. The fields are readable everywhere but the struct
/// cannot be built or mutated outside the crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Unique identifier, assigned once and never reused
    pub(crate) id: u64,

    /// Person responsible for the item
    pub(crate) owner: String,

    /// Description of the work
    pub(crate) task: String,

    /// Calendar date the item is due
    pub(crate) due_date: Date,

    /// Lifecycle status
    pub(crate) status: EntryStatus,
}

impl Entry {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn task(&self) -> &str {
        &self.task
    }

    pub fn due_date(&self) -> Date {
        self.due_date
    }

    pub fn status(&self) -> EntryStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }
}
