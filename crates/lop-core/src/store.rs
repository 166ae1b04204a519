//! In-memory entry store.
//!
//! The store owns every [`Entry`] ever created in the process. Entries are
//! never removed: deletion flips the status to [`EntryStatus::Inactive`], which
//! hides the entry from lookups while keeping it in the persisted list.

use jiff::civil::Date;

use crate::{
    error::{LopError, Result},
    models::{Entry, EntryStatus},
    serializer::EntryRecord,
};

/// Ordered collection of entries with monotonic identity assignment.
#[derive(Debug, Clone)]
pub struct EntryStore {
    entries: Vec<Entry>,
    next_id: u64,
}

impl EntryStore {
    /// Creates an empty store. The first created entry gets ID 1.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    /// Appends a new active entry and returns its ID.
    pub fn create(&mut self, owner: String, task: String, due_date: Date) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            owner,
            task,
            due_date,
            status: EntryStatus::Active,
        });
        id
    }

    /// Looks up an active entry by ID.
    ///
    /// Unknown IDs and IDs of inactive entries both yield `None`.
    pub fn find(&self, id: u64) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id && e.is_active())
    }

    fn find_mut(&mut self, id: u64) -> Result<&mut Entry> {
        self.entries
            .iter_mut()
            .find(|e| e.id == id && e.is_active())
            .ok_or_else(|| LopError::not_found(id))
    }

    /// Overwrites owner, task and due date of an active entry. The status is
    /// left untouched.
    pub fn update(
        &mut self,
        id: u64,
        owner: String,
        task: String,
        due_date: Date,
    ) -> Result<&Entry> {
        let entry = self.find_mut(id)?;
        entry.owner = owner;
        entry.task = task;
        entry.due_date = due_date;
        Ok(entry)
    }

    /// Deactivates an active entry. Deleting the same ID again is not-found.
    pub fn soft_delete(&mut self, id: u64) -> Result<()> {
        let entry = self.find_mut(id)?;
        entry.status = EntryStatus::Inactive;
        Ok(())
    }

    /// Active entries in insertion order.
    pub fn list_active(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(|e| e.is_active())
    }

    /// Every entry regardless of status, in insertion order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rebuilds entries from persisted records.
    ///
    /// Each record is replayed through [`EntryStore::create`], so IDs are
    /// assigned densely in file order, and the persisted status is applied
    /// afterwards.
    pub fn restore<I>(&mut self, records: I)
    where
        I: IntoIterator<Item = EntryRecord>,
    {
        for record in records {
            let id = self.create(record.owner, record.task, record.date);
            if let Some(entry) = self.entries.last_mut() {
                debug_assert_eq!(entry.id, id);
                entry.status = record.status;
            }
        }
    }
}

impl Default for EntryStore {
    fn default() -> Self {
        Self::new()
    }
}
