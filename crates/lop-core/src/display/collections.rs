//! Table body rendering for the active entries.

use std::{fmt, ops::Index};

use super::Escaped;
use crate::models::Entry;

/// Newtype wrapper over the active entries, in insertion order.
///
/// Displays as the `<tbody>` content of the list table: one row per entry
/// with owner, task and due date cells. An empty list renders as an empty
/// string.
///
/// # Examples
///
/// ```rust
/// use jiff::civil::date;
/// use lop_core::{display::ActiveEntries, EntryStore};
///
/// let mut store = EntryStore::new();
/// store.create("Alice".to_string(), "Fix bug".to_string(), date(2024, 1, 10));
///
/// let rows = ActiveEntries(store.list_active().cloned().collect());
/// let html = rows.to_string();
/// assert!(html.starts_with("<tr class='b-dot-line' data-lop-id='1'>"));
/// assert!(html.contains(">2024-01-10</td>"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveEntries(pub Vec<Entry>);

impl ActiveEntries {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl Index<usize> for ActiveEntries {
    type Output = Entry;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a ActiveEntries {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ActiveEntries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in self {
            let id = entry.id;
            write!(f, "<tr class='b-dot-line' data-lop-id='{id}'>")?;
            write!(
                f,
                "<td class='click-value' data-purpose='besitzer' data-lop-id='{id}'>{}</td>",
                Escaped(&entry.owner)
            )?;
            write!(
                f,
                "<td class='click-value as-width-100pc' data-purpose='aufgabe' data-lop-id='{id}'>{}</td>",
                Escaped(&entry.task)
            )?;
            write!(
                f,
                "<td class='click-value' data-purpose='datum' data-lop-id='{id}'>{}</td>",
                entry.due_date
            )?;
            write!(f, "</tr>")?;
        }
        Ok(())
    }
}
