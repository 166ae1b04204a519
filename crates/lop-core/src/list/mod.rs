//! High-level list API used by the HTTP layer.
//!
//! [`ListFacade`] is the single entry point for reading and changing the list.
//! It owns the [`EntryStore`] behind an async mutex and the
//! [`PersistenceGateway`] that mirrors the store to disk:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   HTTP routes   │    │   ListFacade    │    │   EntryStore    │
//! │  (lop-server)   │───▶│  (this module)  │───▶│   (in memory)   │
//! └─────────────────┘    └────────┬────────┘    └─────────────────┘
//!                                 │ after every mutation
//!                                 ▼
//!                        ┌─────────────────┐
//!                        │  Persistence    │
//!                        │  (working file) │
//!                        └─────────────────┘
//! ```
//!
//! Each mutating call holds the store lock until its working-file write has
//! finished, so mutations and writes are applied in one global order. A
//! failed working-file write is logged and the call still succeeds: the
//! in-memory list stays authoritative for the running process.
//!
//! # Usage
//!
//! ```rust,no_run
//! use jiff::civil::date;
//! use lop_core::{params::{CreateEntry, Id}, ListFacadeBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let list = ListFacadeBuilder::new()
//!     .with_working_file(Some("log/lop.json"))
//!     .build()
//!     .await?;
//!
//! let rows = list
//!     .create(&CreateEntry {
//!         owner: "Alice".to_string(),
//!         task: "Fix bug".to_string(),
//!         due_date: date(2024, 1, 10),
//!     })
//!     .await?;
//! println!("{rows}");
//!
//! list.delete(&Id { id: 1 }).await?;
//! # Ok(())
//! # }
//! ```

use std::{path::PathBuf, sync::Arc};

use jiff::Timestamp;
use log::{debug, error};
use tokio::{sync::Mutex, task};

use crate::{
    display::ActiveEntries,
    error::{JoinResultExt, LopError, Result},
    models::Entry,
    params::{CreateEntry, Id, UpdateEntry},
    persistence::PersistenceGateway,
    store::EntryStore,
};

pub mod builder;

#[cfg(test)]
mod tests;

pub use builder::ListFacadeBuilder;

/// Operation surface over the entry store and its persistence.
pub struct ListFacade {
    store: Arc<Mutex<EntryStore>>,
    gateway: Arc<PersistenceGateway>,
}

impl ListFacade {
    pub(crate) fn new(store: EntryStore, gateway: PersistenceGateway) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            gateway: Arc::new(gateway),
        }
    }

    /// Persistence settings in use.
    pub fn gateway(&self) -> &PersistenceGateway {
        &self.gateway
    }

    /// Creates an active entry, saves the working file and returns the
    /// active entries including the new one.
    pub async fn create(&self, params: &CreateEntry) -> Result<ActiveEntries> {
        let CreateEntry {
            owner,
            task,
            due_date,
        } = params.clone();

        self.mutate(move |store| {
            let id = store.create(owner, task, due_date);
            debug!("Created entry {id}");
            Ok(active_entries(store))
        })
        .await
    }

    /// Returns all active entries in insertion order.
    pub async fn read_all(&self) -> ActiveEntries {
        let store = self.store.lock().await;
        active_entries(&store)
    }

    /// Returns the active entry with the given ID.
    ///
    /// # Errors
    ///
    /// Returns `LopError::EntryNotFound` if no active entry has that ID.
    pub async fn read_one(&self, params: &Id) -> Result<Entry> {
        let store = self.store.lock().await;
        store
            .find(params.id)
            .cloned()
            .ok_or_else(|| LopError::not_found(params.id))
    }

    /// Overwrites owner, task and due date of an active entry and saves the
    /// working file.
    ///
    /// # Errors
    ///
    /// Returns `LopError::EntryNotFound` if no active entry has that ID. The
    /// working file is left untouched in that case.
    pub async fn update(&self, params: &UpdateEntry) -> Result<Entry> {
        let UpdateEntry {
            id,
            owner,
            task,
            due_date,
        } = params.clone();

        self.mutate(move |store| {
            let updated = store.update(id, owner, task, due_date)?.clone();
            debug!("Updated entry {id}");
            Ok(updated)
        })
        .await
    }

    /// Soft-deletes an active entry and saves the working file.
    ///
    /// # Errors
    ///
    /// Returns `LopError::EntryNotFound` if no active entry has that ID,
    /// including a repeated delete of the same ID.
    pub async fn delete(&self, params: &Id) -> Result<()> {
        let id = params.id;

        self.mutate(move |store| {
            store.soft_delete(id)?;
            debug!("Deactivated entry {id}");
            Ok(())
        })
        .await
    }

    /// Writes the full list, inactive entries included, to a new timestamped
    /// archive file and returns its path.
    ///
    /// # Errors
    ///
    /// Returns `LopError::FileSystem` or `LopError::Serialization` if the
    /// archive cannot be written.
    pub async fn save_snapshot(&self) -> Result<PathBuf> {
        let entries = self.store.lock().await.entries().to_vec();
        let gateway = Arc::clone(&self.gateway);
        let at = Timestamp::now();

        task::spawn_blocking(move || gateway.save_archive(&entries, at))
            .await
            .join_context()?
    }

    /// Applies `op` to the store and, if it succeeds, writes the working file.
    ///
    /// The lock guard moves into a spawned task together with the write. A
    /// caller that is dropped mid-way (a client disconnect) therefore cannot
    /// release the lock before its write has landed.
    async fn mutate<T, F>(&self, op: F) -> Result<T>
    where
        F: FnOnce(&mut EntryStore) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let mut store = Arc::clone(&self.store).lock_owned().await;
        let gateway = Arc::clone(&self.gateway);

        task::spawn(async move {
            let value = op(&mut store)?;
            persist_working(&gateway, &store).await;
            Ok(value)
        })
        .await
        .join_context()?
    }
}

/// Writes the working file. Failures are logged and otherwise ignored.
async fn persist_working(gateway: &Arc<PersistenceGateway>, store: &EntryStore) {
    let entries = store.entries().to_vec();
    let writer = Arc::clone(gateway);

    let outcome = task::spawn_blocking(move || writer.save_working(&entries))
        .await
        .join_context()
        .and_then(|inner| inner);
    if let Err(e) = outcome {
        error!(
            "Failed to save working file {}: {e}",
            gateway.working_file().display()
        );
    }
}

fn active_entries(store: &EntryStore) -> ActiveEntries {
    ActiveEntries(store.list_active().cloned().collect())
}
