//! Builder for creating and configuring ListFacade instances.

use std::path::{Path, PathBuf};

use log::info;
use tokio::task;

use super::ListFacade;
use crate::{
    error::{JoinResultExt, LopError, Result},
    persistence::PersistenceGateway,
    store::EntryStore,
};

/// File name of the working file inside the XDG data directory.
const DEFAULT_WORKING_FILE: &str = "lop.json";
/// Archive prefix used next to the working file when none is configured.
const DEFAULT_ARCHIVE_PREFIX: &str = "lop_";

/// Builder for creating and configuring ListFacade instances.
#[derive(Debug, Clone, Default)]
pub struct ListFacadeBuilder {
    working_file: Option<PathBuf>,
    archive_prefix: Option<PathBuf>,
}

impl ListFacadeBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom working file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/lop/lop.json` or `~/.local/share/lop/lop.json`
    pub fn with_working_file<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.working_file = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the prefix for archive file names.
    ///
    /// If not specified, archives go next to the working file as
    /// `lop_<timestamp>.json`.
    pub fn with_archive_prefix<P: AsRef<Path>>(mut self, prefix: Option<P>) -> Self {
        if let Some(prefix) = prefix {
            self.archive_prefix = Some(prefix.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the facade and loads the working file into the store.
    ///
    /// The returned facade is fully initialized; nothing can observe a
    /// partially loaded list.
    ///
    /// # Errors
    ///
    /// Returns `LopError::XdgDirectory` if the default data directory cannot
    /// be resolved. A missing or corrupt working file is not an error.
    pub async fn build(self) -> Result<ListFacade> {
        let working_file = match self.working_file {
            Some(path) => path,
            None => Self::default_working_file()?,
        };
        let archive_prefix = self
            .archive_prefix
            .unwrap_or_else(|| default_archive_prefix(&working_file));

        let gateway = PersistenceGateway::new(working_file, archive_prefix);

        let loader = gateway.clone();
        let records = task::spawn_blocking(move || loader.load_working())
            .await
            .join_context()?;

        let mut store = EntryStore::new();
        store.restore(records);
        info!(
            "List ready with {} entries ({} active)",
            store.len(),
            store.list_active().count()
        );

        Ok(ListFacade::new(store, gateway))
    }

    /// Returns the default working file path following XDG Base Directory
    /// specification.
    fn default_working_file() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("lop")
            .place_data_file(DEFAULT_WORKING_FILE)
            .map_err(|e| LopError::XdgDirectory(e.to_string()))
    }
}

fn default_archive_prefix(working_file: &Path) -> PathBuf {
    match working_file.parent() {
        Some(dir) => dir.join(DEFAULT_ARCHIVE_PREFIX),
        None => PathBuf::from(DEFAULT_ARCHIVE_PREFIX),
    }
}
