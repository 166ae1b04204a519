//! File persistence for the entry list.
//!
//! Two kinds of files are written:
//!
//! - the **working file**, overwritten after every mutation and read back at
//!   startup;
//! - **archive files**, written on demand under a name that embeds a UTC
//!   timestamp and never overwritten.
//!
//! All methods are blocking; async callers run them on the blocking pool.

use std::{
    ffi::OsString,
    fs::{self, OpenOptions},
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

use jiff::{tz::TimeZone, Timestamp};
use log::{debug, info, warn};

use crate::{
    error::{IoResultExt, LopError, Result},
    models::Entry,
    serializer::{self, EntryRecord},
};

/// Upper bound on `-<n>` suffixes tried when an archive name is taken.
const MAX_ARCHIVE_SUFFIX: u32 = 1000;

/// Reads and writes the working file and archive snapshots.
#[derive(Debug, Clone)]
pub struct PersistenceGateway {
    working_file: PathBuf,
    archive_prefix: PathBuf,
}

impl PersistenceGateway {
    /// Creates a gateway for the given working file and archive prefix.
    ///
    /// The prefix is used verbatim: `log/lop_` yields archives such as
    /// `log/lop_20240110T093000.123Z.json`.
    pub fn new(working_file: impl Into<PathBuf>, archive_prefix: impl Into<PathBuf>) -> Self {
        Self {
            working_file: working_file.into(),
            archive_prefix: archive_prefix.into(),
        }
    }

    pub fn working_file(&self) -> &Path {
        &self.working_file
    }

    /// Reads the records of the working file.
    ///
    /// A missing, unreadable or corrupt file is treated as a first run and
    /// yields an empty list.
    pub fn load_working(&self) -> Vec<EntryRecord> {
        let path = &self.working_file;
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(
                    "No working file at {}, starting with an empty list",
                    path.display()
                );
                return Vec::new();
            }
            Err(e) => {
                warn!(
                    "Cannot read working file {}: {e}; starting with an empty list",
                    path.display()
                );
                return Vec::new();
            }
        };

        match serializer::decode(&contents) {
            Ok(records) => {
                info!("Loaded {} entries from {}", records.len(), path.display());
                records
            }
            Err(e) => {
                warn!(
                    "Working file {} is not valid: {e}; starting with an empty list",
                    path.display()
                );
                Vec::new()
            }
        }
    }

    /// Overwrites the working file with every entry, whatever its status.
    ///
    /// The data is written to a sibling temporary file first and renamed into
    /// place, so readers never observe a partially written file.
    ///
    /// # Errors
    ///
    /// Returns `LopError::FileSystem` if the directory, temporary file or
    /// rename fails, `LopError::Serialization` if encoding fails.
    pub fn save_working(&self, entries: &[Entry]) -> Result<()> {
        let json = serializer::encode(&serializer::to_durable(entries))?;
        let path = &self.working_file;
        ensure_parent(path)?;

        let tmp = sibling_with_suffix(path, ".tmp");
        fs::write(&tmp, json.as_bytes()).fs_context(&tmp)?;
        fs::rename(&tmp, path).fs_context(path)?;

        debug!("Saved {} entries to {}", entries.len(), path.display());
        Ok(())
    }

    /// Writes a new archive file stamped with `at` and returns its path.
    ///
    /// Existing files are never replaced: when the timestamped name is taken
    /// a `-1`, `-2`, ... suffix is appended.
    ///
    /// # Errors
    ///
    /// Returns `LopError::FileSystem` if the file cannot be created or
    /// written, `LopError::Serialization` if encoding fails.
    pub fn save_archive(&self, entries: &[Entry], at: Timestamp) -> Result<PathBuf> {
        let json = serializer::encode(&serializer::to_durable(entries))?;
        let tag = archive_tag(at);

        let first = self.archive_path(&tag, None);
        ensure_parent(&first)?;

        let (path, file) = self.create_unique(&tag)?;
        write_or_remove(&path, file, json.as_bytes())?;

        info!("Archived {} entries to {}", entries.len(), path.display());
        Ok(path)
    }

    fn create_unique(&self, tag: &str) -> Result<(PathBuf, fs::File)> {
        let mut suffix = None;
        loop {
            let path = self.archive_path(tag, suffix);
            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(file) => return Ok((path, file)),
                Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                    let next = suffix.map_or(1, |n| n + 1);
                    if next > MAX_ARCHIVE_SUFFIX {
                        return Err(LopError::file_system(path, e));
                    }
                    suffix = Some(next);
                }
                Err(e) => return Err(LopError::file_system(path, e)),
            }
        }
    }

    fn archive_path(&self, tag: &str, suffix: Option<u32>) -> PathBuf {
        let mut name: OsString = self.archive_prefix.clone().into_os_string();
        name.push(tag);
        if let Some(n) = suffix {
            name.push(format!("-{n}"));
        }
        name.push(".json");
        PathBuf::from(name)
    }
}

/// ISO-8601 basic-format UTC timestamp with milliseconds, e.g.
/// `20240110T093000.123Z`.
pub fn archive_tag(at: Timestamp) -> String {
    let zoned = at.to_zoned(TimeZone::UTC);
    format!("{}{:03}Z", zoned.strftime("%Y%m%dT%H%M%S."), zoned.millisecond())
}

/// Fills a freshly created file. If the data cannot be written completely the
/// file is removed, so no truncated archive is left behind.
fn write_or_remove(path: &Path, mut file: fs::File, bytes: &[u8]) -> Result<()> {
    let written = file.write_all(bytes).and_then(|()| file.sync_all());
    drop(file);

    written.or_else(|e| {
        if let Err(cleanup) = fs::remove_file(path) {
            warn!("Cannot remove incomplete archive {}: {cleanup}", path.display());
        }
        Err(LopError::file_system(path, e))
    })
}

fn ensure_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).fs_context(parent)
        }
        _ => Ok(()),
    }
}

fn sibling_with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_owned();
    name.push(suffix);
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use tempfile::TempDir;

    use super::*;
    use crate::{models::EntryStatus, store::EntryStore};

    fn gateway(dir: &TempDir) -> PersistenceGateway {
        PersistenceGateway::new(dir.path().join("lop.json"), dir.path().join("archive/lop_"))
    }

    fn sample_store() -> EntryStore {
        let mut store = EntryStore::new();
        store.create("Alice".to_string(), "Fix bug".to_string(), date(2024, 1, 10));
        store.create("Bob".to_string(), "Write docs".to_string(), date(2024, 1, 11));
        store.soft_delete(1).unwrap();
        store
    }

    #[test]
    fn test_archive_tag_format() {
        let ts: Timestamp = "2024-01-10T09:30:00.123456Z".parse().unwrap();
        assert_eq!(archive_tag(ts), "20240110T093000.123Z");
    }

    #[test]
    fn test_missing_working_file_is_empty() {
        let dir = TempDir::new().unwrap();
        assert!(gateway(&dir).load_working().is_empty());
    }

    #[test]
    fn test_corrupt_working_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let gw = gateway(&dir);
        fs::write(gw.working_file(), "{not json").unwrap();
        assert!(gw.load_working().is_empty());
    }

    #[test]
    fn test_working_file_round_trip_keeps_inactive() {
        let dir = TempDir::new().unwrap();
        let gw = gateway(&dir);
        let store = sample_store();

        gw.save_working(store.entries()).unwrap();
        let records = gw.load_working();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].status, EntryStatus::Inactive);
        assert_eq!(records[1].status, EntryStatus::Active);
        assert!(!sibling_with_suffix(gw.working_file(), ".tmp").exists());
    }

    #[test]
    fn test_working_file_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let gw = PersistenceGateway::new(
            dir.path().join("nested/deeper/lop.json"),
            dir.path().join("lop_"),
        );
        gw.save_working(sample_store().entries()).unwrap();
        assert!(gw.working_file().exists());
    }

    #[test]
    fn test_archive_never_overwrites() {
        let dir = TempDir::new().unwrap();
        let gw = gateway(&dir);
        let store = sample_store();
        let at: Timestamp = "2024-01-10T09:30:00Z".parse().unwrap();

        let first = gw.save_archive(store.entries(), at).unwrap();
        let second = gw.save_archive(store.entries(), at).unwrap();

        assert_ne!(first, second);
        assert!(first.ends_with("lop_20240110T093000.000Z.json"));
        assert!(second.ends_with("lop_20240110T093000.000Z-1.json"));

        let contents = fs::read_to_string(&second).unwrap();
        let records = serializer::decode(&contents).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_failed_archive_write_leaves_no_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("lop_20240110T093000.000Z.json");
        fs::write(&path, "").unwrap();

        // Every write to /dev/full fails with ENOSPC
        let full = OpenOptions::new().write(true).open("/dev/full").unwrap();
        let err = write_or_remove(&path, full, b"[]").unwrap_err();

        assert!(matches!(err, LopError::FileSystem { .. }));
        assert!(!path.exists());
    }
}
