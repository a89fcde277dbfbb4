//! File-based byte store.

use crate::backend::ByteStore;
use crate::error::{StorageError, StorageResult};
use crate::options::StoreOptions;
use fs2::FileExt;
use parking_lot::RwLock;
use std::fs::{File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// A byte store backed by a read-write OS file.
///
/// Every edit goes straight to the file; there is no write-back buffer. The
/// length is read from file metadata on each call rather than cached.
///
/// # Exclusive access
///
/// Opening takes an advisory exclusive lock on the file. A second
/// `FileStore` on the same path fails with [`StorageError::Locked`] until the
/// first one is closed or dropped.
///
/// # Example
///
/// ```no_run
/// use hexed_storage::{ByteStore, FileStore, StoreOptions};
/// use std::path::Path;
///
/// let mut store = FileStore::open(Path::new("image.bin"), StoreOptions::default()).unwrap();
/// store.write_byte(0, 0x7F).unwrap();
/// store.close().unwrap();
/// ```
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    file: RwLock<File>,
    options: StoreOptions,
}

impl FileStore {
    /// Opens the file at `path` for read-write random access.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist (and
    /// `create_if_missing` is off), cannot be opened, or is locked.
    pub fn open(path: &Path, options: StoreOptions) -> StorageResult<Self> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(options.create_if_missing)
            .truncate(false)
            .open(path)?;

        file.try_lock_exclusive()
            .map_err(|err| lock_failure(path, err))?;

        debug!(path = %path.display(), len = file.metadata()?.len(), "opened file store");

        Ok(Self {
            path: path.to_path_buf(),
            file: RwLock::new(file),
            options,
        })
    }

    /// Creates (or opens) the file at `path`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if directories cannot be created or the file cannot
    /// be opened or locked.
    pub fn create(path: &Path, options: StoreOptions) -> StorageResult<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Self::open(path, options.create_if_missing(true))
    }

    /// Returns the path to the underlying file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ByteStore for FileStore {
    fn len(&self) -> StorageResult<u64> {
        Ok(self.file.read().metadata()?.len())
    }

    fn read_at(&self, offset: u64, buf: &mut [u8]) -> StorageResult<()> {
        if buf.is_empty() {
            return Ok(());
        }
        let mut file = self.file.write();
        file.seek(SeekFrom::Start(offset))?;
        file.read_exact(buf)?;
        Ok(())
    }

    fn write_at(&mut self, offset: u64, data: &[u8]) -> StorageResult<()> {
        if data.is_empty() {
            return Ok(());
        }
        let mut file = self.file.write();
        file.seek(SeekFrom::Start(offset))?;
        file.write_all(data)?;
        Ok(())
    }

    fn set_len(&mut self, new_len: u64) -> StorageResult<()> {
        self.file.write().set_len(new_len)?;
        Ok(())
    }

    fn flush(&mut self) -> StorageResult<()> {
        self.file.write().flush()?;
        Ok(())
    }

    fn sync(&mut self) -> StorageResult<()> {
        self.file.write().sync_all()?;
        Ok(())
    }

    fn options(&self) -> &StoreOptions {
        &self.options
    }

    fn close(mut self) -> StorageResult<()> {
        self.flush()?;
        let file = self.file.into_inner();
        FileExt::unlock(&file)?;
        debug!(path = %self.path.display(), "closed file store");
        Ok(())
    }
}

/// Contention maps to `Locked`; other failures, such as a filesystem
/// without lock support, keep their I/O cause.
fn lock_failure(path: &Path, err: io::Error) -> StorageError {
    let contended = err.kind() == io::ErrorKind::WouldBlock
        || (err.raw_os_error().is_some()
            && err.raw_os_error() == fs2::lock_contended_error().raw_os_error());
    if contended {
        StorageError::Locked {
            path: path.to_path_buf(),
        }
    } else {
        StorageError::Io(err)
    }
}
