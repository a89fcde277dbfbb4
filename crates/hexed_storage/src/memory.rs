//! In-memory byte store for testing.

use crate::backend::ByteStore;
use crate::error::{StorageError, StorageResult};
use crate::options::StoreOptions;
use parking_lot::RwLock;

/// A byte store held entirely in memory.
///
/// This store is suitable for:
/// - Unit tests
/// - Scratch buffers that are never persisted
///
/// Shifting edits are done with `Vec::splice`/`Vec::drain` instead of block
/// copies; the resulting layout is the same as for [`super::FileStore`].
///
/// # Example
///
/// ```rust
/// use hexed_storage::{ByteStore, InMemoryStore};
///
/// let mut store = InMemoryStore::with_data(b"abc".to_vec());
/// store.write_byte(1, b'x').unwrap();
/// assert_eq!(store.read_all().unwrap(), b"axc");
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStore {
    data: RwLock<Vec<u8>>,
    options: StoreOptions,
}

impl InMemoryStore {
    /// Creates a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store with pre-existing content.
    #[must_use]
    pub fn with_data(data: Vec<u8>) -> Self {
        Self::with_options(data, StoreOptions::default())
    }

    /// Creates a store with pre-existing content and explicit options.
    #[must_use]
    pub fn with_options(data: Vec<u8>, options: StoreOptions) -> Self {
        Self {
            data: RwLock::new(data),
            options,
        }
    }

    /// Returns a copy of the content, ignoring the materialization limit.
    #[must_use]
    pub fn data(&self) -> Vec<u8> {
        self.data.read().clone()
    }
}

impl ByteStore for InMemoryStore {
    fn len(&self) -> StorageResult<u64> {
        Ok(self.data.read().len() as u64)
    }

    fn read_at(&self, offset: u64, buf: &mut [u8]) -> StorageResult<()> {
        let data = self.data.read();
        let start = offset as usize;
        let end = start.saturating_add(buf.len());
        if end > data.len() {
            return Err(StorageError::OutOfRange {
                offset,
                len: data.len() as u64,
            });
        }
        buf.copy_from_slice(&data[start..end]);
        Ok(())
    }

    fn write_at(&mut self, offset: u64, bytes: &[u8]) -> StorageResult<()> {
        let mut data = self.data.write();
        let start = offset as usize;
        let end = start + bytes.len();
        if end > data.len() {
            data.resize(end, 0);
        }
        data[start..end].copy_from_slice(bytes);
        Ok(())
    }

    fn set_len(&mut self, new_len: u64) -> StorageResult<()> {
        self.data.write().resize(new_len as usize, 0);
        Ok(())
    }

    fn flush(&mut self) -> StorageResult<()> {
        // Nothing is buffered
        Ok(())
    }

    fn sync(&mut self) -> StorageResult<()> {
        Ok(())
    }

    fn options(&self) -> &StoreOptions {
        &self.options
    }

    fn insert_bytes(&mut self, offset: u64, bytes: &[u8], overwrite: bool) -> StorageResult<()> {
        let mut data = self.data.write();
        let len = data.len() as u64;
        if bytes.is_empty() || (overwrite && offset >= len) {
            return Ok(());
        }
        let start = offset as usize;

        if overwrite {
            let writable = (data.len() - start).min(bytes.len());
            data[start..start + writable].copy_from_slice(&bytes[..writable]);
            return Ok(());
        }

        if offset > len {
            return Err(StorageError::OutOfRange { offset, len });
        }
        data.splice(start..start, bytes.iter().copied());
        Ok(())
    }

    fn delete_bytes(&mut self, offset: u64, count: u64, shift: bool) -> StorageResult<u64> {
        let mut data = self.data.write();
        let len = data.len() as u64;
        if offset >= len || count == 0 {
            return Ok(0);
        }
        let count = count.min(len - offset);
        let range = offset as usize..(offset + count) as usize;

        if shift {
            data.drain(range);
        } else {
            data[range].fill(0);
        }
        Ok(count)
    }
}
