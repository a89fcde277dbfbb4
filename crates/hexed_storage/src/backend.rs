//! Byte store trait definition.

use crate::error::{StorageError, StorageResult};
use crate::options::StoreOptions;
use tracing::debug;

/// A random-access byte document.
///
/// Implementors provide a handful of positional primitives; the editing
/// operations (strict reads, lenient previews, shifting insert and delete)
/// are built on top of them and behave identically for every store.
///
/// # Invariants
///
/// - The length only grows through a non-overwrite [`insert_bytes`] and only
///   shrinks through a shifting [`delete_bytes`]
/// - Strict operations reject offsets outside `[0, len)` with
///   [`StorageError::OutOfRange`]
/// - Stores must be `Send + Sync`; callers still serialize mutation
///
/// # Implementors
///
/// - [`super::FileStore`] - For persistent documents
/// - [`super::InMemoryStore`] - For testing
///
/// [`insert_bytes`]: ByteStore::insert_bytes
/// [`delete_bytes`]: ByteStore::delete_bytes
pub trait ByteStore: Send + Sync {
    /// Returns the current length in bytes, queried from the storage itself.
    ///
    /// # Errors
    ///
    /// Returns an error if the length cannot be determined.
    fn len(&self) -> StorageResult<u64>;

    /// Fills `buf` with the bytes starting at `offset`.
    ///
    /// This is an unchecked primitive: the whole range must lie inside the
    /// store. Prefer [`ByteStore::read_block`] or [`ByteStore::read_byte`].
    ///
    /// # Errors
    ///
    /// Returns an error if an I/O error occurs or the range is short.
    fn read_at(&self, offset: u64, buf: &mut [u8]) -> StorageResult<()>;

    /// Writes `data` starting at `offset`, extending the store if the write
    /// runs past the end.
    ///
    /// This is an unchecked primitive used by the editing operations.
    ///
    /// # Errors
    ///
    /// Returns an error if an I/O error occurs.
    fn write_at(&mut self, offset: u64, data: &[u8]) -> StorageResult<()>;

    /// Resizes the store, zero-extending or truncating.
    ///
    /// # Errors
    ///
    /// Returns an error if the resize fails.
    fn set_len(&mut self, new_len: u64) -> StorageResult<()>;

    /// Flushes pending writes to the operating system.
    ///
    /// # Errors
    ///
    /// Returns an error if the flush fails.
    fn flush(&mut self) -> StorageResult<()>;

    /// Syncs data and metadata to durable storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the sync fails.
    fn sync(&mut self) -> StorageResult<()>;

    /// Returns the options this store was opened with.
    fn options(&self) -> &StoreOptions;

    /// Returns `true` if the store holds no bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the length cannot be determined.
    fn is_empty(&self) -> StorageResult<bool> {
        Ok(self.len()? == 0)
    }

    /// Reads the byte at `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::OutOfRange`] if `offset >= len`.
    fn read_byte(&self, offset: u64) -> StorageResult<u8> {
        check_in_range(offset, self.len()?)?;
        let mut byte = [0u8; 1];
        self.read_at(offset, &mut byte)?;
        Ok(byte[0])
    }

    /// Overwrites the byte at `offset`. The length is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::OutOfRange`] if `offset >= len`.
    fn write_byte(&mut self, offset: u64, value: u8) -> StorageResult<()> {
        check_in_range(offset, self.len()?)?;
        self.write_at(offset, &[value])
    }

    /// Reads exactly `n` bytes starting at `offset`.
    ///
    /// Positions at or beyond the end of the store read as zero, so this
    /// never fails for range reasons.
    ///
    /// # Errors
    ///
    /// Returns an error if an I/O error occurs.
    fn read_block(&self, offset: u64, n: usize) -> StorageResult<Vec<u8>> {
        let mut block = vec![0u8; n];
        let len = self.len()?;
        if offset < len {
            let available = (len - offset).min(n as u64) as usize;
            self.read_at(offset, &mut block[..available])?;
        }
        Ok(block)
    }

    /// Materializes the whole store.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Oversize`] if the length exceeds
    /// [`StoreOptions::max_materialize`].
    fn read_all(&self) -> StorageResult<Vec<u8>> {
        let len = self.len()?;
        let limit = self.options().max_materialize;
        if len > limit {
            return Err(StorageError::Oversize { len, limit });
        }
        let mut data = vec![0u8; len as usize];
        self.read_at(0, &mut data)?;
        Ok(data)
    }

    /// Inserts `data` at `offset`.
    ///
    /// With `overwrite = false` every byte at or after `offset` moves right by
    /// `data.len()` and the store grows. `offset == len` appends.
    ///
    /// With `overwrite = true` the bytes are written in place and clipped to
    /// the current length: any part of `data` that would land past the end is
    /// dropped and the length never changes.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::OutOfRange`] for a shifting insert with
    /// `offset > len`, or an I/O error. An I/O error mid-shift leaves the
    /// store partially shifted.
    fn insert_bytes(&mut self, offset: u64, data: &[u8], overwrite: bool) -> StorageResult<()> {
        if data.is_empty() {
            return Ok(());
        }
        let len = self.len()?;

        if overwrite {
            if offset >= len {
                return Ok(());
            }
            let writable = (len - offset).min(data.len() as u64) as usize;
            debug!(offset, requested = data.len(), writable, "overwrite");
            return self.write_at(offset, &data[..writable]);
        }

        if offset > len {
            return Err(StorageError::OutOfRange { offset, len });
        }

        let grow = data.len() as u64;
        debug!(offset, grow, len, "shifting insert");
        self.set_len(len + grow)?;

        // Tail to head so no source block is overwritten before it is read.
        let mut buf = vec![0u8; self.options().shift_buffer_size.max(1)];
        let mut end = len;
        while end > offset {
            let chunk = (end - offset).min(buf.len() as u64) as usize;
            let start = end - chunk as u64;
            self.read_at(start, &mut buf[..chunk])?;
            self.write_at(start + grow, &buf[..chunk])?;
            end = start;
        }

        self.write_at(offset, data)
    }

    /// Deletes up to `count` bytes starting at `offset`.
    ///
    /// The count is clamped to the end of the store. With `shift = true` the
    /// trailing bytes move left and the store shrinks; with `shift = false`
    /// the range is zero-filled in place.
    ///
    /// Returns the number of bytes actually deleted or zeroed. An offset at or
    /// past the end is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if an I/O error occurs. An I/O error mid-shift leaves
    /// the store partially shifted.
    fn delete_bytes(&mut self, offset: u64, count: u64, shift: bool) -> StorageResult<u64> {
        let len = self.len()?;
        if offset >= len || count == 0 {
            return Ok(0);
        }
        let count = count.min(len - offset);
        let block = self.options().shift_buffer_size.max(1);

        if shift {
            debug!(offset, count, len, "shifting delete");
            let mut buf = vec![0u8; block];
            let mut src = offset + count;
            while src < len {
                let chunk = (len - src).min(block as u64) as usize;
                self.read_at(src, &mut buf[..chunk])?;
                self.write_at(src - count, &buf[..chunk])?;
                src += chunk as u64;
            }
            self.set_len(len - count)?;
        } else {
            debug!(offset, count, "zero fill");
            let zeros = vec![0u8; (count as usize).min(block)];
            let end = offset + count;
            let mut pos = offset;
            while pos < end {
                let chunk = (end - pos).min(zeros.len() as u64) as usize;
                self.write_at(pos, &zeros[..chunk])?;
                pos += chunk as u64;
            }
        }

        Ok(count)
    }

    /// Flushes and releases the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the final flush fails.
    fn close(mut self) -> StorageResult<()>
    where
        Self: Sized,
    {
        self.flush()
    }
}

fn check_in_range(offset: u64, len: u64) -> StorageResult<()> {
    if offset >= len {
        return Err(StorageError::OutOfRange { offset, len });
    }
    Ok(())
}
