//! Masked pattern search over a full snapshot of a store.
//!
//! A window at `i` matches when, for every `j`,
//! `(data[i + j] & mask[j]) == (pattern[j] & mask[j])`. Every matching window
//! is reported, overlapping ones included, and each contributes one offset
//! per byte it covers.
//!
//! # Usage
//!
//! ```rust
//! use hexed_core::search::{search, Pattern};
//!
//! let matches = search(&[1, 2, 3, 4, 5], &Pattern::exact(vec![2, 3]));
//! assert_eq!(matches.offsets(), &[1, 2]);
//! ```

use crate::error::{CoreError, CoreResult};
use hexed_storage::ByteStore;
use serde::Serialize;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread::{self, JoinHandle};
use std::time::Instant;
use tracing::debug;

/// Per-byte bit selection applied to both pattern and data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask(Vec<u8>);

impl Mask {
    /// An exact-match mask of `len` bytes.
    #[must_use]
    pub fn all_ones(len: usize) -> Self {
        Self(vec![0xFF; len])
    }

    /// Uses `mask` if it is as long as `pattern`, otherwise all ones.
    #[must_use]
    pub fn for_pattern(pattern: &[u8], mask: Option<&[u8]>) -> Self {
        match mask {
            Some(bits) if bits.len() == pattern.len() => Self(bits.to_vec()),
            _ => Self::all_ones(pattern.len()),
        }
    }

    /// The mask bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// A byte pattern with its normalised mask.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    bytes: Vec<u8>,
    mask: Mask,
    masked: Vec<u8>,
}

impl Pattern {
    /// Creates a pattern. A missing or mismatched mask means exact match.
    #[must_use]
    pub fn new(bytes: impl Into<Vec<u8>>, mask: Option<&[u8]>) -> Self {
        let bytes = bytes.into();
        let mask = Mask::for_pattern(&bytes, mask);
        let masked = bytes
            .iter()
            .zip(mask.as_bytes())
            .map(|(b, m)| b & m)
            .collect();
        Self {
            bytes,
            mask,
            masked,
        }
    }

    /// Creates an exact-match pattern.
    #[must_use]
    pub fn exact(bytes: impl Into<Vec<u8>>) -> Self {
        Self::new(bytes, None)
    }

    /// Like [`Pattern::new`] but rejects an empty pattern.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::MalformedPattern`] if `bytes` is empty.
    pub fn try_new(bytes: impl Into<Vec<u8>>, mask: Option<&[u8]>) -> CoreResult<Self> {
        let pattern = Self::new(bytes, mask);
        if pattern.is_empty() {
            return Err(CoreError::MalformedPattern);
        }
        Ok(pattern)
    }

    /// The raw pattern bytes.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The effective mask.
    #[must_use]
    pub fn mask(&self) -> &Mask {
        &self.mask
    }

    /// Pattern length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` for an empty pattern.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns `true` if `window` (exactly [`Pattern::len`] bytes) matches.
    #[inline]
    #[must_use]
    pub fn matches(&self, window: &[u8]) -> bool {
        window.len() == self.masked.len()
            && window
                .iter()
                .zip(self.mask.as_bytes())
                .zip(&self.masked)
                .all(|((d, m), p)| d & m == *p)
    }
}

/// Offsets of every matched byte, in ascending order.
///
/// Overlapping windows each contribute their own offsets, so duplicates are
/// expected. Use [`MatchSet::distinct`] for highlighting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MatchSet {
    offsets: Vec<u64>,
}

impl MatchSet {
    /// An empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The flattened per-byte offsets.
    #[must_use]
    pub fn offsets(&self) -> &[u64] {
        &self.offsets
    }

    /// Consumes the set and returns the offsets.
    #[must_use]
    pub fn into_offsets(self) -> Vec<u64> {
        self.offsets
    }

    /// Number of offsets, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Returns `true` if nothing matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Returns `true` if some match covers `offset`.
    #[must_use]
    pub fn contains(&self, offset: u64) -> bool {
        self.offsets.binary_search(&offset).is_ok()
    }

    /// Number of matching windows for a pattern of `pattern_len` bytes.
    #[must_use]
    pub fn match_count(&self, pattern_len: usize) -> usize {
        if pattern_len == 0 {
            0
        } else {
            self.offsets.len() / pattern_len
        }
    }

    /// Sorted offsets with duplicates removed.
    #[must_use]
    pub fn distinct(&self) -> Vec<u64> {
        let mut offsets = self.offsets.clone();
        offsets.dedup();
        offsets
    }
}

/// Scans `data` for every window matching `pattern`.
///
/// An empty pattern, or one longer than `data`, yields an empty set.
#[must_use]
pub fn search(data: &[u8], pattern: &Pattern) -> MatchSet {
    let started = Instant::now();
    let width = pattern.len();
    let mut offsets = Vec::new();

    if width > 0 && data.len() >= width {
        for (start, window) in data.windows(width).enumerate() {
            if pattern.matches(window) {
                let start = start as u64;
                offsets.extend(start..start + width as u64);
            }
        }
        // Windows wider than two bytes can overlap out of order
        if width > 2 {
            offsets.sort_unstable();
        }
    }

    debug!(
        data_len = data.len(),
        pattern_len = width,
        hits = offsets.len(),
        elapsed_us = started.elapsed().as_micros() as u64,
        "pattern search"
    );
    MatchSet { offsets }
}

/// Reports every offset whose byte equals `byte`.
#[must_use]
pub fn search_first_byte(data: &[u8], byte: u8) -> MatchSet {
    let offsets = data
        .iter()
        .enumerate()
        .filter(|(_, b)| **b == byte)
        .map(|(i, _)| i as u64)
        .collect();
    MatchSet { offsets }
}

/// Snapshots `store` and scans it.
///
/// # Errors
///
/// Returns a storage error if the snapshot fails, including `Oversize`.
pub fn search_store(store: &dyn ByteStore, pattern: &Pattern) -> CoreResult<MatchSet> {
    let snapshot = store.read_all()?;
    Ok(search(&snapshot, pattern))
}

/// A search running on a worker thread.
///
/// The search always runs to completion; dropping the handle only discards
/// the result.
#[derive(Debug)]
pub struct SearchHandle {
    receiver: Receiver<MatchSet>,
    worker: Option<JoinHandle<()>>,
}

impl SearchHandle {
    /// Blocks until the result arrives.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::SearchAborted`] if the worker panicked.
    pub fn wait(mut self) -> CoreResult<MatchSet> {
        let result = self.receiver.recv().map_err(|_| CoreError::SearchAborted);
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
        result
    }

    /// Returns the result if it is ready, without blocking.
    ///
    /// The result is handed out once; later calls report
    /// [`CoreError::SearchAborted`].
    pub fn try_result(&mut self) -> Option<CoreResult<MatchSet>> {
        match self.receiver.try_recv() {
            Ok(matches) => Some(Ok(matches)),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(CoreError::SearchAborted)),
        }
    }
}

/// Runs [`search`] over an owned snapshot on a new worker thread.
///
/// # Errors
///
/// Returns an I/O error if the thread cannot be spawned.
pub fn spawn_search(snapshot: Vec<u8>, pattern: Pattern) -> CoreResult<SearchHandle> {
    let (sender, receiver) = mpsc::channel();
    let worker = thread::Builder::new()
        .name("hexed-search".into())
        .spawn(move || {
            let matches = search(&snapshot, &pattern);
            // Receiver may be gone; the result is simply dropped then
            let _ = sender.send(matches);
        })?;

    Ok(SearchHandle {
        receiver,
        worker: Some(worker),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexed_storage::{InMemoryStore, StoreOptions};
    use std::time::Duration;

    #[test]
    fn exact_match_reports_each_byte() {
        let data = [0x01, 0x02, 0x03, 0x04, 0x05];
        let matches = search(&data, &Pattern::new(vec![0x02, 0x03], None));
        assert_eq!(matches.offsets(), &[1, 2]);
        assert_eq!(matches.match_count(2), 1);
    }

    #[test]
    fn overlapping_windows_are_all_reported() {
        let matches = search(&[0xAA; 4], &Pattern::exact(vec![0xAA, 0xAA]));
        assert_eq!(matches.offsets(), &[0, 1, 1, 2, 2, 3]);
        assert_eq!(matches.match_count(2), 3);
        assert_eq!(matches.distinct(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn wide_overlaps_are_sorted() {
        let matches = search(&[0; 4], &Pattern::exact(vec![0, 0, 0]));
        assert_eq!(matches.offsets(), &[0, 1, 1, 2, 2, 3]);
        assert!(matches.contains(3));
        assert_eq!(matches.distinct(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn mask_ignores_cleared_bits() {
        let data = [0x12, 0x34, 0x1F, 0x3F, 0x22];
        let pattern = Pattern::new(vec![0x10, 0x30], Some(&[0xF0, 0xF0][..]));
        assert_eq!(search(&data, &pattern).offsets(), &[0, 1, 2, 3]);
    }

    #[test]
    fn mismatched_mask_falls_back_to_exact() {
        let pattern = Pattern::new(vec![0x10, 0x30], Some(&[0xF0][..]));
        assert_eq!(pattern.mask(), &Mask::all_ones(2));
        assert!(search(&[0x12, 0x34], &pattern).is_empty());
        assert_eq!(search(&[0x10, 0x30], &pattern).offsets(), &[0, 1]);
    }

    #[test]
    fn zero_mask_matches_everywhere() {
        let pattern = Pattern::new(vec![0x99], Some(&[0x00][..]));
        assert_eq!(search(&[1, 2, 3], &pattern).offsets(), &[0, 1, 2]);
    }

    #[test]
    fn empty_pattern_and_short_data_yield_nothing() {
        assert!(search(&[1, 2, 3], &Pattern::exact(Vec::new())).is_empty());
        assert!(search(&[1], &Pattern::exact(vec![1, 2])).is_empty());
        assert!(search(&[], &Pattern::exact(vec![1])).is_empty());
    }

    #[test]
    fn try_new_rejects_empty() {
        assert!(matches!(
            Pattern::try_new(Vec::new(), None),
            Err(CoreError::MalformedPattern)
        ));
        assert!(Pattern::try_new(vec![1], None).is_ok());
    }

    #[test]
    fn first_byte_search() {
        let matches = search_first_byte(&[7, 1, 7, 7], 7);
        assert_eq!(matches.offsets(), &[0, 2, 3]);
        assert!(matches.contains(2));
        assert!(!matches.contains(1));
    }

    #[test]
    fn store_search_uses_snapshot() {
        let store = InMemoryStore::with_data(b"abcabc".to_vec());
        let matches = search_store(&store, &Pattern::exact(b"bc".to_vec())).unwrap();
        assert_eq!(matches.offsets(), &[1, 2, 4, 5]);
    }

    #[test]
    fn store_search_oversize_fails() {
        let store =
            InMemoryStore::with_options(vec![0; 16], StoreOptions::new().max_materialize(8));
        let result = search_store(&store, &Pattern::exact(vec![0]));
        assert!(matches!(
            result,
            Err(CoreError::Storage(hexed_storage::StorageError::Oversize { .. }))
        ));
    }

    #[test]
    fn spawned_search_delivers_result() {
        let handle = spawn_search(vec![5, 6, 5, 6], Pattern::exact(vec![5, 6])).unwrap();
        assert_eq!(handle.wait().unwrap().offsets(), &[0, 1, 2, 3]);
    }

    #[test]
    fn spawned_search_can_be_polled() {
        let mut handle = spawn_search(vec![1; 1024], Pattern::exact(vec![1])).unwrap();
        let mut result = None;
        for _ in 0..500 {
            if let Some(ready) = handle.try_result() {
                result = Some(ready);
                break;
            }
            thread::sleep(Duration::from_millis(2));
        }
        assert_eq!(result.unwrap().unwrap().len(), 1024);
    }
}
