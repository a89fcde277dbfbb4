//! Editor sessions: one store, addressed as a grid.
//!
//! A session is what a presentation layer drives. It turns grid
//! coordinates into store offsets, extracts selections for inspection,
//! applies clipboard-style pastes and deletes, and dispatches searches.
//!
//! # Usage
//!
//! ```rust
//! use hexed_core::{EditorConfig, EditorSession};
//! use hexed_core::search::Pattern;
//! use hexed_core::InMemoryStore;
//!
//! let store = InMemoryStore::with_data(vec![0xEF, 0xBE, 0xAD, 0xDE]);
//! let mut session = EditorSession::from_store(store, EditorConfig::default());
//!
//! let values = session.interpret(&[0], &[0, 1, 2, 3]).unwrap();
//! assert!(values.iter().any(|v| v.to_string() == "uint32: 3735928559"));
//!
//! session.search(&Pattern::exact(vec![0xAD])).unwrap();
//! assert!(session.is_highlighted(2));
//! ```

use crate::config::EditorConfig;
use crate::error::CoreResult;
use crate::grid::GridLayout;
use crate::search::{search_store, spawn_search, MatchSet, Pattern, SearchHandle};
use hexed_codec::hex::parse_hex_byte;
use hexed_codec::{DecodedValue, PrimitiveDecoder, Selection};
use hexed_storage::{ByteStore, FileStore, StorageError};
use std::path::Path;
use tracing::debug;

/// A single-document editing session.
///
/// The session exclusively owns its store. Highlights from the last search
/// are kept only for the caller's convenience; the search functions
/// themselves return an owned [`MatchSet`].
#[derive(Debug)]
pub struct EditorSession<S: ByteStore = FileStore> {
    store: S,
    grid: GridLayout,
    highlights: MatchSet,
}

impl EditorSession<FileStore> {
    /// Opens the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or is locked by another
    /// session.
    pub fn open(path: &Path, config: EditorConfig) -> CoreResult<Self> {
        let store = FileStore::open(path, config.store_options())?;
        Ok(Self::from_store(store, config))
    }
}

impl<S: ByteStore> EditorSession<S> {
    /// Wraps an already open store.
    ///
    /// Only the grid width is taken from `config`; store options belong to
    /// the store.
    #[must_use]
    pub fn from_store(store: S, config: EditorConfig) -> Self {
        Self {
            store,
            grid: GridLayout::new(config.bytes_per_row),
            highlights: MatchSet::new(),
        }
    }

    /// The underlying store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mutable access to the underlying store.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// The grid layout.
    #[must_use]
    pub fn grid(&self) -> GridLayout {
        self.grid
    }

    /// Current document length.
    ///
    /// # Errors
    ///
    /// Returns an error if the length cannot be read.
    pub fn len(&self) -> CoreResult<u64> {
        Ok(self.store.len()?)
    }

    /// Returns `true` for an empty document.
    ///
    /// # Errors
    ///
    /// Returns an error if the length cannot be read.
    pub fn is_empty(&self) -> CoreResult<bool> {
        Ok(self.store.is_empty()?)
    }

    /// Rows needed to display the document.
    ///
    /// # Errors
    ///
    /// Returns an error if the length cannot be read.
    pub fn row_count(&self) -> CoreResult<u64> {
        Ok(self.grid.row_count(self.store.len()?))
    }

    /// Offset of a cell that must exist, or `OutOfRange`.
    fn required_offset(&self, row: u64, col: usize) -> CoreResult<u64> {
        match self.grid.offset(row, col) {
            Some(offset) => Ok(offset),
            None => Err(StorageError::OutOfRange {
                offset: u64::MAX,
                len: self.store.len()?,
            }
            .into()),
        }
    }

    /// Flushes and closes the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the final flush fails.
    pub fn close(self) -> CoreResult<()> {
        Ok(self.store.close()?)
    }

    /// The byte in a cell, or `None` past the end of the document.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn cell(&self, row: u64, col: usize) -> CoreResult<Option<u8>> {
        match self.grid.offset(row, col) {
            Some(offset) if offset < self.store.len()? => Ok(Some(self.store.read_byte(offset)?)),
            _ => Ok(None),
        }
    }

    /// Overwrites a cell from one or two typed hex digits.
    ///
    /// # Errors
    ///
    /// Returns a codec error for bad text and `OutOfRange` past the end.
    pub fn set_cell_hex(&mut self, row: u64, col: usize, text: &str) -> CoreResult<()> {
        let value = parse_hex_byte(text)?;
        let offset = self.required_offset(row, col)?;
        self.store.write_byte(offset, value)?;
        Ok(())
    }

    /// One-line description of a cell: offset, hex, signed and unsigned value.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn describe_cell(&self, row: u64, col: usize) -> CoreResult<Option<String>> {
        let Some(offset) = self.grid.offset(row, col) else {
            return Ok(None);
        };
        Ok(self.cell(row, col)?.map(|byte| {
            format!(
                "Offset: {offset:08X} Hex: {byte:02X} Signed: {} Unsigned: {byte}",
                byte as i8
            )
        }))
    }

    /// Reads the cells at every `(row, col)` pair.
    ///
    /// Cells past the end are left out of their row, and a row with no cell
    /// inside the document is absent, so the result may be ragged.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn selection(&self, rows: &[u64], cols: &[usize]) -> CoreResult<Selection> {
        let len = self.store.len()?;
        let mut selection = Selection::new();
        for &row in rows {
            let mut bytes = Vec::with_capacity(cols.len());
            for &col in cols {
                match self.grid.offset(row, col) {
                    Some(offset) if offset < len => bytes.push(self.store.read_byte(offset)?),
                    _ => {}
                }
            }
            if bytes.is_empty() {
                selection.push_absent();
            } else {
                selection.push_row(bytes);
            }
        }
        Ok(selection)
    }

    /// Writes `clipboard` cell by cell starting at `(row, col)`.
    ///
    /// Targets past the end are skipped, so the length never changes. An
    /// absent clipboard row leaves its target row untouched.
    ///
    /// Returns the number of bytes written.
    ///
    /// # Errors
    ///
    /// Returns an error if a write fails.
    pub fn paste_replace(&mut self, row: u64, col: usize, clipboard: &Selection) -> CoreResult<usize> {
        let len = self.store.len()?;
        let mut written = 0;
        for (i, line) in clipboard.rows().iter().enumerate() {
            let Some(line) = line else { continue };
            for (j, &byte) in line.iter().enumerate() {
                let target = row
                    .checked_add(i as u64)
                    .zip(col.checked_add(j))
                    .and_then(|(r, c)| self.grid.offset(r, c));
                match target {
                    Some(offset) if offset < len => {
                        self.store.write_at(offset, &[byte])?;
                        written += 1;
                    }
                    _ => {}
                }
            }
        }
        debug!(row, col, written, "paste replace");
        Ok(written)
    }

    /// Inserts the flattened `clipboard` at `(row, col)`, shifting the rest.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if the cell lies past the end, or an I/O error.
    pub fn paste_shift(&mut self, row: u64, col: usize, clipboard: &Selection) -> CoreResult<usize> {
        let offset = self.required_offset(row, col)?;
        let bytes = clipboard.flatten();
        self.store.insert_bytes(offset, &bytes, false)?;
        Ok(bytes.len())
    }

    /// Zeroes every selected cell inside the document.
    ///
    /// Returns the number of cells zeroed.
    ///
    /// # Errors
    ///
    /// Returns an error if a write fails.
    pub fn zero_cells(&mut self, rows: &[u64], cols: &[usize]) -> CoreResult<usize> {
        let len = self.store.len()?;
        let mut zeroed = 0;
        for &row in rows {
            for &col in cols {
                match self.grid.offset(row, col) {
                    Some(offset) if offset < len => {
                        self.store.write_at(offset, &[0])?;
                        zeroed += 1;
                    }
                    _ => {}
                }
            }
        }
        Ok(zeroed)
    }

    /// Shift-deletes the span from the first selected cell to the last.
    ///
    /// Returns the number of bytes removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_span(&mut self, rows: &[u64], cols: &[usize]) -> CoreResult<u64> {
        let (Some(&row_min), Some(&row_max)) = (rows.iter().min(), rows.iter().max()) else {
            return Ok(0);
        };
        let (Some(&col_min), Some(&col_max)) = (cols.iter().min(), cols.iter().max()) else {
            return Ok(0);
        };
        let from = self.required_offset(row_min, col_min)?;
        let to = self.required_offset(row_max, col_max)?;
        if to < from {
            return Ok(0);
        }
        Ok(self.store.delete_bytes(from, (to - from).saturating_add(1), true)?)
    }

    /// Decodes the selected cells as every primitive that fits.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn interpret(&self, rows: &[u64], cols: &[usize]) -> CoreResult<Vec<DecodedValue>> {
        let selection = self.selection(rows, cols)?;
        Ok(PrimitiveDecoder::new(&selection).interpret())
    }

    /// The decoded values of a selection joined into one status line.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn status_line(&self, rows: &[u64], cols: &[usize]) -> CoreResult<String> {
        let values = self.interpret(rows, cols)?;
        Ok(values
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("  "))
    }

    /// Searches the whole document and keeps the result as highlights.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be snapshotted.
    pub fn search(&mut self, pattern: &Pattern) -> CoreResult<&MatchSet> {
        self.highlights = search_store(&self.store, pattern)?;
        Ok(&self.highlights)
    }

    /// Snapshots the document and searches it on a worker thread.
    ///
    /// The session is free for further edits while the search runs; the
    /// result reflects the snapshot. Hand it to
    /// [`EditorSession::set_highlights`] when it arrives.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot fails or the worker cannot start.
    pub fn search_async(&self, pattern: Pattern) -> CoreResult<SearchHandle> {
        let snapshot = self.store.read_all()?;
        spawn_search(snapshot, pattern)
    }

    /// Replaces the highlights.
    pub fn set_highlights(&mut self, matches: MatchSet) {
        self.highlights = matches;
    }

    /// The last search result.
    #[must_use]
    pub fn highlights(&self) -> &MatchSet {
        &self.highlights
    }

    /// Returns `true` if the last search matched `offset`.
    #[must_use]
    pub fn is_highlighted(&self, offset: u64) -> bool {
        self.highlights.contains(offset)
    }

    /// Drops the highlights.
    pub fn clear_highlights(&mut self) {
        self.highlights = MatchSet::new();
    }
}
