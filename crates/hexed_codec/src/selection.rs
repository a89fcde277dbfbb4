//! Ragged byte selections.

/// An ordered collection of byte rows picked from arbitrary grid coordinates.
///
/// Rows may have different lengths and may be absent altogether. Flattening
/// concatenates the present rows in order; absent rows contribute nothing
/// (they are skipped, never zero-padded).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    rows: Vec<Option<Vec<u8>>>,
}

impl Selection {
    /// Creates an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a selection from rows that may be absent.
    #[must_use]
    pub fn from_optional_rows(rows: Vec<Option<Vec<u8>>>) -> Self {
        Self { rows }
    }

    /// Appends a present row.
    pub fn push_row(&mut self, row: Vec<u8>) {
        self.rows.push(Some(row));
    }

    /// Appends an absent row.
    pub fn push_absent(&mut self) {
        self.rows.push(None);
    }

    /// Returns the rows as given.
    #[must_use]
    pub fn rows(&self) -> &[Option<Vec<u8>>] {
        &self.rows
    }

    /// Number of rows, absent ones included.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of bytes the flattened selection holds.
    #[must_use]
    pub fn byte_count(&self) -> usize {
        self.rows.iter().flatten().map(Vec::len).sum()
    }

    /// Returns `true` if flattening yields no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.byte_count() == 0
    }

    /// Concatenates the present rows into one contiguous sequence.
    #[must_use]
    pub fn flatten(&self) -> Vec<u8> {
        let mut flat = Vec::with_capacity(self.byte_count());
        for row in self.rows.iter().flatten() {
            flat.extend_from_slice(row);
        }
        flat
    }
}

impl From<Vec<Vec<u8>>> for Selection {
    fn from(rows: Vec<Vec<u8>>) -> Self {
        Self {
            rows: rows.into_iter().map(Some).collect(),
        }
    }
}

impl From<&[u8]> for Selection {
    fn from(bytes: &[u8]) -> Self {
        Self {
            rows: vec![Some(bytes.to_vec())],
        }
    }
}
