//! Row/column addressing over a linear byte document.

/// Maps `(row, column)` grid cells to byte offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    bytes_per_row: usize,
}

impl GridLayout {
    /// Creates a layout `bytes_per_row` cells wide. Zero is treated as one.
    #[must_use]
    pub const fn new(bytes_per_row: usize) -> Self {
        Self {
            bytes_per_row: if bytes_per_row == 0 { 1 } else { bytes_per_row },
        }
    }

    /// Cells per row.
    #[must_use]
    pub const fn bytes_per_row(&self) -> usize {
        self.bytes_per_row
    }

    /// Offset of a cell. Columns past the row width run into the next row.
    ///
    /// Returns `None` if the cell lies beyond the addressable range.
    #[must_use]
    pub fn offset(&self, row: u64, col: usize) -> Option<u64> {
        row.checked_mul(self.bytes_per_row as u64)?
            .checked_add(col as u64)
    }

    /// Cell holding `offset`.
    #[must_use]
    pub const fn position(&self, offset: u64) -> (u64, usize) {
        let width = self.bytes_per_row as u64;
        (offset / width, (offset % width) as usize)
    }

    /// Rows needed to show `len` bytes.
    #[must_use]
    pub const fn row_count(&self, len: u64) -> u64 {
        len.div_ceil(self.bytes_per_row as u64)
    }

    /// Column header, e.g. `+A`.
    #[must_use]
    pub fn column_label(col: usize) -> String {
        format!("+{col:X}")
    }

    /// Row header, e.g. `00000010`.
    #[must_use]
    pub fn offset_label(offset: u64) -> String {
        format!("{offset:08X}")
    }
}

impl Default for GridLayout {
    fn default() -> Self {
        Self::new(16)
    }
}
