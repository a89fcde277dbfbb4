//! Editor configuration.

use hexed_storage::{StoreOptions, DEFAULT_MAX_MATERIALIZE, DEFAULT_SHIFT_BUFFER_SIZE};

/// Configuration for opening an editor session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    /// Whether to create the file if it doesn't exist.
    pub create_if_missing: bool,

    /// Cells per grid row.
    pub bytes_per_row: usize,

    /// Largest document that can be snapshotted for search.
    pub max_materialize: u64,

    /// Block size for shifting insert and delete.
    pub shift_buffer_size: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            create_if_missing: false,
            bytes_per_row: 16,
            max_materialize: DEFAULT_MAX_MATERIALIZE,
            shift_buffer_size: DEFAULT_SHIFT_BUFFER_SIZE,
        }
    }
}

impl EditorConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether to create the file if missing.
    #[must_use]
    pub const fn create_if_missing(mut self, value: bool) -> Self {
        self.create_if_missing = value;
        self
    }

    /// Sets the grid width. Zero is treated as one.
    #[must_use]
    pub const fn bytes_per_row(mut self, width: usize) -> Self {
        self.bytes_per_row = if width == 0 { 1 } else { width };
        self
    }

    /// Sets the snapshot size limit.
    #[must_use]
    pub const fn max_materialize(mut self, limit: u64) -> Self {
        self.max_materialize = limit;
        self
    }

    /// Sets the shift block size.
    #[must_use]
    pub const fn shift_buffer_size(mut self, size: usize) -> Self {
        self.shift_buffer_size = size;
        self
    }

    /// The store-level subset of this configuration.
    #[must_use]
    pub fn store_options(&self) -> StoreOptions {
        StoreOptions::new()
            .create_if_missing(self.create_if_missing)
            .max_materialize(self.max_materialize)
            .shift_buffer_size(self.shift_buffer_size)
    }
}
