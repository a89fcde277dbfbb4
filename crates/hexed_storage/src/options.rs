//! Store configuration.

/// Largest document `read_all` will materialize by default.
pub const DEFAULT_MAX_MATERIALIZE: u64 = i32::MAX as u64;

/// Default block size used when shifting bytes during insert and delete.
pub const DEFAULT_SHIFT_BUFFER_SIZE: usize = 64 * 1024;

/// Options controlling how a store is opened and how it moves bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreOptions {
    /// Whether to create the file if it doesn't exist.
    pub create_if_missing: bool,

    /// Upper bound, in bytes, for [`crate::ByteStore::read_all`].
    pub max_materialize: u64,

    /// Block size for the shifting copies in insert and delete.
    pub shift_buffer_size: usize,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            create_if_missing: false,
            max_materialize: DEFAULT_MAX_MATERIALIZE,
            shift_buffer_size: DEFAULT_SHIFT_BUFFER_SIZE,
        }
    }
}

impl StoreOptions {
    /// Creates options with default values.
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

    /// Sets the materialization limit for `read_all`.
    #[must_use]
    pub const fn max_materialize(mut self, limit: u64) -> Self {
        self.max_materialize = limit;
        self
    }

    /// Sets the shift block size. Zero is treated as one.
    #[must_use]
    pub const fn shift_buffer_size(mut self, size: usize) -> Self {
        self.shift_buffer_size = if size == 0 { 1 } else { size };
        self
    }
}
