//! # hexed storage
//!
//! Random-access byte stores for the hexed binary editor.
//!
//! A store is the **sole reader and mutator** of one byte document. It knows
//! nothing about rows, selections or primitive types - it only moves bytes.
//!
//! ## Operations
//!
//! - Strict positional access: [`ByteStore::read_byte`], [`ByteStore::write_byte`]
//! - Lenient previews: [`ByteStore::read_block`] zero-fills past the end
//! - Whole-content snapshots: [`ByteStore::read_all`]
//! - Length-changing edits: [`ByteStore::insert_bytes`], [`ByteStore::delete_bytes`]
//!
//! ## Available Stores
//!
//! - [`FileStore`] - A locked, read-write OS file
//! - [`InMemoryStore`] - For testing and scratch buffers
//!
//! ## Example
//!
//! ```rust
//! use hexed_storage::{ByteStore, InMemoryStore};
//!
//! let mut store = InMemoryStore::with_data(vec![1, 2, 3, 4, 5]);
//! store.insert_bytes(2, &[0xAA, 0xBB], false).unwrap();
//! assert_eq!(store.read_all().unwrap(), vec![1, 2, 0xAA, 0xBB, 3, 4, 5]);
//!
//! store.delete_bytes(0, 4, true).unwrap();
//! assert_eq!(store.read_all().unwrap(), vec![3, 4, 5]);
//! ```
//!
//! ## Failure model
//!
//! There is no journal. If an I/O error interrupts a shifting insert or
//! delete, the document may be left partially shifted.

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod backend;
mod error;
mod file;
mod memory;
mod options;

pub use backend::ByteStore;
pub use error::{StorageError, StorageResult};
pub use file::FileStore;
pub use memory::InMemoryStore;
pub use options::{StoreOptions, DEFAULT_MAX_MATERIALIZE, DEFAULT_SHIFT_BUFFER_SIZE};
