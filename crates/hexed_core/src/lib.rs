//! # hexed core
//!
//! Binary editing engine for hexed.
//!
//! This crate provides:
//! - Masked, overlap-aware pattern search over store snapshots ([`search`])
//! - Background search on a worker thread ([`search::spawn_search`])
//! - Grid addressing of a linear document ([`GridLayout`])
//! - Editing sessions that tie a store to selections, pastes, deletes and
//!   value inspection ([`EditorSession`])
//!
//! Byte storage lives in `hexed_storage` and primitive decoding in
//! `hexed_codec`; both are re-exported here for convenience.

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod grid;
pub mod search;
mod session;

pub use config::EditorConfig;
pub use error::{CoreError, CoreResult};
pub use grid::GridLayout;
pub use search::{MatchSet, Mask, Pattern, SearchHandle};
pub use session::EditorSession;

pub use hexed_codec::{DecodedValue, Primitive, PrimitiveDecoder, Selection};
pub use hexed_storage::{ByteStore, FileStore, InMemoryStore, StoreOptions};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
