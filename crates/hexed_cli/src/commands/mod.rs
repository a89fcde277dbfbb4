//! CLI command implementations.

pub mod decode;
pub mod dump;
pub mod edit;
pub mod info;
pub mod search;
