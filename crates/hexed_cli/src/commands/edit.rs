//! Write, insert and delete command implementations.

use hexed_codec::parse_hex_bytes;
use hexed_core::{ByteStore, EditorConfig, EditorSession};
use std::path::Path;
use tracing::info;

/// Runs the write command: overwrites bytes one by one, failing at the
/// first offset outside the file.
pub fn write(
    path: &Path,
    config: EditorConfig,
    offset: u64,
    hex: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = parse_hex_bytes(hex)?;
    let mut session = EditorSession::open(path, config)?;

    for (i, &byte) in data.iter().enumerate() {
        session.store_mut().write_byte(offset + i as u64, byte)?;
    }
    session.close()?;

    info!(offset, count = data.len(), "bytes written");
    println!("Wrote {} bytes at 0x{:08X}", data.len(), offset);
    Ok(())
}

/// Runs the insert command.
pub fn insert(
    path: &Path,
    config: EditorConfig,
    offset: u64,
    hex: &str,
    overwrite: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = parse_hex_bytes(hex)?;
    let mut session = EditorSession::open(path, config)?;

    let before = session.len()?;
    session.store_mut().insert_bytes(offset, &data, overwrite)?;
    let after = session.len()?;
    session.close()?;

    info!(offset, count = data.len(), overwrite, "bytes inserted");
    if overwrite {
        println!("Overwrote at 0x{:08X} (size {} bytes)", offset, after);
    } else {
        println!(
            "Inserted {} bytes at 0x{:08X} (size {} -> {} bytes)",
            data.len(),
            offset,
            before,
            after
        );
    }
    Ok(())
}

/// Runs the delete command.
pub fn delete(
    path: &Path,
    config: EditorConfig,
    offset: u64,
    length: u64,
    shift: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = EditorSession::open(path, config)?;

    let removed = session.store_mut().delete_bytes(offset, length, shift)?;
    let after = session.len()?;
    session.close()?;

    info!(offset, removed, shift, "bytes deleted");
    if shift {
        println!("Deleted {removed} bytes at 0x{offset:08X} (size {after} bytes)");
    } else {
        println!("Zeroed {removed} bytes at 0x{offset:08X}");
    }
    Ok(())
}
