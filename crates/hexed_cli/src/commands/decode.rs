//! Decode command implementation.

use hexed_codec::{format_hex, DecodedValue, PrimitiveDecoder};
use hexed_core::{ByteStore, EditorConfig, EditorSession};
use serde::Serialize;
use std::path::Path;

/// Decode result.
#[derive(Debug, Serialize)]
pub struct DecodeResult {
    /// Start offset.
    pub offset: u64,
    /// The bytes that were interpreted, as hex text.
    pub bytes: String,
    /// Every primitive that fit.
    pub values: Vec<DecodedValue>,
}

/// Runs the decode command.
///
/// Takes up to `length` bytes, stopping at end of file; the bytes are never
/// padded, so wide primitives are skipped near the end.
pub fn run(
    path: &Path,
    config: EditorConfig,
    offset: u64,
    length: usize,
    format: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let session = EditorSession::open(path, config)?;
    let size = session.len()?;
    if offset >= size {
        session.close()?;
        return Err(format!("offset {offset} is past the end of the file ({size} bytes)").into());
    }

    let available = (size - offset).min(length.min(8) as u64) as usize;
    let bytes = session.store().read_block(offset, available)?;
    session.close()?;

    let result = DecodeResult {
        offset,
        bytes: format_hex(&bytes),
        values: PrimitiveDecoder::from_bytes(bytes).interpret(),
    };

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&result)?),
        _ => print_text_output(&result),
    }

    Ok(())
}

fn print_text_output(result: &DecodeResult) {
    println!("Offset: {:08X}", result.offset);
    println!("Bytes:  {}", result.bytes);
    println!();
    if result.values.is_empty() {
        println!("(too few bytes for any primitive)");
    }
    for value in &result.values {
        println!("  {value}");
    }
}
