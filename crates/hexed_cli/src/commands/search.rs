//! Search command implementation.

use hexed_codec::parse_hex_bytes;
use hexed_core::search::Pattern;
use hexed_core::{EditorConfig, EditorSession, GridLayout};
use serde::Serialize;
use std::path::Path;

/// Search result.
#[derive(Debug, Serialize)]
pub struct SearchResult {
    /// Pattern bytes as hex text.
    pub pattern: String,
    /// Effective mask as hex text.
    pub mask: String,
    /// Number of matching windows.
    pub windows: usize,
    /// Every byte offset covered by a match, ascending and distinct.
    pub offsets: Vec<u64>,
}

/// Runs the search command.
pub fn run(
    path: &Path,
    config: EditorConfig,
    pattern: &str,
    mask: Option<&str>,
    format: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let bytes = parse_hex_bytes(pattern)?;
    let mask = mask.map(parse_hex_bytes).transpose()?;
    let pattern = Pattern::try_new(bytes, mask.as_deref())?;

    let session = EditorSession::open(path, config)?;
    let handle = session.search_async(pattern.clone())?;
    let matches = handle.wait()?;
    session.close()?;

    let windows = matches.match_count(pattern.len());
    tracing::info!(windows, "search finished");

    let result = SearchResult {
        pattern: hexed_codec::format_hex(pattern.bytes()),
        mask: hexed_codec::format_hex(pattern.mask().as_bytes()),
        windows,
        offsets: matches.distinct(),
    };

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&result)?),
        _ => print_text_output(&result),
    }

    Ok(())
}

fn print_text_output(result: &SearchResult) {
    println!("Pattern: {}", result.pattern);
    println!("Mask:    {}", result.mask);
    println!("Matches: {}", result.windows);
    if result.offsets.is_empty() {
        return;
    }
    println!();
    println!("Covered offsets:");
    for offset in &result.offsets {
        println!("  {}", GridLayout::offset_label(*offset));
    }
}
