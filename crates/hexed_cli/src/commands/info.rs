//! Info command implementation.

use hexed_core::{EditorConfig, EditorSession};
use serde::Serialize;
use std::path::Path;

/// File summary.
#[derive(Debug, Serialize)]
pub struct InfoResult {
    /// File path.
    pub path: String,
    /// File size in bytes.
    pub size: u64,
    /// Bytes per grid row.
    pub bytes_per_row: usize,
    /// Rows needed to show the whole file.
    pub rows: u64,
    /// Offset label of the last row, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_row: Option<String>,
}

/// Runs the info command.
pub fn run(path: &Path, config: EditorConfig, format: &str) -> Result<(), Box<dyn std::error::Error>> {
    let session = EditorSession::open(path, config)?;
    let grid = session.grid();
    let size = session.len()?;
    let rows = grid.row_count(size);

    let result = InfoResult {
        path: path.display().to_string(),
        size,
        bytes_per_row: grid.bytes_per_row(),
        rows,
        last_row: rows
            .checked_sub(1)
            .and_then(|row| grid.offset(row, 0))
            .map(hexed_core::GridLayout::offset_label),
    };
    session.close()?;

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&result)?),
        _ => print_text_output(&result),
    }

    Ok(())
}

fn print_text_output(result: &InfoResult) {
    println!("hexed File Info");
    println!("===============");
    println!();
    println!("Path:  {}", result.path);
    println!("Size:  {} ({} bytes)", format_size(result.size), result.size);
    println!();
    println!("Grid:");
    println!("  Bytes per row: {}", result.bytes_per_row);
    println!("  Rows:          {}", result.rows);
    if let Some(last) = &result.last_row {
        println!("  Last row:      {last}");
    }
}

fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else if bytes < 1024 * 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else {
        format!("{:.1} GB", bytes as f64 / (1024.0 * 1024.0 * 1024.0))
    }
}
