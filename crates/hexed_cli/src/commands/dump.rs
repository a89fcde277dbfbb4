//! Dump command implementation.

use hexed_core::{ByteStore, EditorConfig, EditorSession, GridLayout};
use std::path::Path;

/// Runs the dump command.
///
/// Rows are aligned to the grid, so the first row may start before
/// `offset`; cells outside the requested range are left blank.
pub fn run(
    path: &Path,
    config: EditorConfig,
    offset: u64,
    length: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let session = EditorSession::open(path, config)?;
    let grid = session.grid();
    let size = session.len()?;

    let end = offset.saturating_add(length as u64).min(size);
    if offset >= end {
        tracing::info!(offset, size, "nothing to dump");
        session.close()?;
        return Ok(());
    }

    let width = grid.bytes_per_row();
    let (first_row, _) = grid.position(offset);
    let last_row = grid.position(end - 1).0;

    print_header(width);
    for row in first_row..=last_row {
        let Some(row_start) = grid.offset(row, 0) else {
            break;
        };
        let bytes = session.store().read_block(row_start, width)?;
        println!("{}", format_row(row_start, &bytes, offset, end));
    }

    session.close()?;
    Ok(())
}

fn print_header(width: usize) {
    let mut header = String::from("        ");
    for col in 0..width {
        header.push_str(&format!(" {:>2}", GridLayout::column_label(col)));
    }
    println!("{header}");
}

/// Formats one grid row: offset label, hex cells, then printable ASCII.
fn format_row(row_start: u64, bytes: &[u8], start: u64, end: u64) -> String {
    let mut hex = String::new();
    let mut ascii = String::new();
    for (i, &b) in bytes.iter().enumerate() {
        let at = row_start + i as u64;
        if at < start || at >= end {
            hex.push_str("   ");
            ascii.push(' ');
        } else {
            hex.push_str(&format!(" {b:02X}"));
            ascii.push(if b.is_ascii_graphic() || b == b' ' {
                b as char
            } else {
                '.'
            });
        }
    }
    format!("{}{}  |{}|", GridLayout::offset_label(row_start), hex, ascii)
}
