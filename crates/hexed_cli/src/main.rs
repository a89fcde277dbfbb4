//! hexed CLI
//!
//! Command-line binary editor.
//!
//! # Commands
//!
//! - `info` - Show file size and grid geometry
//! - `dump` - Hex dump a range of the file
//! - `write` - Overwrite bytes in place
//! - `insert` - Insert bytes, shifting or overwriting
//! - `delete` - Delete bytes, shifting or zero-filling
//! - `search` - Find a byte pattern, optionally masked
//! - `decode` - Show the bytes at an offset as numbers

mod commands;

use clap::{Parser, Subcommand};
use hexed_core::EditorConfig;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// hexed command-line binary editor.
#[derive(Parser)]
#[command(name = "hexed")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the file to edit
    #[arg(global = true, short, long)]
    path: Option<PathBuf>,

    /// Bytes per grid row
    #[arg(global = true, short, long, default_value = "16")]
    width: usize,

    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show file size and grid geometry
    Info {
        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Hex dump a range of the file
    Dump {
        /// Start offset
        #[arg(short, long, default_value = "0")]
        offset: u64,

        /// Number of bytes to show
        #[arg(short, long, default_value = "256")]
        length: usize,
    },

    /// Overwrite bytes in place (strict: every byte must be inside the file)
    Write {
        /// Start offset
        offset: u64,

        /// Hex bytes, e.g. "DE AD BE EF"
        bytes: String,
    },

    /// Insert bytes at an offset
    Insert {
        /// Insert position
        offset: u64,

        /// Hex bytes, e.g. "DE AD BE EF"
        bytes: String,

        /// Overwrite in place instead of shifting; clipped at end of file
        #[arg(long)]
        overwrite: bool,
    },

    /// Delete bytes starting at an offset
    Delete {
        /// Start offset
        offset: u64,

        /// Number of bytes (clamped at end of file)
        length: u64,

        /// Zero-fill in place instead of shifting
        #[arg(long)]
        zero: bool,
    },

    /// Find every occurrence of a byte pattern
    Search {
        /// Hex pattern, e.g. "4D 5A"
        pattern: String,

        /// Hex mask of the same length; ignored otherwise
        #[arg(short, long)]
        mask: Option<String>,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Interpret the bytes at an offset as numbers
    Decode {
        /// Start offset
        offset: u64,

        /// Bytes to take (at most 8 are used)
        #[arg(short, long, default_value = "8")]
        length: usize,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Show version information
    Version,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = EditorConfig::new().bytes_per_row(cli.width);

    match cli.command {
        Commands::Info { format } => {
            let path = cli.path.ok_or("File path required for info")?;
            commands::info::run(&path, config, &format)?;
        }
        Commands::Dump { offset, length } => {
            let path = cli.path.ok_or("File path required for dump")?;
            commands::dump::run(&path, config, offset, length)?;
        }
        Commands::Write { offset, bytes } => {
            let path = cli.path.ok_or("File path required for write")?;
            commands::edit::write(&path, config, offset, &bytes)?;
        }
        Commands::Insert {
            offset,
            bytes,
            overwrite,
        } => {
            let path = cli.path.ok_or("File path required for insert")?;
            commands::edit::insert(&path, config, offset, &bytes, overwrite)?;
        }
        Commands::Delete {
            offset,
            length,
            zero,
        } => {
            let path = cli.path.ok_or("File path required for delete")?;
            commands::edit::delete(&path, config, offset, length, !zero)?;
        }
        Commands::Search {
            pattern,
            mask,
            format,
        } => {
            let path = cli.path.ok_or("File path required for search")?;
            commands::search::run(&path, config, &pattern, mask.as_deref(), &format)?;
        }
        Commands::Decode {
            offset,
            length,
            format,
        } => {
            let path = cli.path.ok_or("File path required for decode")?;
            commands::decode::run(&path, config, offset, length, &format)?;
        }
        Commands::Version => {
            println!("hexed CLI v{}", env!("CARGO_PKG_VERSION"));
            println!("hexed core v{}", hexed_core::VERSION);
        }
    }

    Ok(())
}
