//! CLI argument structures.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Icon library ingestion and cross-library equivalence mapping.
#[derive(Parser)]
#[command(name = "glyphdex")]
#[command(version)]
#[command(about = "Extract vendored icon libraries into SQLite and map equivalents across them")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// SQLite database file
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Config file (default: ./glyphdex.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract one or all icon libraries into the store
    Extract(ExtractArgs),

    /// Run a cross-library mapping pass: match, save, export
    Map(MapArgs),

    /// Print the mapping review queue, most uncertain first
    Review,
}

#[derive(Args)]
pub struct ExtractArgs {
    /// Library to extract, or "all"
    #[arg(long, default_value = "all")]
    pub source: String,

    /// Clear a library's icons before extracting
    #[arg(long, value_name = "SOURCE")]
    pub clear: Option<String>,

    /// Vendor directory holding the icon packages (a node_modules root)
    #[arg(long)]
    pub vendor_dir: Option<PathBuf>,

    /// Run a mapping pass after extraction
    #[arg(long)]
    pub map: bool,
}

#[derive(Args)]
pub struct MapArgs {
    /// Acceptance threshold for fuzzy matches (0-100)
    #[arg(long)]
    pub threshold: Option<u8>,

    /// Output path for the exported mappings file
    #[arg(long)]
    pub out: Option<PathBuf>,
}
