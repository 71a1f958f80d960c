//! glyphdex CLI — extract vendored icon libraries into SQLite and map
//! equivalent icons across them.

use std::path::Path;

use clap::Parser;

use glyphdex_core::config::{CliOverrides, GlyphdexConfig};
use glyphdex_core::errors::PipelineError;
use glyphdex_core::tracing::init_tracing;

mod args;
mod commands;

use args::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        tracing::error!(error = %e, "glyphdex failed");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), PipelineError> {
    let mut overrides = CliOverrides {
        db_path: cli.db.clone(),
        ..Default::default()
    };
    match &cli.command {
        Commands::Extract(args) => {
            overrides.vendor_dir = args.vendor_dir.clone();
        }
        Commands::Map(args) => {
            overrides.confidence_threshold = args.threshold;
            overrides.export_path = args.out.clone();
        }
        Commands::Review => {}
    }

    let config = GlyphdexConfig::load(Path::new("."), cli.config.as_deref(), Some(&overrides))?;

    match cli.command {
        Commands::Extract(args) => commands::extract(&config, &args),
        Commands::Map(_) => commands::map(&config),
        Commands::Review => commands::review(&config),
    }
}
