//! Command implementations.

use glyphdex_core::config::GlyphdexConfig;
use glyphdex_core::errors::{ConfigError, PipelineError};
use glyphdex_core::types::{Library, MappedLibrary};
use glyphdex_extract::extractors::extractor_for;
use glyphdex_extract::load_library;
use glyphdex_mapping::{store, AutoMapper, MapperConfig};
use glyphdex_storage::queries::sources;
use glyphdex_storage::Database;

use crate::args::ExtractArgs;

/// Parse a `--source`/`--clear` value into a library id.
fn parse_library(field: &str, value: &str) -> Result<Library, PipelineError> {
    Library::from_id(value).ok_or_else(|| {
        PipelineError::Config(ConfigError::ValidationFailed {
            field: field.to_string(),
            message: format!(
                "unknown library '{value}' (expected one of: {})",
                Library::ALL.map(|l| l.id()).join(", ")
            ),
        })
    })
}

/// Extract the requested libraries, then optionally chain a mapping run.
pub fn extract(config: &GlyphdexConfig, args: &ExtractArgs) -> Result<(), PipelineError> {
    let db = Database::open(&config.db_path)?;

    if let Some(clear) = &args.clear {
        let library = parse_library("--clear", clear)?;
        let removed = sources::clear_source(db.conn(), library)?;
        tracing::info!(library = %library, removed = removed, "cleared source");
    }

    let libraries: Vec<Library> = if args.source == "all" {
        Library::ALL.to_vec()
    } else {
        vec![parse_library("--source", &args.source)?]
    };

    let mut total = 0usize;
    for library in libraries {
        let extractor = extractor_for(library, &config.vendor_dir);
        let summary = load_library(&db, extractor.as_ref())?;
        total += summary.inserted;
    }
    tracing::info!(total = total, "extraction complete");

    for source in sources::list_sources(db.conn())? {
        tracing::info!(
            library = %source.id,
            version = %source.version,
            icons = source.total_icons,
            "registered source"
        );
    }

    if args.map {
        run_mapping(config, &db)?;
    }

    Ok(())
}

/// Run a mapping pass against an already-populated store.
pub fn map(config: &GlyphdexConfig) -> Result<(), PipelineError> {
    let db = Database::open(&config.db_path)?;
    run_mapping(config, &db)
}

fn run_mapping(config: &GlyphdexConfig, db: &Database) -> Result<(), PipelineError> {
    let mapper = AutoMapper::new(MapperConfig {
        confidence_threshold: config.confidence_threshold,
        targets: MappedLibrary::ALL.to_vec(),
    });

    let mappings = mapper.run(db)?;
    store::save(db, &mappings)?;
    store::export(&mappings, &config.export_path)?;
    Ok(())
}

/// Print the review queue: mappings above the acceptance threshold but
/// below the high-confidence cutoff, most uncertain first.
pub fn review(config: &GlyphdexConfig) -> Result<(), PipelineError> {
    let db = Database::open(&config.db_path)?;
    let queue = store::review_queue(&db)?;

    if queue.is_empty() {
        println!("review queue is empty");
        return Ok(());
    }

    println!("{} mapping(s) awaiting review:", queue.len());
    for mapping in &queue {
        println!(
            "  {:3}  {}  phosphor={}  hugeicons={}",
            mapping.confidence,
            mapping.canonical_name,
            mapping.phosphor_id.as_deref().unwrap_or("-"),
            mapping.hugeicons_id.as_deref().unwrap_or("-"),
        );
    }
    Ok(())
}
