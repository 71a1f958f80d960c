//! Registry load: run one extractor and persist its output.

use glyphdex_core::errors::PipelineError;
use glyphdex_core::types::ExtractedIcon;
use glyphdex_storage::queries::{icons, sources};
use glyphdex_storage::Database;

use glyphdex_core::constants::INSERT_BATCH_SIZE;

use crate::extractors::Extractor;

/// Outcome counts of one library load. Informational only — failure is
/// signalled by the returned error, never by these numbers.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadSummary {
    pub base_icons: usize,
    pub variants: usize,
    pub inserted: usize,
    pub insert_errors: usize,
}

/// Extract one library and load it into the store.
///
/// The source row is upserted with the base-icon count, then base icons
/// are inserted before variants so every variant finds its base.
pub fn load_library(db: &Database, extractor: &dyn Extractor) -> Result<LoadSummary, PipelineError> {
    let library = extractor.library();
    let version = extractor.version();

    tracing::info!(library = %library, version = %version, "extracting");
    let all = extractor.extract_all()?;

    let (base, variants): (Vec<ExtractedIcon>, Vec<ExtractedIcon>) =
        all.into_iter().partition(|icon| !icon.is_variant());

    sources::upsert_source(db.conn(), library, &version, base.len() as i64)?;

    let (inserted_base, errors_base) = icons::batch_insert(db.conn(), &base, INSERT_BATCH_SIZE)?;
    let (inserted_variants, errors_variants) =
        icons::batch_insert(db.conn(), &variants, INSERT_BATCH_SIZE)?;

    let summary = LoadSummary {
        base_icons: base.len(),
        variants: variants.len(),
        inserted: inserted_base + inserted_variants,
        insert_errors: errors_base + errors_variants,
    };

    tracing::info!(
        library = %library,
        base = summary.base_icons,
        variants = summary.variants,
        inserted = summary.inserted,
        errors = summary.insert_errors,
        "library loaded"
    );

    Ok(summary)
}
