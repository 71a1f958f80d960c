//! V002: cross-library equivalence mappings.

pub const MIGRATION_SQL: &str = r#"
-- Mappings: one row per canonical (Lucide) icon name. The whole table is
-- replaced on every mapping run.
CREATE TABLE IF NOT EXISTS mappings (
    canonical_name TEXT PRIMARY KEY,
    lucide_id      TEXT NOT NULL,
    phosphor_id    TEXT,
    hugeicons_id   TEXT,
    confidence     INTEGER NOT NULL,
    needs_review   INTEGER NOT NULL DEFAULT 0
) STRICT;

CREATE INDEX IF NOT EXISTS idx_mappings_review ON mappings(needs_review, confidence);
"#;
