//! V001: ingestion tables — sources, icons, variants.

pub const MIGRATION_SQL: &str = r#"
-- Sources: one row per vendored icon library.
CREATE TABLE IF NOT EXISTS sources (
    id           TEXT PRIMARY KEY,
    name         TEXT NOT NULL,
    version      TEXT NOT NULL,
    license      TEXT,
    total_icons  INTEGER NOT NULL DEFAULT 0,
    extracted_at INTEGER NOT NULL DEFAULT (unixepoch())
) STRICT;

-- Icons: normalized base icons across all libraries.
-- id is "{source}:{normalized_name}".
CREATE TABLE IF NOT EXISTS icons (
    id              TEXT PRIMARY KEY,
    source_id       TEXT NOT NULL REFERENCES sources(id),
    name            TEXT NOT NULL,
    normalized_name TEXT NOT NULL,
    category        TEXT,
    tags            TEXT,
    view_box        TEXT NOT NULL,
    content         TEXT NOT NULL,
    path_data       TEXT,
    default_stroke  INTEGER NOT NULL DEFAULT 0,
    default_fill    INTEGER NOT NULL DEFAULT 0,
    stroke_width    TEXT,
    brand_color     TEXT
) STRICT;

CREATE INDEX IF NOT EXISTS idx_icons_source ON icons(source_id);
CREATE INDEX IF NOT EXISTS idx_icons_normalized ON icons(source_id, normalized_name);

-- Variants: weight/style renditions of a base icon.
-- id is "{source}:{normalized_name}:{variant}".
CREATE TABLE IF NOT EXISTS variants (
    id        TEXT PRIMARY KEY,
    icon_id   TEXT NOT NULL REFERENCES icons(id) ON DELETE CASCADE,
    variant   TEXT NOT NULL,
    content   TEXT NOT NULL,
    path_data TEXT
) STRICT;

CREATE INDEX IF NOT EXISTS idx_variants_icon ON variants(icon_id);
"#;
