//! The auto-mapper: one equivalence mapping per canonical icon name.

use glyphdex_core::constants::{DEFAULT_CONFIDENCE_THRESHOLD, REVIEW_CUTOFF};
use glyphdex_core::errors::MappingError;
use glyphdex_core::types::{EquivalenceMapping, Library, MappedLibrary, NameIndex};
use glyphdex_storage::{queries, Database};

use crate::resolver::find_best;

/// Per-run mapper configuration.
#[derive(Debug, Clone)]
pub struct MapperConfig {
    /// Minimum score for a match to be accepted.
    pub confidence_threshold: u8,
    /// Libraries to match against, in matching order.
    pub targets: Vec<MappedLibrary>,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
            targets: MappedLibrary::ALL.to_vec(),
        }
    }
}

/// Maps equivalent icons across libraries, anchored on the canonical
/// (Lucide) icon set: every canonical name yields exactly one mapping,
/// whether or not any other library matches it — a missing cross-library
/// match is meaningful output, not an error.
pub struct AutoMapper {
    config: MapperConfig,
}

impl AutoMapper {
    pub fn new(config: MapperConfig) -> Self {
        Self { config }
    }

    /// Run a full mapping pass against the store.
    ///
    /// Loads the canonical index and every target index up front; any
    /// load failure aborts before a single mapping is computed, since a
    /// partial canonical index would silently under-report matches.
    pub fn run(&self, db: &Database) -> Result<Vec<EquivalenceMapping>, MappingError> {
        let canonical = load_index(db, Library::CANONICAL)?;

        let mut targets = Vec::with_capacity(self.config.targets.len());
        for &target in &self.config.targets {
            targets.push((target, load_index(db, target.library())?));
        }

        tracing::info!(
            canonical = canonical.len(),
            threshold = self.config.confidence_threshold,
            "starting auto-mapping"
        );
        for (target, pool) in &targets {
            tracing::info!(library = %target, icons = pool.len(), "loaded name index");
        }

        Ok(self.map_indices(&canonical, &targets))
    }

    /// Pure mapping over already-loaded indices. Deterministic: output
    /// order is canonical index order, and every per-pool scan is a
    /// first-wins ordered traversal.
    pub fn map_indices(
        &self,
        canonical: &NameIndex,
        targets: &[(MappedLibrary, NameIndex)],
    ) -> Vec<EquivalenceMapping> {
        let mut result = Vec::with_capacity(canonical.len());

        for record in canonical.iter() {
            let mut mapping =
                EquivalenceMapping::new(record.normalized_name.as_str(), record.id.as_str());

            for (target, pool) in targets {
                // An entirely empty library can never qualify; skip it.
                if pool.is_empty() {
                    continue;
                }
                let Some(best) = find_best(&record.normalized_name, pool.names()) else {
                    continue;
                };
                if best.score < self.config.confidence_threshold {
                    continue;
                }
                if let Some(id) = pool.get(best.candidate) {
                    mapping.set_match(*target, id.to_string());
                    mapping.confidence = mapping.confidence.min(best.score);
                    if best.score < REVIEW_CUTOFF {
                        mapping.needs_review = true;
                    }
                }
            }

            result.push(mapping);
        }

        result
    }
}

fn load_index(db: &Database, library: Library) -> Result<NameIndex, MappingError> {
    queries::icons::load_name_index(db.conn(), library).map_err(|e| {
        MappingError::DataUnavailable {
            library: library.id().to_string(),
            reason: e.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyphdex_core::types::IconNameRecord;

    fn index(pairs: &[(&str, &str)]) -> NameIndex {
        NameIndex::from_records(pairs.iter().map(|(name, id)| IconNameRecord {
            id: id.to_string(),
            normalized_name: name.to_string(),
        }))
    }

    fn mapper(threshold: u8) -> AutoMapper {
        AutoMapper::new(MapperConfig {
            confidence_threshold: threshold,
            targets: MappedLibrary::ALL.to_vec(),
        })
    }

    #[test]
    fn empty_canonical_index_yields_empty_list() {
        let result = mapper(80).map_indices(
            &NameIndex::new(),
            &[(MappedLibrary::Phosphor, index(&[("home", "phosphor:home")]))],
        );
        assert!(result.is_empty());
    }

    #[test]
    fn one_mapping_per_canonical_name() {
        let canonical = index(&[
            ("home", "lucide:home"),
            ("bell", "lucide:bell"),
            ("anchor", "lucide:anchor"),
        ]);
        let result = mapper(80).map_indices(&canonical, &[]);
        assert_eq!(result.len(), 3);
        assert!(result.iter().all(|m| m.confidence == 100));
        assert!(result.iter().all(|m| !m.needs_review));
    }

    #[test]
    fn verbatim_name_maps_with_full_confidence() {
        let canonical = index(&[("home", "lucide:home")]);
        let targets = [(MappedLibrary::Phosphor, index(&[("home", "phosphor:home")]))];
        let result = mapper(80).map_indices(&canonical, &targets);
        assert_eq!(result[0].phosphor_id.as_deref(), Some("phosphor:home"));
        assert_eq!(result[0].confidence, 100);
        assert!(!result[0].needs_review);
    }

    #[test]
    fn score_at_threshold_is_accepted() {
        // Two substitutions over ten chars: score exactly 80.
        let canonical = index(&[("arrow-left", "lucide:arrow-left")]);
        let targets = [(
            MappedLibrary::Phosphor,
            index(&[("arrow-lezz", "phosphor:arrow-lezz")]),
        )];
        let result = mapper(80).map_indices(&canonical, &targets);
        assert_eq!(
            result[0].phosphor_id.as_deref(),
            Some("phosphor:arrow-lezz")
        );
        assert_eq!(result[0].confidence, 80);
        assert!(result[0].needs_review);
    }

    #[test]
    fn score_below_threshold_is_rejected() {
        // Four substitutions over nineteen chars: score exactly 79.
        let canonical = index(&[("notification-square", "lucide:notification-square")]);
        let targets = [(
            MappedLibrary::Phosphor,
            index(&[("notification-sqxxxx", "phosphor:notification-sqxxxx")]),
        )];
        let result = mapper(80).map_indices(&canonical, &targets);
        assert_eq!(result[0].phosphor_id, None);
        assert_eq!(result[0].confidence, 100);
        assert!(!result[0].needs_review);
    }

    #[test]
    fn score_at_review_cutoff_is_clean() {
        // One substitution over ten chars: score exactly 90.
        let canonical = index(&[("arrow-left", "lucide:arrow-left")]);
        let targets = [(
            MappedLibrary::Phosphor,
            index(&[("arrow-lefx", "phosphor:arrow-lefx")]),
        )];
        let result = mapper(80).map_indices(&canonical, &targets);
        assert_eq!(result[0].confidence, 90);
        assert!(!result[0].needs_review);
    }

    #[test]
    fn score_below_review_cutoff_is_flagged() {
        // One substitution over nine chars: score 89.
        let canonical = index(&[("alarmbell", "lucide:alarmbell")]);
        let targets = [(
            MappedLibrary::Phosphor,
            index(&[("alarmbelx", "phosphor:alarmbelx")]),
        )];
        let result = mapper(80).map_indices(&canonical, &targets);
        assert_eq!(result[0].confidence, 89);
        assert!(result[0].needs_review);
    }

    #[test]
    fn confidence_is_minimum_across_targets() {
        let canonical = index(&[("arrow-left", "lucide:arrow-left")]);
        let targets = [
            (
                MappedLibrary::Phosphor,
                index(&[("arrow-left", "phosphor:arrow-left")]),
            ),
            (
                MappedLibrary::HugeIcons,
                index(&[("arrow-lefx", "hugeicons:arrow-lefx")]),
            ),
        ];
        let result = mapper(80).map_indices(&canonical, &targets);
        assert_eq!(result[0].phosphor_id.as_deref(), Some("phosphor:arrow-left"));
        assert_eq!(
            result[0].hugeicons_id.as_deref(),
            Some("hugeicons:arrow-lefx")
        );
        assert_eq!(result[0].confidence, 90);
    }

    #[test]
    fn empty_target_library_is_skipped() {
        let canonical = index(&[("home", "lucide:home")]);
        let targets = [
            (MappedLibrary::Phosphor, NameIndex::new()),
            (MappedLibrary::HugeIcons, index(&[("home", "hugeicons:home")])),
        ];
        let result = mapper(80).map_indices(&canonical, &targets);
        assert_eq!(result[0].phosphor_id, None);
        assert_eq!(result[0].hugeicons_id.as_deref(), Some("hugeicons:home"));
        assert_eq!(result[0].confidence, 100);
    }

    #[test]
    fn tie_breaks_to_first_in_pool_order() {
        let canonical = index(&[("arrow-left", "lucide:arrow-left")]);
        let targets = [(
            MappedLibrary::Phosphor,
            index(&[
                ("arrow-lefa", "phosphor:arrow-lefa"),
                ("arrow-lefb", "phosphor:arrow-lefb"),
            ]),
        )];
        let result = mapper(80).map_indices(&canonical, &targets);
        assert_eq!(
            result[0].phosphor_id.as_deref(),
            Some("phosphor:arrow-lefa")
        );
    }

    #[test]
    fn repeated_runs_are_identical() {
        let canonical = index(&[
            ("arrow-left", "lucide:arrow-left"),
            ("home", "lucide:home"),
            ("bell", "lucide:bell"),
        ]);
        let targets = [
            (
                MappedLibrary::Phosphor,
                index(&[("arrow-lefx", "phosphor:arrow-lefx"), ("bell", "phosphor:bell")]),
            ),
            (
                MappedLibrary::HugeIcons,
                index(&[("home", "hugeicons:home")]),
            ),
        ];
        let m = mapper(80);
        let first = m.map_indices(&canonical, &targets);
        let second = m.map_indices(&canonical, &targets);
        assert_eq!(first, second);
        // Byte-identical serialized output, same order and fields.
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn worked_example() {
        // Canonical "arrow-left" and "home"; one target pool holding a
        // near-miss of "arrow-left" scoring 83 (two inserts over twelve
        // chars). Threshold 80.
        let canonical = index(&[("arrow-left", "lucide:arrow-left"), ("home", "lucide:home")]);
        let targets = [(
            MappedLibrary::Phosphor,
            index(&[("arrow-left-b", "phosphor:arrow-left-b")]),
        )];
        let result = mapper(80).map_indices(&canonical, &targets);

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].canonical_name, "arrow-left");
        assert_eq!(
            result[0].phosphor_id.as_deref(),
            Some("phosphor:arrow-left-b")
        );
        assert_eq!(result[0].confidence, 83);
        assert!(result[0].needs_review);

        assert_eq!(result[1].canonical_name, "home");
        assert_eq!(result[1].phosphor_id, None);
        assert_eq!(result[1].confidence, 100);
        assert!(!result[1].needs_review);
    }
}
