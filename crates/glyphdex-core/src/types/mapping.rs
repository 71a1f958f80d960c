//! The cross-library equivalence mapping record.

use serde::{Deserialize, Serialize};

use super::MappedLibrary;

/// One cross-library equivalence mapping, anchored on a canonical
/// (Lucide) icon name.
///
/// Field order is the serialized field order of the interchange file —
/// do not reorder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquivalenceMapping {
    /// Normalized name of the anchoring canonical icon.
    pub canonical_name: String,
    /// Id of the anchoring canonical icon.
    pub lucide_id: String,
    /// Best Phosphor match at/above the acceptance threshold, if any.
    pub phosphor_id: Option<String>,
    /// Best HugeIcons match at/above the acceptance threshold, if any.
    pub hugeicons_id: Option<String>,
    /// Minimum of all contributing per-library match scores; 100 when no
    /// other library qualified.
    pub confidence: u8,
    /// True if any accepted match scored below the review cutoff.
    pub needs_review: bool,
}

impl EquivalenceMapping {
    /// A fresh mapping with no cross-library matches yet.
    pub fn new(canonical_name: impl Into<String>, lucide_id: impl Into<String>) -> Self {
        Self {
            canonical_name: canonical_name.into(),
            lucide_id: lucide_id.into(),
            phosphor_id: None,
            hugeicons_id: None,
            confidence: 100,
            needs_review: false,
        }
    }

    /// Record the matched id for one mapped library.
    pub fn set_match(&mut self, library: MappedLibrary, id: String) {
        match library {
            MappedLibrary::Phosphor => self.phosphor_id = Some(id),
            MappedLibrary::HugeIcons => self.hugeicons_id = Some(id),
        }
    }

    /// The matched id for one mapped library, if any.
    pub fn match_id(&self, library: MappedLibrary) -> Option<&str> {
        match library {
            MappedLibrary::Phosphor => self.phosphor_id.as_deref(),
            MappedLibrary::HugeIcons => self.hugeicons_id.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_mapping_has_full_confidence_and_no_matches() {
        let m = EquivalenceMapping::new("home", "lucide:home");
        assert_eq!(m.confidence, 100);
        assert!(!m.needs_review);
        for lib in MappedLibrary::ALL {
            assert_eq!(m.match_id(lib), None);
        }
    }

    #[test]
    fn set_match_targets_the_right_field() {
        let mut m = EquivalenceMapping::new("home", "lucide:home");
        m.set_match(MappedLibrary::HugeIcons, "hugeicons:home".to_string());
        assert_eq!(m.hugeicons_id.as_deref(), Some("hugeicons:home"));
        assert_eq!(m.phosphor_id, None);
    }

    #[test]
    fn serialized_field_order_is_stable() {
        let m = EquivalenceMapping::new("home", "lucide:home");
        let json = serde_json::to_string(&m).unwrap();
        let canonical = json.find("canonical_name").unwrap();
        let lucide = json.find("lucide_id").unwrap();
        let phosphor = json.find("phosphor_id").unwrap();
        let huge = json.find("hugeicons_id").unwrap();
        let confidence = json.find("confidence").unwrap();
        let review = json.find("needs_review").unwrap();
        assert!(canonical < lucide);
        assert!(lucide < phosphor);
        assert!(phosphor < huge);
        assert!(huge < confidence);
        assert!(confidence < review);
    }
}
