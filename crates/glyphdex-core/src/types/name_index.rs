//! Per-library name → id index, the mapper's only view of a library.

use rustc_hash::FxHashMap;

/// One `(id, normalized_name)` pair as stored for an icon. Read-only
/// input to the mapper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconNameRecord {
    pub id: String,
    pub normalized_name: String,
}

/// An ordered `normalized_name -> id` index for one library.
///
/// Order is the load order (insertion order in the store) and is part of
/// the mapping contract: candidate pools are scanned in this order and
/// ties break to the first name seen. Built fresh on every mapping run.
///
/// At most one id per name. If the same name arrives twice the later id
/// wins while the name keeps its original position — an accepted,
/// documented loss of information.
#[derive(Debug, Clone, Default)]
pub struct NameIndex {
    records: Vec<IconNameRecord>,
    by_name: FxHashMap<String, usize>,
}

impl NameIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from records in load order.
    pub fn from_records(records: impl IntoIterator<Item = IconNameRecord>) -> Self {
        let mut index = Self::new();
        for record in records {
            index.insert(record);
        }
        index
    }

    /// Insert one record. Last write wins on duplicate names; the name
    /// keeps its original position in the ordering.
    pub fn insert(&mut self, record: IconNameRecord) {
        match self.by_name.get(&record.normalized_name) {
            Some(&pos) => self.records[pos].id = record.id,
            None => {
                self.by_name
                    .insert(record.normalized_name.clone(), self.records.len());
                self.records.push(record);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in load order.
    pub fn iter(&self) -> impl Iterator<Item = &IconNameRecord> + '_ {
        self.records.iter()
    }

    /// Names in load order — the candidate pool for best-match scans.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.records.iter().map(|r| r.normalized_name.as_str())
    }

    /// Look up the id for a name.
    pub fn get(&self, normalized_name: &str) -> Option<&str> {
        self.by_name
            .get(normalized_name)
            .map(|&pos| self.records[pos].id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, id: &str) -> IconNameRecord {
        IconNameRecord {
            id: id.to_string(),
            normalized_name: name.to_string(),
        }
    }

    #[test]
    fn preserves_insertion_order() {
        let index = NameIndex::from_records([
            record("home", "lucide:home"),
            record("arrow-left", "lucide:arrow-left"),
            record("bell", "lucide:bell"),
        ]);
        let names: Vec<&str> = index.names().collect();
        assert_eq!(names, ["home", "arrow-left", "bell"]);
    }

    #[test]
    fn lookup_by_name() {
        let index = NameIndex::from_records([record("home", "lucide:home")]);
        assert_eq!(index.get("home"), Some("lucide:home"));
        assert_eq!(index.get("house"), None);
    }

    #[test]
    fn duplicate_name_last_id_wins_position_kept() {
        let index = NameIndex::from_records([
            record("home", "old-id"),
            record("bell", "lucide:bell"),
            record("home", "new-id"),
        ]);
        assert_eq!(index.len(), 2);
        assert_eq!(index.get("home"), Some("new-id"));
        let names: Vec<&str> = index.names().collect();
        assert_eq!(names, ["home", "bell"]);
    }

    #[test]
    fn empty_index() {
        let index = NameIndex::new();
        assert!(index.is_empty());
        assert_eq!(index.names().count(), 0);
    }
}
