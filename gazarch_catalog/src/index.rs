//! Index construction over the place catalog.

use std::collections::HashMap;
use std::path::Path;

use serde_yaml::Value;
use tracing::{debug, warn};

use gazarch_core::normalize;

use crate::error::Result;
use crate::schema::{ExclusionSet, PlaceRecord};

/// Top-level shape of the catalog document.
#[derive(Debug, serde::Deserialize)]
struct CatalogDoc {
    #[serde(default)]
    places: Vec<Value>,
}

/// Read-only lookup structures built once from the catalog.
///
/// Holds the ordered post-exclusion record list (catalog order, used for
/// listings), the normalized-alias index, and the `(kind, number)` index.
/// Both indices resolve collisions last-write-wins. Safe to share across
/// conversation handlers without locking.
#[derive(Debug, Clone)]
pub struct CatalogIndex {
    records: Vec<PlaceRecord>,
    /// Normalized aliases in first-insertion order; drives the substring
    /// fallback so its iteration order is a documented contract, not an
    /// accident of hash iteration.
    alias_order: Vec<String>,
    alias_to_record: HashMap<String, usize>,
    by_kind_number: HashMap<(String, u8), usize>,
}

impl CatalogIndex {
    /// Load and index the catalog file at `path`.
    ///
    /// # Errors
    /// Fails when the file is missing or not valid YAML. Individual
    /// malformed entries are skipped with a warning instead.
    pub fn load(path: &Path, exclusions: &ExclusionSet) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml(&text, exclusions)
    }

    /// Index a catalog document given as YAML text.
    ///
    /// # Errors
    /// Fails when the document is not a mapping with a `places` list.
    pub fn from_yaml(yaml: &str, exclusions: &ExclusionSet) -> Result<Self> {
        let doc: CatalogDoc = serde_yaml::from_str(yaml)?;

        let mut index = Self {
            records: Vec::new(),
            alias_order: Vec::new(),
            alias_to_record: HashMap::new(),
            by_kind_number: HashMap::new(),
        };

        for (position, raw) in doc.places.into_iter().enumerate() {
            match serde_yaml::from_value::<PlaceRecord>(raw) {
                Ok(record) => index.insert(record, exclusions),
                Err(err) => {
                    warn!("skipping malformed catalog entry #{position}: {err}");
                }
            }
        }

        debug!(
            "catalog indexed: {} places, {} aliases, {} numbered",
            index.records.len(),
            index.alias_order.len(),
            index.by_kind_number.len()
        );
        Ok(index)
    }

    fn insert(&mut self, record: PlaceRecord, exclusions: &ExclusionSet) {
        if let Some((kind, number)) = record.kind_number() {
            if exclusions.contains(kind, number) {
                debug!("excluding ({kind}, {number}) \"{}\"", record.title);
                return;
            }
        }

        let idx = self.records.len();

        for alias in &record.aliases {
            let key = normalize(alias);
            if !self.alias_to_record.contains_key(&key) {
                self.alias_order.push(key.clone());
            }
            // Later aliases overwrite earlier collisions; first-insertion
            // position is kept, as the substring fallback depends on it.
            self.alias_to_record.insert(key, idx);
        }

        if let Some((kind, number)) = record.kind_number() {
            self.by_kind_number.insert((kind.to_string(), number), idx);
        }

        self.records.push(record);
    }

    /// Exact lookup by already-normalized alias text.
    #[must_use]
    pub fn get_by_alias(&self, normalized: &str) -> Option<&PlaceRecord> {
        self.alias_to_record
            .get(normalized)
            .map(|&idx| &self.records[idx])
    }

    /// Substring fallback: the first record whose normalized alias is a
    /// non-empty substring of the normalized input.
    ///
    /// Iterates aliases in insertion order (catalog order restricted to
    /// alias order), so with several containment matches the earliest
    /// catalog entry wins. First match, not best match.
    #[must_use]
    pub fn find_by_alias_substring(&self, normalized_input: &str) -> Option<&PlaceRecord> {
        self.alias_order
            .iter()
            .find(|alias| !alias.is_empty() && normalized_input.contains(alias.as_str()))
            .and_then(|alias| self.get_by_alias(alias))
    }

    /// Lookup by `(kind, number)`.
    #[must_use]
    pub fn get_by_number(&self, kind: &str, number: u8) -> Option<&PlaceRecord> {
        self.by_kind_number
            .get(&(kind.to_string(), number))
            .map(|&idx| &self.records[idx])
    }

    /// All non-excluded records, in catalog order.
    #[must_use]
    pub fn records(&self) -> &[PlaceRecord] {
        &self.records
    }

    /// Titles for the "list all locations" answer, in catalog order.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.title.as_str())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ExclusionEntry;

    const CATALOG: &str = r#"
places:
  - title: "Номын сан"
    aliases: ["номын сан", "library", "Library"]
    url: "https://maps.example/lib"
  - title: "4-р хичээлийн байр"
    kind: class
    number: 4
    aliases: ["4-р хичээлийн байр"]
  - title: "4-р дотуур байр"
    kind: dorm
    number: 4
    aliases: ["4-р дотуур байр"]
  - title: "6-р хичээлийн байр"
    kind: class
    number: 6
    aliases: ["6-р хичээлийн байр"]
"#;

    fn exclusions() -> ExclusionSet {
        ExclusionSet::new([
            ExclusionEntry {
                kind: "dorm".to_string(),
                number: 4,
            },
            ExclusionEntry {
                kind: "class".to_string(),
                number: 6,
            },
        ])
    }

    fn index() -> CatalogIndex {
        CatalogIndex::from_yaml(CATALOG, &exclusions()).unwrap_or_else(|e| panic!("{e}"))
    }

    #[test]
    fn excluded_records_vanish_everywhere() {
        let idx = index();
        assert_eq!(idx.get_by_number("dorm", 4), None);
        assert_eq!(idx.get_by_number("class", 6), None);
        assert_eq!(idx.get_by_alias("4-р дотуур байр"), None);
        assert!(idx.titles().all(|t| t != "4-р дотуур байр"));
        assert_eq!(idx.records().len(), 2);
    }

    #[test]
    fn listing_preserves_catalog_order() {
        let idx = index();
        let titles: Vec<_> = idx.titles().collect();
        assert_eq!(titles, vec!["Номын сан", "4-р хичээлийн байр"]);
    }

    #[test]
    fn aliases_are_normalized_on_insert() {
        let idx = index();
        let rec = idx.get_by_alias("library");
        assert_eq!(rec.map(|r| r.title.as_str()), Some("Номын сан"));
        // "Library" collapsed onto the same key.
        assert_eq!(idx.get_by_alias("Library"), None);
    }

    #[test]
    fn numeric_lookup_hits_non_excluded_pairs() {
        let idx = index();
        let rec = idx.get_by_number("class", 4);
        assert_eq!(rec.map(|r| r.title.as_str()), Some("4-р хичээлийн байр"));
        assert_eq!(idx.get_by_number("class", 5), None);
    }

    #[test]
    fn substring_fallback_returns_first_containment_match() {
        let idx = index();
        let rec = idx.find_by_alias_substring("манай library хаана вэ");
        assert_eq!(rec.map(|r| r.title.as_str()), Some("Номын сан"));
        assert_eq!(idx.find_by_alias_substring("огт холбоогүй"), None);
    }

    #[test]
    fn alias_collision_is_last_write_wins() {
        let yaml = r#"
places:
  - title: "Old gym"
    aliases: ["gym"]
  - title: "New gym"
    aliases: ["gym"]
"#;
        let idx = CatalogIndex::from_yaml(yaml, &ExclusionSet::default())
            .unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(
            idx.get_by_alias("gym").map(|r| r.title.as_str()),
            Some("New gym")
        );
        // Both records still enumerate.
        assert_eq!(idx.records().len(), 2);
    }

    #[test]
    fn kind_number_collision_is_last_write_wins() {
        let yaml = r#"
places:
  - title: "First"
    kind: class
    number: 9
  - title: "Second"
    kind: class
    number: 9
"#;
        let idx = CatalogIndex::from_yaml(yaml, &ExclusionSet::default())
            .unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(
            idx.get_by_number("class", 9).map(|r| r.title.as_str()),
            Some("Second")
        );
    }

    #[test]
    fn malformed_entry_is_skipped_not_fatal() {
        let yaml = r#"
places:
  - "just a string"
  - title: "Kept"
    aliases: ["kept"]
  - number: 3
"#;
        let idx = CatalogIndex::from_yaml(yaml, &ExclusionSet::default())
            .unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(idx.records().len(), 1);
        assert!(idx.get_by_alias("kept").is_some());
    }

    #[test]
    fn unreadable_document_is_fatal() {
        assert!(CatalogIndex::from_yaml(": not yaml: [", &ExclusionSet::default()).is_err());
    }

    #[test]
    fn empty_document_yields_empty_index() {
        let idx = CatalogIndex::from_yaml("places: []", &ExclusionSet::default())
            .unwrap_or_else(|e| panic!("{e}"));
        assert!(idx.is_empty());
    }
}
