//! Catalog data model: stratagem entries and the ordered entry set.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// One record of the output manifest.
///
/// Immutable once constructed; `icon` is the rasterized file name
/// (`<slug>.png`), shared verbatim by alias entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StratagemEntry {
    /// Canonical display name, unique within the catalog.
    pub name: String,
    /// Ordered directional input tokens, possibly empty.
    pub sequence: Vec<String>,
    /// Department label.
    pub dept: String,
    /// Raster file referenced by this entry.
    pub icon: String,
}

/// How display names and department labels are compared when sorting.
///
/// `Ordinal` (the default) is plain byte-wise comparison. `CaseInsensitive`
/// exists for compatibility with datasets sorted under locale collation; it
/// falls back to ordinal comparison on ties so the order stays total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NameOrdering {
    #[default]
    Ordinal,
    CaseInsensitive,
}

impl NameOrdering {
    fn compare(self, a: &str, b: &str) -> Ordering {
        match self {
            NameOrdering::Ordinal => a.cmp(b),
            NameOrdering::CaseInsensitive => a
                .to_lowercase()
                .cmp(&b.to_lowercase())
                .then_with(|| a.cmp(b)),
        }
    }
}

/// The full set of catalog entries, keyed by display name.
#[derive(Debug, Default)]
pub struct Catalog {
    entries: Vec<StratagemEntry>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry, keeping the first occurrence when a display name
    /// collides. Returns whether the entry was accepted.
    pub fn push(&mut self, entry: StratagemEntry) -> bool {
        if let Some(existing) = self.find(&entry.name) {
            log::warn!(
                "Duplicate stratagem name \"{}\" ({} vs {}); keeping the first",
                entry.name,
                existing.icon,
                entry.icon
            );
            return false;
        }
        self.entries.push(entry);
        true
    }

    /// Exact display-name lookup.
    pub fn find(&self, name: &str) -> Option<&StratagemEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Stable sort by (dept, name), ascending. Ordering is imposed here, at
    /// assembly time, never at collection time.
    pub fn sort(&mut self, ordering: NameOrdering) {
        self.entries.sort_by(|a, b| {
            ordering
                .compare(&a.dept, &b.dept)
                .then_with(|| ordering.compare(&a.name, &b.name))
        });
    }

    pub fn entries(&self) -> &[StratagemEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names of entries with no input sequence, in catalog order.
    pub fn missing_sequences(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|e| e.sequence.is_empty())
            .map(|e| e.name.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, dept: &str) -> StratagemEntry {
        StratagemEntry {
            name: name.to_string(),
            sequence: Vec::new(),
            dept: dept.to_string(),
            icon: format!("{}.png", name.to_lowercase().replace(' ', "-")),
        }
    }

    #[test]
    fn test_sort_by_dept_then_name() {
        let mut catalog = Catalog::new();
        catalog.push(entry("Resupply", "Common"));
        catalog.push(entry("Hellbomb", "Objectives"));
        catalog.push(entry("Eagle Rearm", "Common"));
        catalog.sort(NameOrdering::Ordinal);

        let order: Vec<&str> = catalog.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(order, ["Eagle Rearm", "Resupply", "Hellbomb"]);
    }

    #[test]
    fn test_sort_invariant_holds_for_adjacent_pairs() {
        let mut catalog = Catalog::new();
        for (name, dept) in [
            ("Zeta", "Bridge"),
            ("Alpha", "Hangar"),
            ("Mid", "Bridge"),
            ("Alpha", "Bridge"),
        ] {
            catalog.push(entry(name, dept));
        }
        catalog.sort(NameOrdering::Ordinal);

        for pair in catalog.entries().windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            assert!(a.dept < b.dept || (a.dept == b.dept && a.name <= b.name));
        }
    }

    #[test]
    fn test_duplicate_names_keep_first() {
        let mut catalog = Catalog::new();
        assert!(catalog.push(entry("Hellbomb", "Objectives")));
        assert!(!catalog.push(entry("Hellbomb", "Bridge")));
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.find("Hellbomb").unwrap().dept, "Objectives");
    }

    #[test]
    fn test_case_insensitive_ordering_is_total() {
        let mut catalog = Catalog::new();
        catalog.push(entry("eagle smoke strike", "Hangar"));
        catalog.push(entry("Eagle Smoke Strike", "Hangar"));
        catalog.push(entry("Eagle Airstrike", "Hangar"));
        catalog.sort(NameOrdering::CaseInsensitive);

        let order: Vec<&str> = catalog.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(
            order,
            ["Eagle Airstrike", "Eagle Smoke Strike", "eagle smoke strike"]
        );
    }

    #[test]
    fn test_missing_sequences() {
        let mut catalog = Catalog::new();
        let mut with_seq = entry("Resupply", "Common");
        with_seq.sequence = vec!["S".into(), "S".into(), "W".into(), "D".into()];
        catalog.push(with_seq);
        catalog.push(entry("Hellbomb", "Objectives"));

        assert_eq!(catalog.missing_sequences(), ["Hellbomb"]);
    }
}
