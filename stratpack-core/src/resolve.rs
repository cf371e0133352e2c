//! Name and department resolution for raw vector assets.
//!
//! All lookups are exact-string; there is no fuzzy matching anywhere in the
//! pipeline.

use crate::tables::ResolverTables;

/// The department a stratagem belongs to in the final catalog.
///
/// Reclassification (the Objectives and Common lists) always wins over the
/// folder-derived department, letting a handful of stratagems escape their
/// physical folder grouping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Department {
    /// Forced by the objectives reclassification list.
    Objectives,
    /// Forced by the common reclassification list.
    Common,
    /// Derived from the source folder (possibly via the department map).
    Derived(String),
}

impl Department {
    /// Classify a canonical name given its folder-derived department label.
    /// Precedence: Objectives list, then Common list, then the derived label.
    pub fn classify(tables: &ResolverTables, canonical: &str, derived: &str) -> Self {
        if tables.is_objective(canonical) {
            Department::Objectives
        } else if tables.is_common(canonical) {
            Department::Common
        } else {
            Department::Derived(derived.to_string())
        }
    }

    /// Classify a shared-icon alias, which has no source folder. Falls back
    /// to Objectives when neither reclassification list matches.
    pub fn classify_alias(tables: &ResolverTables, canonical: &str) -> Self {
        if tables.is_common(canonical) {
            Department::Common
        } else {
            Department::Objectives
        }
    }

    /// The department label as it appears in the manifest.
    pub fn label(&self) -> &str {
        match self {
            Department::Objectives => "Objectives",
            Department::Common => "Common",
            Department::Derived(label) => label,
        }
    }
}

/// A raw asset after name and department resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAsset {
    /// Canonical display name.
    pub name: String,
    /// Resolved department.
    pub dept: Department,
}

/// Resolve a raw asset stem from a named group into its canonical name and
/// department.
pub fn resolve_asset(tables: &ResolverTables, group: &str, raw_stem: &str) -> ResolvedAsset {
    let name = tables.canonical_name(raw_stem);
    let derived = tables.derived_dept(group);
    let dept = Department::classify(tables, name, derived);
    ResolvedAsset {
        name: name.to_string(),
        dept,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rename_with_derived_dept() {
        let tables = ResolverTables::builtin();
        let resolved = resolve_asset(&tables, "Patriotic Administration Center", "Railgun");
        assert_eq!(resolved.name, "RS-422 Railgun");
        assert_eq!(
            resolved.dept,
            Department::Derived("Patriotic Administration Center".to_string())
        );
    }

    #[test]
    fn test_objectives_list_beats_folder() {
        let tables = ResolverTables::builtin();
        let resolved = resolve_asset(&tables, "General Stratagems", "Orbital Illumination Flare");
        assert_eq!(resolved.name, "Illumination Flare");
        assert_eq!(resolved.dept, Department::Objectives);
        assert_eq!(resolved.dept.label(), "Objectives");
    }

    #[test]
    fn test_common_list_reclassifies() {
        let tables = ResolverTables::builtin();
        let resolved = resolve_asset(&tables, "Hangar", "Eagle Rearm");
        assert_eq!(resolved.dept, Department::Common);
    }

    #[test]
    fn test_unmapped_folder_passes_through() {
        let tables = ResolverTables::builtin();
        let resolved = resolve_asset(&tables, "Urban Legends", "Anti-Tank Emplacement");
        assert_eq!(resolved.name, "E/AT-12 Anti-Tank Emplacement");
        assert_eq!(resolved.dept, Department::Derived("Urban Legends".to_string()));
    }

    #[test]
    fn test_general_stratagems_default_to_common() {
        let tables = ResolverTables::builtin();
        let resolved = resolve_asset(&tables, "General Stratagems", "Orbital Precision Strike");
        assert_eq!(resolved.dept, Department::Derived("Common".to_string()));
        assert_eq!(resolved.dept.label(), "Common");
    }

    #[test]
    fn test_alias_classification_defaults_to_objectives() {
        let tables = ResolverTables::builtin();
        assert_eq!(
            Department::classify_alias(&tables, "SSSD Delivery"),
            Department::Objectives
        );
        assert_eq!(
            Department::classify_alias(&tables, "Eagle Rearm"),
            Department::Common
        );
        assert_eq!(
            Department::classify_alias(&tables, "Something Unlisted"),
            Department::Objectives
        );
    }
}
