//! Shared-asset linking.
//!
//! Some stratagems intentionally have no rendered icon of their own and reuse
//! another stratagem's raster file. This pass runs once, after all primary
//! entries are produced, and synthesizes an entry per alias.

use crate::entry::{Catalog, StratagemEntry};
use crate::resolve::Department;
use crate::sequence::SequenceTable;
use crate::tables::ResolverTables;

/// Synthesize entries for shared-icon aliases.
///
/// Each alias whose source resolves gets an entry with its own name,
/// department, and sequence, but the source entry's icon reference verbatim.
/// Unresolved aliases are dropped and returned for the run report.
pub fn link_shared(
    tables: &ResolverTables,
    catalog: &Catalog,
    sequences: &SequenceTable,
) -> (Vec<StratagemEntry>, Vec<String>) {
    let mut linked = Vec::new();
    let mut unresolved = Vec::new();

    for (alias, source) in tables.shared_icons() {
        match catalog.find(source) {
            Some(source_entry) => {
                let dept = Department::classify_alias(tables, alias);
                log::debug!("{alias} shares {} from {source}", source_entry.icon);
                linked.push(StratagemEntry {
                    name: alias.clone(),
                    sequence: sequences.get(alias).cloned().unwrap_or_default(),
                    dept: dept.label().to_string(),
                    icon: source_entry.icon.clone(),
                });
            }
            None => {
                log::warn!("Icon source \"{source}\" not found for \"{alias}\"");
                unresolved.push(alias.clone());
            }
        }
    }

    (linked, unresolved)
}
