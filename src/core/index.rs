//! Selector index - distinct names available for filtering
//!
//! Recomputed in full from the current row set on every load; nothing is
//! maintained incrementally.

use std::collections::BTreeSet;

use crate::core::dataset::BomRow;

/// Distinct component names, deduplicated by exact string equality and
/// sorted lexicographically.
pub fn distinct_components(rows: &[BomRow]) -> Vec<String> {
    rows.iter()
        .map(|row| row.component.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Distinct machine-type names, deduplicated and sorted the same way.
pub fn distinct_machines(rows: &[BomRow]) -> Vec<String> {
    rows.iter()
        .map(|row| row.machine_type.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
