//! Naming convention for generated index names.
//!
//! A logical index `email` on table `user` is stored by the engine as
//! `UQE_user_email` (unique) or `IDX_user_email` (plain). Only the logical
//! name lives in the model; the physical one is recomputed when needed.

use crate::index::IndexKind;

pub const UNIQUE_INDEX_PREFIX: &str = "UQE_";
pub const PLAIN_INDEX_PREFIX: &str = "IDX_";

fn has_generated_prefix(name: &str) -> bool {
    name.starts_with(UNIQUE_INDEX_PREFIX) || name.starts_with(PLAIN_INDEX_PREFIX)
}

/// Engine-side name for a logical index. Names that already carry a
/// generated prefix are returned unchanged.
pub fn physical_index_name(table: &str, logical: &str, kind: IndexKind) -> String {
    if has_generated_prefix(logical) {
        return logical.to_string();
    }

    let prefix = match kind {
        IndexKind::Unique => UNIQUE_INDEX_PREFIX,
        IndexKind::Plain => PLAIN_INDEX_PREFIX,
    };
    format!("{prefix}{table}_{logical}")
}

/// Recover the logical name from an engine-side index name.
///
/// Strips `<prefix><table>_` by length, so a single underscore separator is
/// assumed. A name that would be consumed entirely is returned as is.
pub fn logical_index_name(physical: &str, table: &str) -> String {
    let generated = [UNIQUE_INDEX_PREFIX, PLAIN_INDEX_PREFIX]
        .iter()
        .any(|prefix| {
            physical
                .strip_prefix(prefix)
                .is_some_and(|rest| rest.starts_with(table))
        });
    if !generated {
        return physical.to_string();
    }

    let cut = PLAIN_INDEX_PREFIX.len() + table.len() + 1;
    match physical.get(cut..) {
        Some(logical) if !logical.is_empty() => logical.to_string(),
        _ => physical.to_string(),
    }
}
