//! Exact-match lookup over the static identifier tables.

use crate::error::{MorphError, Result};

/// A row of a static table, addressed by a case-sensitive identifier.
pub trait Named {
    fn id(&self) -> &'static str;
}

/// Find `id` in `table`, or report the table's identifiers.
pub fn find<T: Named>(table: &'static [T], kind: &'static str, id: &str) -> Result<&'static T> {
    table
        .iter()
        .find(|entry| entry.id() == id)
        .ok_or_else(|| MorphError::not_found(kind, id, ids(table)))
}

/// Identifiers in canonical table order.
pub fn ids<T: Named>(table: &[T]) -> Vec<&'static str> {
    table.iter().map(Named::id).collect()
}
