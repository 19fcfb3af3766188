//! (table, key) to document id.

/// Separator between table and key in a document id.
pub const SEPARATOR: char = '/';

/// Document id for `key` in `table`: `table/key`.
///
/// Distinct pairs map to distinct ids as long as keys never contain `/`,
/// which the harness guarantees.
pub fn document_id(table: &str, key: &str) -> String {
    let mut id = String::with_capacity(table.len() + 1 + key.len());
    id.push_str(table);
    id.push(SEPARATOR);
    id.push_str(key);
    id
}
