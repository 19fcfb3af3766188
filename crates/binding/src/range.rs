//! Range queries over a collection.
//!
//! RavenDB has no ordered key scan, so a scan becomes a collection query
//! bounded below on the document id and paged to the requested count. The
//! store returns matches in id order.

use ravendb_store::IndexQuery;

/// Query parameter carrying the first document id of the range.
pub const START_ID_PARAMETER: &str = "startId";

/// Query for up to `limit` documents of `collection` with id `>= start_id`.
pub fn collection_range_query(collection: &str, start_id: &str, limit: usize) -> IndexQuery {
    let text = format!(
        "from '{}' where id() >= ${}",
        escape_literal(collection),
        START_ID_PARAMETER
    );
    IndexQuery::new(text)
        .with_parameter(START_ID_PARAMETER, start_id)
        .with_page_size(limit)
}

/// Escape a value for use inside a single-quoted RQL string.
fn escape_literal(raw: &str) -> String {
    raw.replace('\\', "\\\\").replace('\'', "\\'")
}
