//! Reserved document metadata names.
//!
//! Every RavenDB document carries a top-level `@metadata` object. The
//! binding writes `@collection` into it; the server adds `@id` (and more)
//! when it returns a document.

/// Top-level field holding the metadata object.
pub const KEY: &str = "@metadata";

/// Collection tag inside the metadata object.
pub const COLLECTION: &str = "@collection";

/// Document id inside the metadata object, filled in by the store.
pub const ID: &str = "@id";

/// Collection assigned to documents written without a collection tag.
pub const EMPTY_COLLECTION: &str = "@empty";
