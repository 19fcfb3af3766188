//! Query requests.
//!
//! An [`IndexQuery`] carries RQL text, its named parameters and an optional
//! page size. It is what RavenDB's `/queries` endpoint accepts; the
//! in-memory store evaluates a subset of the same text.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// An RQL query with parameters and paging.
///
/// # Example
///
/// ```ignore
/// let query = IndexQuery::new("from 'users' where id() >= $start")
///     .with_parameter("start", "users/100")
///     .with_page_size(10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexQuery {
    /// RQL text
    pub query: String,
    /// Named parameters referenced as `$name` in the text
    #[serde(default)]
    pub parameters: Map<String, Value>,
    /// Maximum number of results, if bounded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<usize>,
}

impl IndexQuery {
    /// Create a query from RQL text.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            parameters: Map::new(),
            page_size: None,
        }
    }

    /// Bind a named parameter.
    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.parameters.insert(name.into(), value.into());
        self
    }

    /// Bound the number of results.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Request body for RavenDB's `/queries` endpoint.
    pub fn to_request_body(&self) -> Value {
        let mut body = json!({
            "Query": self.query,
            "QueryParameters": self.parameters,
        });
        if let Some(page_size) = self.page_size {
            body["PageSize"] = json!(page_size);
        }
        body
    }
}
