//! Binding configuration from harness properties.
//!
//! | Property | Default |
//! |----------|---------|
//! | `ravendb.url` | `http://localhost:8080` (comma-separated node list) |
//! | `ravendb.database` | `ycsb` |
//! | `ravendb.certificate` | unset; one PEM file, certificate + private key (not PKCS#12) |
//! | `ravendb.timeout_ms` | unset; no request timeout |

use ravendb_store::{StoreConfig, StoreError, StoreHandle, DEFAULT_DATABASE, DEFAULT_URL};
use ycsb_core::{DbError, Properties, Result};

/// Comma-separated node URLs.
pub const RAVENDB_URL: &str = "ravendb.url";
/// Database name.
pub const RAVENDB_DATABASE: &str = "ravendb.database";
/// Client certificate path: one PEM file with certificate and private key.
pub const RAVENDB_CERTIFICATE: &str = "ravendb.certificate";
/// Request timeout in milliseconds.
pub const RAVENDB_TIMEOUT_MS: &str = "ravendb.timeout_ms";

/// Build store connection settings from harness properties.
///
/// # Errors
///
/// Returns [`DbError::InvalidProperty`] for a malformed value.
pub fn store_config(props: &Properties) -> Result<StoreConfig> {
    let mut config = StoreConfig::new(
        props.get_or(RAVENDB_URL, DEFAULT_URL),
        props.get_or(RAVENDB_DATABASE, DEFAULT_DATABASE),
    );
    if let Some(path) = props.get(RAVENDB_CERTIFICATE) {
        config = config.with_certificate(path);
    }
    if let Some(timeout_ms) = props.get_parsed::<u64>(RAVENDB_TIMEOUT_MS)? {
        config = config.with_timeout_ms(timeout_ms);
    }
    config.validate_urls().map_err(|e| invalid(RAVENDB_URL, e))?;
    config
        .validate_database()
        .map_err(|e| invalid(RAVENDB_DATABASE, e))?;
    Ok(config)
}

fn invalid(key: &str, error: StoreError) -> DbError {
    DbError::InvalidProperty {
        key: key.to_string(),
        reason: error.to_string(),
    }
}

/// Open the shared store connection described by `props`.
///
/// Call once during harness setup and hand a clone of the returned handle
/// to every [`RavenDbClient`](crate::RavenDbClient).
///
/// # Errors
///
/// Returns an error if the properties are invalid or the client cannot be
/// initialized.
pub fn open_store(props: &Properties) -> Result<StoreHandle> {
    let config = store_config(props)?;
    StoreHandle::open(&config)
        .map_err(|e| DbError::Init(format!("Could not initialize RavenDB store: {}", e)))
}
