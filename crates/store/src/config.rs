//! Connection configuration via `ravendb.toml`
//!
//! The binding normally builds a [`StoreConfig`] from harness properties;
//! standalone tools can keep the same settings in a TOML file instead.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, StoreError};

/// Node URL used when none is configured.
pub const DEFAULT_URL: &str = "http://localhost:8080";

/// Database used when none is configured.
pub const DEFAULT_DATABASE: &str = "ycsb";

/// Conventional config file name.
pub const CONFIG_FILE_NAME: &str = "ravendb.toml";

/// Connection settings for a RavenDB cluster.
///
/// # Example
///
/// ```toml
/// urls = ["http://10.0.0.1:8080", "http://10.0.0.2:8080"]
/// database = "ycsb"
/// # certificate = "/etc/ravendb/client.pem"
/// # timeout_ms = 5000
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoreConfig {
    /// Node URLs, tried in order.
    #[serde(default = "default_urls")]
    pub urls: Vec<String>,
    /// Database name.
    #[serde(default = "default_database")]
    pub database: String,
    /// PEM file holding the client certificate and its private key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate: Option<PathBuf>,
    /// Per-request timeout in milliseconds. No timeout when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
}

fn default_urls() -> Vec<String> {
    vec![DEFAULT_URL.to_string()]
}

fn default_database() -> String {
    DEFAULT_DATABASE.to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            urls: default_urls(),
            database: default_database(),
            certificate: None,
            timeout_ms: None,
        }
    }
}

impl StoreConfig {
    /// Config for the given comma-separated node list and database.
    pub fn new(urls: &str, database: impl Into<String>) -> Self {
        Self {
            urls: parse_urls(urls),
            database: database.into(),
            ..Self::default()
        }
    }

    /// Use a client certificate.
    pub fn with_certificate(mut self, path: impl Into<PathBuf>) -> Self {
        self.certificate = Some(path.into());
        self
    }

    /// Bound every request by a timeout.
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }

    /// Check that the settings can be used to connect.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Config`] if no node URL is given, a URL is not
    /// `http://` or `https://`, or the database name is empty.
    pub fn validate(&self) -> Result<()> {
        self.validate_urls()?;
        self.validate_database()
    }

    /// Check that at least one node URL is set and each has an HTTP scheme.
    pub fn validate_urls(&self) -> Result<()> {
        if self.urls.is_empty() {
            return Err(StoreError::config("at least one node URL is required"));
        }
        for url in &self.urls {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(StoreError::config(format!(
                    "node URL '{}' must start with http:// or https://",
                    url
                )));
            }
        }
        Ok(())
    }

    /// Check that the database name is not blank.
    pub fn validate_database(&self) -> Result<()> {
        if self.database.trim().is_empty() {
            return Err(StoreError::config("database name must not be empty"));
        }
        Ok(())
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            StoreError::config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let mut config: StoreConfig = toml::from_str(&content).map_err(|e| {
            StoreError::config(format!(
                "failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        config.urls = config.urls.iter().flat_map(|u| parse_urls(u)).collect();
        config.validate()?;
        Ok(config)
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| StoreError::config(format!("failed to serialize config: {}", e)))?;
        std::fs::write(path, content).map_err(|e| {
            StoreError::config(format!(
                "failed to write config file '{}': {}",
                path.display(),
                e
            ))
        })
    }
}

/// Split a comma-separated node list, dropping blanks and trailing slashes.
pub(crate) fn parse_urls(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|u| u.trim().trim_end_matches('/'))
        .filter(|u| !u.is_empty())
        .map(str::to_string)
        .collect()
}
