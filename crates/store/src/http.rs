//! HttpDocumentStore: RavenDB over its HTTP API
//!
//! | Command | Request | Success |
//! |---------|---------|---------|
//! | `GetDocument` | `GET /databases/{db}/docs?id=` | 200, or 404 for a missing id |
//! | `PutDocument` | `PUT /databases/{db}/docs?id=` | 200 / 201 |
//! | `DeleteDocument` | `DELETE /databases/{db}/docs?id=` | 200 / 204 / 404 |
//! | `Query` | `POST /databases/{db}/queries` | 200 |
//!
//! Nodes are tried in configured order. A request that gets no response at
//! all moves on to the next node; a response with any status ends the
//! command. There is no retry beyond that.

use std::path::Path;
use std::time::Duration;

use serde_json::Value;
use tracing::{trace, warn};
use ureq::http::Response;
use ureq::tls::{Certificate, ClientCert, PrivateKey, TlsConfig};
use ureq::{Agent, Body};

use crate::command::{Command, Document};
use crate::config::StoreConfig;
use crate::error::{Result, StoreError};
use crate::output::Output;
use crate::store::DocumentStore;

/// Document store backed by a RavenDB cluster.
pub struct HttpDocumentStore {
    agent: Agent,
    nodes: Vec<String>,
    database: String,
}

impl HttpDocumentStore {
    /// Build a client from connection settings.
    ///
    /// No request is made here; the first command opens the connection.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings are invalid or the client
    /// certificate cannot be loaded.
    pub fn connect(config: &StoreConfig) -> Result<Self> {
        config.validate()?;

        let mut builder = Agent::config_builder().http_status_as_error(false);
        if let Some(ms) = config.timeout_ms {
            builder = builder.timeout_global(Some(Duration::from_millis(ms)));
        }
        if let Some(path) = &config.certificate {
            builder = builder.tls_config(load_client_certificate(path)?);
        }
        let agent = Agent::new_with_config(builder.build());

        Ok(Self {
            agent,
            nodes: config.urls.clone(),
            database: config.database.clone(),
        })
    }

    fn docs_url(&self, node: &str) -> String {
        format!("{}/databases/{}/docs", node, self.database)
    }

    fn queries_url(&self, node: &str) -> String {
        format!("{}/databases/{}/queries", node, self.database)
    }

    /// Send a request to the first node that answers; returns status and body.
    fn round_trip<F>(&self, command: &'static str, mut send: F) -> Result<(u16, String)>
    where
        F: FnMut(&str) -> std::result::Result<Response<Body>, ureq::Error>,
    {
        let mut last_error = None;
        for node in &self.nodes {
            match send(node) {
                Ok(mut response) => {
                    let status = response.status().as_u16();
                    let body = response.body_mut().read_to_string().map_err(|e| {
                        StoreError::Transport {
                            url: node.clone(),
                            reason: format!("failed to read response: {}", e),
                        }
                    })?;
                    trace!(target: "ravendb::store", command, node = %node, status, "response");
                    return Ok((status, body));
                }
                Err(e) => {
                    warn!(
                        target: "ravendb::store",
                        command,
                        node = %node,
                        error = %e,
                        "Request failed"
                    );
                    last_error = Some(StoreError::Transport {
                        url: node.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }
        Err(last_error.unwrap_or_else(|| StoreError::config("no node URLs configured")))
    }
}

impl DocumentStore for HttpDocumentStore {
    fn execute(&self, command: Command) -> Result<Output> {
        let name = command.name();
        match command {
            Command::GetDocument { id } => {
                let (status, body) = self.round_trip(name, |node| {
                    self.agent.get(&self.docs_url(node)).query("id", &id).call()
                })?;
                match status {
                    200 => Ok(Output::Documents(parse_results(&body)?)),
                    404 => Ok(Output::Documents(Vec::new())),
                    _ => Err(status_error(name, status, &body)),
                }
            }
            Command::PutDocument { id, document } => {
                let payload = serde_json::to_vec(&document)?;
                let (status, body) = self.round_trip(name, |node| {
                    self.agent
                        .put(&self.docs_url(node))
                        .query("id", &id)
                        .header("Content-Type", "application/json")
                        .send(&payload[..])
                })?;
                match status {
                    200 | 201 => Ok(Output::Ack),
                    _ => Err(status_error(name, status, &body)),
                }
            }
            Command::DeleteDocument { id } => {
                let (status, body) = self.round_trip(name, |node| {
                    self.agent.delete(&self.docs_url(node)).query("id", &id).call()
                })?;
                match status {
                    200 | 204 | 404 => Ok(Output::Ack),
                    _ => Err(status_error(name, status, &body)),
                }
            }
            Command::Query(query) => {
                let payload = serde_json::to_vec(&query.to_request_body())?;
                let (status, body) = self.round_trip(name, |node| {
                    self.agent
                        .post(&self.queries_url(node))
                        .header("Content-Type", "application/json")
                        .send(&payload[..])
                })?;
                match status {
                    200 => Ok(Output::QueryResults(parse_results(&body)?)),
                    _ => Err(status_error(name, status, &body)),
                }
            }
        }
    }
}

/// Extract the `Results` array of a RavenDB response.
///
/// `null` entries (ids the server could not find) are skipped; any other
/// non-object entry is a protocol error.
pub(crate) fn parse_results(body: &str) -> Result<Vec<Document>> {
    let json: Value = serde_json::from_str(body)?;
    let results = json
        .get("Results")
        .and_then(Value::as_array)
        .ok_or_else(|| StoreError::protocol("response has no Results array"))?;

    let mut documents = Vec::with_capacity(results.len());
    for entry in results {
        match entry {
            Value::Object(doc) => documents.push(doc.clone()),
            Value::Null => {}
            other => {
                return Err(StoreError::protocol(format!(
                    "expected a document in Results, got {}",
                    other
                )))
            }
        }
    }
    Ok(documents)
}

/// Build a status error, preferring the server's `Message` field.
fn status_error(command: &'static str, status: u16, body: &str) -> StoreError {
    let message = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|json| json.get("Message").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| body.chars().take(200).collect());
    StoreError::Status {
        command,
        status,
        message,
    }
}

fn load_client_certificate(path: &Path) -> Result<TlsConfig> {
    let pem = std::fs::read(path).map_err(|e| StoreError::Certificate {
        reason: format!("failed to read '{}': {}", path.display(), e),
    })?;
    let cert = Certificate::from_pem(&pem).map_err(|e| StoreError::Certificate {
        reason: format!(
            "no PEM certificate in '{}' (expected one PEM file with certificate \
             and private key; PKCS#12 is not supported): {}",
            path.display(),
            e
        ),
    })?;
    let key = PrivateKey::from_pem(&pem).map_err(|e| StoreError::Certificate {
        reason: format!(
            "no PEM private key in '{}' (expected one PEM file with certificate \
             and private key): {}",
            path.display(),
            e
        ),
    })?;
    Ok(TlsConfig::builder()
        .client_cert(Some(ClientCert::new_with_certs(&[cert], key)))
        .build())
}
