//! Solr adapter using the core admin HTTP API.
//!
//! This adapter fetches the status of every core from a Solr instance by
//! querying the core admin endpoint, by default
//! `http://{host}/solr/admin/cores?wt=json`.
//!
//! ## Fields Used
//!
//! - **responseHeader.status**: overall request status, zero on success
//! - **status.<core>.index.numDocs**: document count per core
//! - **status.<core>.index.lastModified**: ISO-8601 time of the last commit
//!
//! ## Example
//!
//! ```rust,no_run
//! use solrwatch_adapters::solr::SolrAdapter;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let adapter = SolrAdapter::builder()
//!         .host("localhost")
//!         .port(8983)
//!         .build()?;
//!
//!     let fetched = adapter.collect().await?;
//!
//!     for (name, core) in fetched.document.cores().into_iter().flatten() {
//!         println!("Core: {} docs: {:?}", name, core.num_docs());
//!     }
//!
//!     Ok(())
//! }
//! ```

use std::time::{Duration, Instant};

use reqwest::{Client, StatusCode};
use tracing::debug;

use solrwatch_types::{StatusDocument, DEFAULT_STATUS_PATH};

use crate::AdapterError;

/// Solr adapter for collecting core status.
#[derive(Debug, Clone)]
pub struct SolrAdapter {
    client: Client,
    host: String,
    port: Option<u16>,
    path: String,
}

/// A decoded status document together with how long the request took.
#[derive(Debug, Clone)]
pub struct Fetched {
    pub document: StatusDocument,
    /// Wall time from sending the request to having the full body.
    pub elapsed: Duration,
}

impl SolrAdapter {
    /// Create a new builder for configuring the adapter.
    pub fn builder() -> SolrAdapterBuilder {
        SolrAdapterBuilder::default()
    }

    /// The URL the adapter queries.
    pub fn url(&self) -> String {
        match self.port {
            Some(port) => format!("http://{}:{}{}", self.host, port, self.path),
            None => format!("http://{}{}", self.host, self.path),
        }
    }

    /// Fetch and decode the core status document.
    ///
    /// Anything other than an HTTP 200 with a JSON body is an error; a JSON
    /// body that is merely missing fields decodes fine and is left for the
    /// caller to judge.
    pub async fn collect(&self) -> Result<Fetched, AdapterError> {
        let url = self.url();
        debug!(%url, "fetching solr core status");

        let started = Instant::now();
        let response = self.client.get(&url).send().await?;

        if response.status() != StatusCode::OK {
            return Err(AdapterError::UnexpectedStatus(response.status().as_u16()));
        }

        let body = response.text().await?;
        let elapsed = started.elapsed();
        debug!(bytes = body.len(), ?elapsed, "received solr core status");

        let document: StatusDocument = serde_json::from_str(&body)?;

        Ok(Fetched { document, elapsed })
    }
}

/// Builder for SolrAdapter.
#[derive(Debug, Default)]
pub struct SolrAdapterBuilder {
    host: Option<String>,
    port: Option<u16>,
    path: Option<String>,
    timeout: Option<Duration>,
}

impl SolrAdapterBuilder {
    /// Set the host name or address (default: "localhost").
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Set the port. Without one the URL carries no port at all.
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the endpoint path and query (default: "/solr/admin/cores?wt=json").
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Set a request timeout. Without one the client's defaults apply.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the adapter.
    pub fn build(self) -> Result<SolrAdapter, AdapterError> {
        let mut builder = Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| AdapterError::Client(e.to_string()))?;

        let path = self
            .path
            .unwrap_or_else(|| DEFAULT_STATUS_PATH.to_string());

        Ok(SolrAdapter {
            client,
            host: self.host.unwrap_or_else(|| "localhost".to_string()),
            port: self.port,
            path: normalize_path(path),
        })
    }
}

// Ensure the path is rooted so it can be appended to the authority
fn normalize_path(path: String) -> String {
    if path.starts_with('/') {
        path
    } else {
        format!("/{}", path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::net::SocketAddr;

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve one canned HTTP response on a local port and return the address.
    async fn serve_once(status_line: &'static str, body: &'static str) -> SocketAddr {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });

        addr
    }

    fn adapter_for(addr: SocketAddr) -> SolrAdapter {
        SolrAdapter::builder()
            .host(addr.ip().to_string())
            .port(addr.port())
            .build()
            .unwrap()
    }

    #[test]
    fn test_builder_defaults() {
        let adapter = SolrAdapter::builder().build().unwrap();
        assert_eq!(adapter.host, "localhost");
        assert_eq!(adapter.port, None);
        assert_eq!(adapter.path, "/solr/admin/cores?wt=json");
        assert_eq!(adapter.url(), "http://localhost/solr/admin/cores?wt=json");
    }

    #[test]
    fn test_builder_custom() {
        let adapter = SolrAdapter::builder()
            .host("solr.local")
            .port(8983)
            .path("/search/admin/cores?wt=json&action=STATUS")
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();

        assert_eq!(
            adapter.url(),
            "http://solr.local:8983/search/admin/cores?wt=json&action=STATUS"
        );
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("solr/admin".to_string()), "/solr/admin");
        assert_eq!(normalize_path("/solr/admin".to_string()), "/solr/admin");
    }

    #[tokio::test]
    async fn test_collect_decodes_document() {
        let addr = serve_once(
            "200 OK",
            r#"{"responseHeader":{"status":0},"status":{"books":{"index":{"numDocs":7}}}}"#,
        )
        .await;

        let fetched = adapter_for(addr).collect().await.unwrap();
        assert_eq!(fetched.document.response_status(), Some(0));
        assert_eq!(fetched.document.cores().unwrap()["books"].num_docs(), Some(7));
    }

    #[tokio::test]
    async fn test_collect_rejects_non_200() {
        let addr = serve_once("503 Service Unavailable", "{}").await;

        let err = adapter_for(addr).collect().await.unwrap_err();
        assert!(matches!(err, AdapterError::UnexpectedStatus(503)));
    }

    #[tokio::test]
    async fn test_collect_rejects_malformed_json() {
        let addr = serve_once("200 OK", "<html>not json</html>").await;

        let err = adapter_for(addr).collect().await.unwrap_err();
        assert!(matches!(err, AdapterError::Parse(_)));
    }

    #[tokio::test]
    async fn test_collect_connection_refused() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = adapter_for(addr).collect().await.unwrap_err();
        assert!(matches!(
            err,
            AdapterError::Connection(_) | AdapterError::Http(_)
        ));
    }
}
