//! # solrwatch-adapters
//!
//! Adapters for collecting core status from Solr.
//!
//! The [`solr`] adapter issues a single GET against the core admin
//! endpoint and decodes the response into a [`StatusDocument`], leaving
//! threshold evaluation to the caller.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use solrwatch_adapters::solr::SolrAdapter;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let adapter = SolrAdapter::builder()
//!         .host("solr.local")
//!         .port(8983)
//!         .build()?;
//!
//!     let fetched = adapter.collect().await?;
//!
//!     println!(
//!         "Fetched {} cores in {:?}",
//!         fetched.document.cores().map_or(0, |c| c.len()),
//!         fetched.elapsed
//!     );
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod solr;

pub use error::AdapterError;

// Re-export types for convenience
pub use solrwatch_types::{CoreStatus, IndexStatus, ResponseHeader, StatusDocument};
