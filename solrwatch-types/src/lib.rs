//! # solrwatch-types
//!
//! Core types for solrwatch. This crate defines the vocabulary of a
//! monitoring-plugin check (severities, performance data and the verdict
//! they roll up into) together with the schema of the Solr core admin
//! status document that solrwatch evaluates.
//!
//! ## Design Goals
//!
//! - **No I/O**: every type here is plain data; fetching and evaluation live elsewhere
//! - **Optional serialization**: enable the `serde` feature to decode Solr responses
//! - **Plugin contract**: [`Verdict`] renders the single status line a supervisor expects
//!
//! ## Features
//!
//! - `serde`: serde derives for [`StatusDocument`] and friends
//!
//! ## Example
//!
//! ```rust
//! use solrwatch_types::{PerfData, Severity, Verdict};
//!
//! let mut verdict = Verdict::new();
//! verdict.add_message(Severity::Ok, "Oldest core is a day old.");
//! verdict.add_message(Severity::Warning, "Solr core books has 12 docs.");
//! verdict.add_perf_data(PerfData::new("books.numDocs", 12.0).with_min(0.0));
//!
//! assert_eq!(verdict.severity(), Severity::Warning);
//! assert_eq!(
//!     verdict.to_string(),
//!     "WARNING - Solr core books has 12 docs. | books.numDocs=12;;;0"
//! );
//! ```

mod perfdata;
mod severity;
mod status;
mod time_unit;
mod verdict;

pub use perfdata::*;
pub use severity::*;
pub use status::*;
pub use time_unit::*;
pub use verdict::*;

/// Default path of the Solr core admin status endpoint.
pub const DEFAULT_STATUS_PATH: &str = "/solr/admin/cores?wt=json";
