//! Threshold evaluation over Solr core status.
//!
//! This module turns a decoded [`StatusDocument`](solrwatch_types::StatusDocument)
//! into a [`Verdict`](solrwatch_types::Verdict).
//!
//! ## Submodules
//!
//! - [`duration`]: Timestamp parsing and relative age phrasing (e.g., "3 hours")
//! - [`evaluator`]: The per-core checks and the summary ([`Evaluator`])
//! - [`filter`]: Core name filtering ([`CoreFilter`], [`PatternFilter`])
//! - [`thresholds`]: Document-count and age bounds ([`Thresholds`])
//!
//! ## Data Flow
//!
//! ```text
//! StatusDocument (decoded JSON)
//!        │
//!        ▼
//! Evaluator::evaluate()
//!        │
//!        ├──▶ CoreFilter::matches()      (skip excluded cores)
//!        ├──▶ Thresholds::docs_severity() + perf sample <core>.numDocs
//!        ├──▶ Thresholds::age_severity()  + perf sample <core>.age
//!        │
//!        └──▶ Verdict (worst severity wins)
//! ```

pub mod duration;
pub mod evaluator;
pub mod filter;
pub mod thresholds;

pub use evaluator::Evaluator;
pub use filter::{CoreFilter, PatternFilter};
pub use thresholds::Thresholds;
