//! # solrwatch
//!
//! A monitoring-plugin health check for Solr, and the library behind it.
//!
//! solrwatch fetches the core admin status of a Solr instance, checks every
//! core's document count and index age against optional thresholds, and
//! reports a single verdict in the form a Nagios-compatible supervisor
//! expects: one status line on stdout and an exit code of 0 (OK),
//! 1 (WARNING), 2 (CRITICAL) or 3 (UNKNOWN).
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                          solrwatch                           │
//! │  ┌────────┐   ┌──────────┐   ┌──────────────┐   ┌──────────┐ │
//! │  │  cli   │──▶│  config  │──▶│    check     │──▶│ Verdict  │ │
//! │  │ (args) │   │ (layers) │   │ (run + map)  │   │ (stdout) │ │
//! │  └────────┘   └──────────┘   └──────┬───────┘   └──────────┘ │
//! │                                     │                        │
//! │                   ┌─────────────────┴──────────┐             │
//! │                   ▼                            ▼             │
//! │           ┌──────────────┐            ┌──────────────┐       │
//! │           │ SolrAdapter  │            │     data     │       │
//! │           │ (HTTP fetch) │            │ (evaluation) │       │
//! │           └──────────────┘            └──────────────┘       │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`cli`]**: Command-line arguments
//! - **[`config`]**: Layered settings (file, environment, flags) resolved into [`CheckOptions`]
//! - **[`check`]**: Runs a check end to end and maps failures to severities
//! - **[`data`]**: Threshold evaluation producing a [`Verdict`]
//! - **[`logging`]**: stderr diagnostics via `tracing`
//!
//! ## Usage
//!
//! ### As a plugin
//!
//! ```bash
//! solrwatch cores solr.local -p 8983 --docs-critical 0 --age-warning 12 --age-critical 24 -t hours
//! # OK - Oldest core is 3 hours old. Smallest core has 1,250 docs. Request completed in 0.052 seconds. | books.numDocs=1250;;;0 books.age=3;;;0
//! ```
//!
//! ### As a library
//!
//! ```no_run
//! use solrwatch::{check_cores, Settings};
//!
//! # tokio_test::block_on(async {
//! let options = Settings::default().resolve("solr.local").unwrap();
//! let adapter = options.adapter().unwrap();
//! let verdict = check_cores(&adapter, &options).await;
//! println!("{}", verdict);
//! # });
//! ```

pub mod check;
pub mod cli;
pub mod config;
pub mod data;
pub mod logging;

// Re-export main types for convenience
pub use self::check::{check_cores, run_cores};
pub use self::cli::{Cli, Commands, CoresArgs};
pub use self::config::{CheckOptions, Settings, SettingsError};
pub use self::data::{CoreFilter, Evaluator, PatternFilter, Thresholds};
pub use solrwatch_types::{PerfData, Severity, StatusDocument, TimeUnit, Verdict};
