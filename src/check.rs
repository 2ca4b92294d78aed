//! Running a check end to end.
//!
//! Failures fall into two groups. Anything that goes wrong talking to Solr
//! is the monitored service's fault and becomes a CRITICAL verdict. Anything
//! that goes wrong before a request can be made (bad configuration, an
//! invalid regex, no async runtime) is the check's own fault and becomes
//! UNKNOWN.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, error, warn};

use solrwatch_adapters::solr::SolrAdapter;
use solrwatch_types::{Severity, Verdict};

use crate::cli::CoresArgs;
use crate::config::{CheckOptions, Settings};
use crate::data::{CoreFilter, Evaluator};

/// Run the `cores` check and return its verdict. Never fails.
pub fn run_cores(args: &CoresArgs, config_path: Option<&Path>) -> Verdict {
    match try_run_cores(args, config_path) {
        Ok(verdict) => verdict,
        Err(err) => {
            error!(error = ?err, "check could not be run");
            // The status line is a single line; flatten multi-line causes
            let message = format!("{:#}", err)
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ");
            Verdict::single(Severity::Unknown, message)
        }
    }
}

fn try_run_cores(args: &CoresArgs, config_path: Option<&Path>) -> Result<Verdict> {
    let options = Settings::load(config_path)?
        .merge_args(args)
        .resolve(args.host.as_str())?;
    debug!(?options, "resolved check options");

    let adapter = options.adapter()?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    Ok(runtime.block_on(check_cores(&adapter, &options)))
}

/// Fetch core status with `adapter` and evaluate it against `options`.
///
/// Transport failures end the check immediately with a single CRITICAL
/// message; nothing is retried.
pub async fn check_cores(adapter: &SolrAdapter, options: &CheckOptions) -> Verdict {
    match adapter.collect().await {
        Ok(fetched) => Evaluator::new(&options.thresholds)
            .with_filter(options.filter.as_ref().map(|f| f as &dyn CoreFilter))
            .evaluate(&fetched.document, fetched.elapsed),
        Err(err) => {
            warn!(url = %adapter.url(), error = %err, "solr status request failed");
            Verdict::single(Severity::Critical, err.to_string())
        }
    }
}
