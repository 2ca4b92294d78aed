//! Layered check configuration.
//!
//! Settings are merged from, lowest precedence first:
//!
//! 1. built-in defaults
//! 2. an optional config file (`--config`, TOML/YAML/JSON by extension)
//! 3. `SOLRWATCH_*` environment variables (e.g. `SOLRWATCH_DOCS_CRITICAL=0`)
//! 4. command-line flags
//!
//! ```toml
//! port = 8983
//! regex = "^prod_"
//! time_unit = "hours"
//! age_warning = 12
//! age_critical = 24
//! docs_critical = 0
//! ```

use std::path::Path;
use std::time::Duration;

use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;

use solrwatch_adapters::solr::SolrAdapter;
use solrwatch_adapters::AdapterError;
use solrwatch_types::{TimeUnit, DEFAULT_STATUS_PATH};

use crate::cli::CoresArgs;
use crate::data::{PatternFilter, Thresholds};

/// Prefix of environment variables read as settings.
pub const ENV_PREFIX: &str = "SOLRWATCH";

/// Errors raised while assembling check options.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to load configuration")]
    Load(#[from] config::ConfigError),

    #[error("invalid core name regex")]
    Pattern(#[from] regex::Error),
}

/// Check settings before the host is known and the regex is compiled.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub port: Option<u16>,
    pub path: Option<String>,
    pub regex: Option<String>,
    pub time_unit: Option<TimeUnit>,
    pub age_warning: Option<f64>,
    pub age_critical: Option<f64>,
    pub docs_warning: Option<u64>,
    pub docs_critical: Option<u64>,
    /// Request timeout. No timeout is applied when unset.
    pub timeout_secs: Option<u64>,
}

impl Settings {
    /// Load settings from an optional file and the environment.
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }
        let config = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Overlay command-line flags; any flag given wins.
    pub fn merge_args(self, args: &CoresArgs) -> Self {
        Self {
            port: args.port.or(self.port),
            path: args.path.clone().or(self.path),
            regex: args.regex.clone().or(self.regex),
            time_unit: args.time_unit.or(self.time_unit),
            age_warning: args.age_warning.or(self.age_warning),
            age_critical: args.age_critical.or(self.age_critical),
            docs_warning: args.docs_warning.or(self.docs_warning),
            docs_critical: args.docs_critical.or(self.docs_critical),
            timeout_secs: self.timeout_secs,
        }
    }

    /// Resolve into options for checking `host`, compiling the core filter.
    pub fn resolve(self, host: impl Into<String>) -> Result<CheckOptions, SettingsError> {
        let filter = self.regex.as_deref().map(PatternFilter::new).transpose()?;

        Ok(CheckOptions {
            host: host.into(),
            port: self.port,
            path: self.path.unwrap_or_else(|| DEFAULT_STATUS_PATH.to_string()),
            filter,
            thresholds: Thresholds {
                docs_warning: self.docs_warning,
                docs_critical: self.docs_critical,
                age_warning: self.age_warning,
                age_critical: self.age_critical,
                time_unit: self.time_unit.unwrap_or_default(),
            },
            timeout: self.timeout_secs.map(Duration::from_secs),
        })
    }
}

/// Fully resolved options for one check run.
#[derive(Debug, Clone)]
pub struct CheckOptions {
    pub host: String,
    pub port: Option<u16>,
    pub path: String,
    pub filter: Option<PatternFilter>,
    pub thresholds: Thresholds,
    pub timeout: Option<Duration>,
}

impl CheckOptions {
    /// Build the adapter that fetches status for these options.
    pub fn adapter(&self) -> Result<SolrAdapter, AdapterError> {
        let mut builder = SolrAdapter::builder()
            .host(self.host.as_str())
            .path(self.path.as_str());
        if let Some(port) = self.port {
            builder = builder.port(port);
        }
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        builder.build()
    }
}
