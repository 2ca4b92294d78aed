//! Command-line interface.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use solrwatch_types::TimeUnit;

#[derive(Parser, Debug)]
#[command(name = "solrwatch", version)]
#[command(about = "Monitoring-plugin health check for Solr cores")]
pub struct Cli {
    /// Log more to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file supplying defaults for the check options
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Checks the status and age of solr cores on a host
    Cores(CoresArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct CoresArgs {
    /// Host running the Solr web app
    pub host: String,

    /// The port of the Solr web app
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Path of the core status endpoint [default: /solr/admin/cores?wt=json]
    #[arg(short = 'u', long = "url", value_name = "PATH")]
    pub path: Option<String>,

    /// Case-insensitive regex the core names must match
    #[arg(short, long)]
    pub regex: Option<String>,

    /// Unit of the age thresholds: milliseconds, seconds, minutes, hours, days or years [default: minutes]
    #[arg(short = 't', long = "time", value_name = "UNIT")]
    pub time_unit: Option<TimeUnit>,

    /// Age at or above which a core is WARNING
    #[arg(long, value_name = "N")]
    pub age_warning: Option<f64>,

    /// Age at or above which a core is CRITICAL
    #[arg(long, value_name = "N")]
    pub age_critical: Option<f64>,

    /// Document count at or below which a core is WARNING
    #[arg(long, value_name = "N")]
    pub docs_warning: Option<u64>,

    /// Document count at or below which a core is CRITICAL
    #[arg(long, value_name = "N")]
    pub docs_critical: Option<u64>,
}
