use std::path::PathBuf;

use clap::Parser;
use jobsearch_core::Locale;
use search_logging::LogDestination;

/// Search the JobTech job listings from the terminal.
#[derive(Debug, Parser)]
#[command(name = "jobsearch", version, about)]
pub struct Cli {
    /// Config file (RON). Defaults to ./jobsearch.ron when present.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Search endpoint, overriding the config file.
    #[arg(long)]
    pub endpoint: Option<String>,

    /// UI language: en or sv.
    #[arg(long)]
    pub lang: Option<Locale>,

    /// Log destination: file, terminal, both or off.
    #[arg(long)]
    pub log: Option<LogDestination>,

    /// Print the effective configuration and exit.
    #[arg(long)]
    pub print_config: bool,

    /// Query to search for on start-up.
    pub query: Vec<String>,
}

impl Cli {
    pub fn initial_query(&self) -> Option<String> {
        (!self.query.is_empty()).then(|| self.query.join(" "))
    }
}
