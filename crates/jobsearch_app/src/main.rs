mod cli;
mod config;
mod platform;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let mut config = config::AppConfig::load(cli.config.as_deref())?;
    config.apply_overrides(&cli);

    if cli.print_config {
        println!("{}", config.to_ron()?);
        return Ok(());
    }

    search_logging::initialize(config.log, config.log_level()?);
    platform::run_app(config, cli.initial_query())
}
