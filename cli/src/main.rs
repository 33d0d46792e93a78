use clap::Parser;
use ordheap_cli::config::cli::{Cli, Commands};
use ordheap_cli::demo;

use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    tracer::init_tracing("ordheap-cli", Some(&cli.common.log_level), cli.common.json_logs)?;

    let mut stdout = std::io::stdout().lock();
    match &cli.command {
        Commands::Demo(config) => demo::run_demo(config.count, &mut stdout)?,
        Commands::Drain(config) => {
            demo::run_drain(config.order, config.values.clone(), &mut stdout)?
        }
    }
    Ok(())
}
