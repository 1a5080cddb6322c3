use clap::Parser;
use maxmin_cli::config::{Cli, Commands};

use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    match &cli.command {
        Commands::Top(config) => {
            tracer::init_tracing("maxmin-cli", Some(&config.log_level), config.json_logs)?;
            let items = maxmin_cli::input::read_input(config.input.as_deref())?;
            let retained = maxmin_cli::run::run_top(config, items)?;
            maxmin_cli::output::write_items(
                &mut std::io::stdout().lock(),
                &retained,
                config.output,
            )?;
        }
    }
    Ok(())
}
