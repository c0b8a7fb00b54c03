use anyhow::Result;
use clap::Parser;
use gradebook::cli::CliArgs;
use gradebook::config::Config;
use gradebook::{demo, render};
use gradebook_core::ports::SystemClock;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();
    let config = Config::from_cli_and_file(cli_args)?;

    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.output.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting Gradebook demonstration");

    let report = match demo::run(&config.payroll, &SystemClock) {
        Ok(report) => report,
        Err(err) => {
            error!("Demonstration failed: {:#}", err);
            return Err(err);
        }
    };

    print!("{}", render::render(&report, config.output.format)?);

    info!("Gradebook finished cleanly");
    Ok(())
}
