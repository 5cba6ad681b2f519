mod cli;
mod commands;
mod config;
mod error;
mod pdf;
mod progress;

use clap::Parser;
use cli::Cli;
use config::Config;
use progress::Progress;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let config = Config::new(cli.input_file, cli.output_file).with_env();

    if let Err(e) = commands::split::run(config, &mut Progress::stdout()) {
        e.report(&mut std::io::stdout());
        std::process::exit(e.exit_code());
    }
}
