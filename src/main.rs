#![warn(clippy::all, clippy::pedantic)]

use anyhow::Result;
use clap::Parser;
use specname::{Cli, Config};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only the generated name.
    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = Config::resolve(cli.config.as_deref())?;
    config.apply_locale();
    specname::app::dispatch::dispatch(cli, config)
}
