use anyhow::{Context, Result};
use clap::Parser;
use marketdates::config::{Args, Config};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from(Args::parse());
    tracing::debug!(?config, "starting");

    let outcome = marketdates::run(&config).with_context(|| {
        format!(
            "failed to derive non-trading days from {}",
            config.input.display()
        )
    })?;
    println!("{}", outcome.message(&config));
    Ok(())
}
