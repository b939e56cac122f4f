//! friend-rec: load an edge list, run recommendations or evaluations, print JSON to stdout.

use clap::Parser;
use rec_cli::args::Cli;
use rec_cli::run;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let output = run::execute(&cli)?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
