use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crunchy_archive::{validation, ArchiveCommand, Args, DownloadConfig};

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("crunchy_archive={}", level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = DownloadConfig::from_args(&args);
    debug!("Resolved configuration for {}", config.url);

    if let Err(e) = validation::validate(&config) {
        println!("{}", e);
        std::process::exit(1);
    }

    let command = ArchiveCommand::new(&args.bin, &config);
    if args.dry_run {
        println!("{}", command);
        return Ok(());
    }

    command.run().await?;
    Ok(())
}
