// src/bin/crypto_tracker.rs
use clap::Parser;
use crypto_tracker::{cli, log};

#[tokio::main(flavor = "current_thread")]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = cli::Args::parse();
    log::init(args.verbose);

    println!("Starting Cryptocurrency Tracker...");
    cli::run(&args).await?;
    Ok(())
}
