use clap::Parser;
use log::{error, info};

use pet_boarding_backend::io::cli::{self, Cli};

fn main() -> anyhow::Result<()> {
    // RUST_LOG overrides; stay quiet by default so tables aren't interleaved with logs
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    info!("Starting pet-boarding");

    cli::run(cli).inspect_err(|e| error!("Command failed: {:#}", e))
}
