//! Entrypoint of the updatable rate provider deploy CLI

use std::process;

use clap::Parser;
use rate_provider_scripts::{cli::Cli, commands::deploy_updatable_rate_provider};
use tracing::error;

fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().pretty().init();

    let cli = Cli::parse();

    if let Err(e) = deploy_updatable_rate_provider(&cli) {
        error!("{}", e);
        process::exit(e.exit_code());
    }
}
